//! Repository trait for address data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AddressResult;
use crate::models::{Address, CreateAddress, UpdateAddress};

/// Repository abstraction for address persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// All addresses of one user, default address first
    async fn for_user(&self, user_id: Uuid) -> AddressResult<Vec<Address>>;

    /// Create an address; a new default clears the user's previous one
    async fn create(&self, input: CreateAddress) -> AddressResult<Address>;

    /// Partially update an address; setting the default clears the
    /// user's other defaults
    async fn update(&self, id: Uuid, input: UpdateAddress) -> AddressResult<Address>;

    /// Delete one address, reporting whether it existed
    async fn delete(&self, id: Uuid) -> AddressResult<bool>;
}

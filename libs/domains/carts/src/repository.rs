//! Repository trait for cart data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::{AddToCart, CartAddition, CartItem};

/// Repository trait for cart persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// All cart items of a user, each with its product embedded
    async fn items_for_user(&self, user_id: Uuid) -> CartResult<Vec<CartItem>>;

    /// Add a product to a cart, incrementing the quantity when the
    /// (user, product) pair already has a row
    async fn add(&self, input: AddToCart) -> CartResult<CartAddition>;

    /// Set the quantity of a cart item, returning it with product embedded
    async fn update_quantity(&self, id: Uuid, quantity: i32) -> CartResult<CartItem>;

    /// Delete one cart item; returns false when it did not exist
    async fn delete(&self, id: Uuid) -> CartResult<bool>;

    /// Delete every cart item of a user; returns the number removed
    async fn clear_for_user(&self, user_id: Uuid) -> CartResult<u64>;
}

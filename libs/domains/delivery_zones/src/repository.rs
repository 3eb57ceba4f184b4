//! Repository trait for delivery zone data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DeliveryZoneResult;
use crate::models::{CreateDeliveryZone, DeliveryZone, UpdateDeliveryZone};

/// Repository abstraction for delivery zone persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryZoneRepository: Send + Sync {
    /// All active zones
    async fn list_active(&self) -> DeliveryZoneResult<Vec<DeliveryZone>>;

    /// Create a delivery zone
    async fn create(&self, input: CreateDeliveryZone) -> DeliveryZoneResult<DeliveryZone>;

    /// Partially update a delivery zone
    async fn update(&self, id: Uuid, input: UpdateDeliveryZone)
        -> DeliveryZoneResult<DeliveryZone>;

    /// Delete one delivery zone, reporting whether it existed
    async fn delete(&self, id: Uuid) -> DeliveryZoneResult<bool>;
}

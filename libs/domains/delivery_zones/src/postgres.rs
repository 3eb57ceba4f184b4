//! Postgres repository implementation for delivery zones

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::{DeliveryZoneError, DeliveryZoneResult},
    models::{CreateDeliveryZone, DeliveryZone, UpdateDeliveryZone},
    repository::DeliveryZoneRepository,
};

pub struct PgDeliveryZoneRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgDeliveryZoneRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl DeliveryZoneRepository for PgDeliveryZoneRepository {
    async fn list_active(&self) -> DeliveryZoneResult<Vec<DeliveryZone>> {
        let models = entity::Entity::find()
            .filter(entity::Column::IsActive.eq(true))
            .all(self.base.db())
            .await
            .map_err(|e| DeliveryZoneError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, input: CreateDeliveryZone) -> DeliveryZoneResult<DeliveryZone> {
        let zone = DeliveryZone::new(input);
        let active_model: entity::ActiveModel = zone.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| DeliveryZoneError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(zone_id = %model.id, name = %model.name, "Created delivery zone");
        Ok(model.into())
    }

    async fn update(
        &self,
        id: Uuid,
        input: UpdateDeliveryZone,
    ) -> DeliveryZoneResult<DeliveryZone> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| DeliveryZoneError::Internal(format!("Database error: {}", e)))?
            .ok_or(DeliveryZoneError::ZoneNotFound(id))?;

        let mut zone: DeliveryZone = model.into();
        zone.apply_update(input);

        let updated = self
            .base
            .update(entity::ActiveModel::from(zone))
            .await
            .map_err(|e| DeliveryZoneError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(zone_id = %id, "Updated delivery zone");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> DeliveryZoneResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| DeliveryZoneError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(zone_id = %id, "Deleted delivery zone");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

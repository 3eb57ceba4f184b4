//! Postgres repository implementation for ratings

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{RatingError, RatingResult},
    models::{CreateRating, Rating, UpdateRating},
    repository::RatingRepository,
};

pub struct PgRatingRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgRatingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    async fn for_product(&self, product_id: Uuid) -> RatingResult<Vec<Rating>> {
        let models = entity::Entity::find()
            .filter(entity::Column::ProductId.eq(product_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(self.base.db())
            .await
            .map_err(|e| RatingError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, input: CreateRating) -> RatingResult<Rating> {
        let product_id = input.product_id;
        let rating = Rating::new(input);
        let active_model: entity::ActiveModel = rating.into();

        // The product_id foreign key rejects ratings of unknown products
        let model = self.base.insert(active_model).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                RatingError::ProductNotFound(product_id)
            } else {
                RatingError::Internal(format!("Database error: {}", e))
            }
        })?;

        tracing::info!(rating_id = %model.id, product_id = %product_id, "Created rating");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, input: UpdateRating) -> RatingResult<Rating> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| RatingError::Internal(format!("Database error: {}", e)))?
            .ok_or(RatingError::RatingNotFound(id))?;

        let mut rating: Rating = model.into();
        rating.apply_update(input);

        let updated = self
            .base
            .update(entity::ActiveModel::from(rating))
            .await
            .map_err(|e| RatingError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(rating_id = %id, "Updated rating");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> RatingResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| RatingError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(rating_id = %id, "Deleted rating");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

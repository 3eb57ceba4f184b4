//! Business logic for ratings

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{RatingError, RatingResult};
use crate::models::{CreateRating, ProductRatings, Rating, UpdateRating};
use crate::repository::RatingRepository;

pub struct RatingService<R: RatingRepository> {
    repository: Arc<R>,
}

impl<R: RatingRepository> RatingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// A product's ratings newest first, with their average and count
    pub async fn get_product_ratings(&self, product_id: Uuid) -> RatingResult<ProductRatings> {
        let ratings = self.repository.for_product(product_id).await?;

        Ok(ProductRatings::from_ratings(ratings))
    }

    pub async fn create_rating(&self, input: CreateRating) -> RatingResult<Rating> {
        input
            .validate()
            .map_err(|e| RatingError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn update_rating(&self, id: Uuid, input: UpdateRating) -> RatingResult<Rating> {
        input
            .validate()
            .map_err(|e| RatingError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_rating(&self, id: Uuid) -> RatingResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(RatingError::RatingNotFound(id));
        }
        Ok(())
    }
}

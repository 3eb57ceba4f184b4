//! Repository trait for rating data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RatingResult;
use crate::models::{CreateRating, Rating, UpdateRating};

/// Repository abstraction for rating persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// A product's ratings newest first
    async fn for_product(&self, product_id: Uuid) -> RatingResult<Vec<Rating>>;

    /// Store a new rating; the product must exist
    async fn create(&self, input: CreateRating) -> RatingResult<Rating>;

    /// Partially update a rating
    async fn update(&self, id: Uuid, input: UpdateRating) -> RatingResult<Rating>;

    /// Delete one rating, reporting whether it existed
    async fn delete(&self, id: Uuid) -> RatingResult<bool>;
}

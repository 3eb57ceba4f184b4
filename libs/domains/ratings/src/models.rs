//! Rating domain models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One user's rating of one product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    /// Star count from 1 to 5
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product's ratings together with their aggregate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductRatings {
    pub ratings: Vec<Rating>,
    /// Mean star count, 0 when the product has no ratings
    pub average_rating: f64,
    pub total_ratings: u64,
}

/// DTO for creating a rating
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRating {
    pub product_id: Uuid,
    pub user_id: Uuid,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(max = 2000))]
    pub review: Option<String>,
}

/// DTO for updating a rating
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRating {
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(max = 2000))]
    pub review: Option<String>,
}

impl Rating {
    pub fn new(input: CreateRating) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            product_id: input.product_id,
            user_id: input.user_id,
            rating: input.rating,
            review: input.review,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, input: UpdateRating) {
        if let Some(rating) = input.rating {
            self.rating = rating;
        }
        if let Some(review) = input.review {
            self.review = Some(review);
        }
        self.updated_at = Utc::now();
    }
}

impl ProductRatings {
    /// Aggregate a product's ratings into the listing response
    pub fn from_ratings(ratings: Vec<Rating>) -> Self {
        let total_ratings = ratings.len() as u64;
        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            let sum: i32 = ratings.iter().map(|r| r.rating).sum();
            f64::from(sum) / total_ratings as f64
        };

        Self {
            ratings,
            average_rating,
            total_ratings,
        }
    }
}

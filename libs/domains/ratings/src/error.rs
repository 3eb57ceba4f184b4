//! Error types for the rating domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RatingError {
    #[error("Rating not found: {0}")]
    RatingNotFound(Uuid),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type RatingResult<T> = Result<T, RatingError>;

impl From<RatingError> for AppError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::RatingNotFound(id) => {
                AppError::NotFound(format!("Rating {} not found", id))
            }
            RatingError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            RatingError::Validation(msg) => AppError::BadRequest(msg),
            RatingError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for RatingError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

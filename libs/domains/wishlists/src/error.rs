//! Error types for the wishlist domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum WishlistError {
    #[error("Wishlist item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Item already in wishlist")]
    AlreadyInWishlist,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type WishlistResult<T> = Result<T, WishlistError>;

impl From<WishlistError> for AppError {
    fn from(error: WishlistError) -> Self {
        match error {
            WishlistError::ItemNotFound(id) => {
                AppError::NotFound(format!("Wishlist item {} not found", id))
            }
            WishlistError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            WishlistError::AlreadyInWishlist => {
                AppError::Conflict("Item already in wishlist".to_string())
            }
            WishlistError::Validation(message) => AppError::BadRequest(message),
            WishlistError::Internal(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for WishlistError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

//! Error types for the order domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(error: OrderError) -> Self {
        match error {
            OrderError::OrderNotFound(id) => AppError::NotFound(format!("Order {} not found", id)),
            OrderError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            OrderError::Validation(message) => AppError::BadRequest(message),
            OrderError::Internal(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

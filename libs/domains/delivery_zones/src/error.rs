//! Error types for the delivery zone domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DeliveryZoneError {
    #[error("Delivery zone not found: {0}")]
    ZoneNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DeliveryZoneResult<T> = Result<T, DeliveryZoneError>;

impl From<DeliveryZoneError> for AppError {
    fn from(error: DeliveryZoneError) -> Self {
        match error {
            DeliveryZoneError::ZoneNotFound(id) => {
                AppError::NotFound(format!("Delivery zone {} not found", id))
            }
            DeliveryZoneError::Validation(message) => AppError::BadRequest(message),
            DeliveryZoneError::Internal(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for DeliveryZoneError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

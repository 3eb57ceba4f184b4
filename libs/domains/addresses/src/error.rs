//! Error types for the address domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    AddressNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AddressResult<T> = Result<T, AddressError>;

impl From<AddressError> for AppError {
    fn from(error: AddressError) -> Self {
        match error {
            AddressError::AddressNotFound(id) => {
                AppError::NotFound(format!("Address {} not found", id))
            }
            AddressError::Validation(message) => AppError::BadRequest(message),
            AddressError::Internal(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

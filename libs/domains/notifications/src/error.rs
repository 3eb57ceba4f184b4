//! Error types for the notification domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type NotificationResult<T> = Result<T, NotificationError>;

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotificationNotFound(id) => {
                AppError::NotFound(format!("Notification {} not found", id))
            }
            NotificationError::Validation(msg) => AppError::BadRequest(msg),
            NotificationError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for NotificationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

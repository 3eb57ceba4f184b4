//! Error types for the PC build domain

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::models::PcUsage;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Build not found: {0}")]
    BuildNotFound(Uuid),

    #[error("No builds found for usage: {0}")]
    NoneForUsage(PcUsage),

    #[error("Build references a product that does not exist")]
    UnknownComponent,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BuildResult<T> = Result<T, BuildError>;

impl From<BuildError> for AppError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::BuildNotFound(id) => AppError::NotFound(format!("Build {} not found", id)),
            BuildError::NoneForUsage(usage) => {
                AppError::NotFound(format!("No builds found for usage: {}", usage))
            }
            BuildError::UnknownComponent => {
                AppError::NotFound("Build references a product that does not exist".to_string())
            }
            BuildError::Validation(msg) => AppError::BadRequest(msg),
            BuildError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BuildError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),

    #[error("No category found for usage: {0}")]
    NoCategoryForUsage(String),

    #[error("Category not found")]
    NoMatchingCategory,

    #[error("Product with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Category with name '{0}' already exists")]
    DuplicateCategoryName(String),

    #[error("Product {0} is referenced by existing orders")]
    ProductInUse(Uuid),

    #[error("Category {0} still has products assigned")]
    CategoryInUse(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            CatalogError::CategoryNotFound(id) => {
                AppError::NotFound(format!("Category {} not found", id))
            }
            CatalogError::NoCategoryForUsage(usage) => {
                AppError::NotFound(format!("No category found for usage: {}", usage))
            }
            CatalogError::NoMatchingCategory => AppError::NotFound("Category not found".to_string()),
            CatalogError::DuplicateSlug(slug) => {
                AppError::Conflict(format!("Product with slug '{}' already exists", slug))
            }
            CatalogError::DuplicateCategoryName(name) => {
                AppError::Conflict(format!("Category with name '{}' already exists", name))
            }
            CatalogError::ProductInUse(id) => AppError::Conflict(format!(
                "Product {} is referenced by existing orders",
                id
            )),
            CatalogError::CategoryInUse(id) => AppError::Conflict(format!(
                "Category {} still has products assigned",
                id
            )),
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

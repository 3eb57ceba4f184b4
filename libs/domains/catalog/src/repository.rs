use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{
    Category, CreateCategory, CreateProduct, Product, SearchPage, SearchParams, UpdateCategory,
    UpdateProduct,
};
use crate::query::CompiledListing;

/// Repository trait for product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> CatalogResult<Product>;

    /// Get a product by ID, with its category embedded
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Run a compiled listing against the products table
    async fn list(&self, listing: CompiledListing) -> CatalogResult<Vec<Product>>;

    /// Update an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Paged search over title/description with category and manufacturer narrowing
    async fn search(&self, params: SearchParams) -> CatalogResult<SearchPage>;

    /// Distinct sorted manufacturers of products in categories matching the
    /// name substring; None when no category matches
    async fn manufacturers_by_category(&self, category: &str)
        -> CatalogResult<Option<Vec<String>>>;
}

/// Repository trait for category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category
    async fn create(&self, input: CreateCategory) -> CatalogResult<Category>;

    /// Get a category by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Category>>;

    /// List all categories
    async fn list(&self) -> CatalogResult<Vec<Category>>;

    /// Update an existing category
    async fn update(&self, id: Uuid, input: UpdateCategory) -> CatalogResult<Category>;

    /// Delete a category by ID
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Find a category by its exact name
    async fn find_by_name(&self, name: &str) -> CatalogResult<Option<Category>>;
}

//! Catalog Domain
//!
//! This module provides a complete domain implementation for the product catalog:
//! products, categories and the bracketed listing filter grammar.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, listing queries
//! └─────────────┘
//! ```
//!
//! Listing requests arrive as `filters[<field>][$<op>]=<value>` query strings.
//! [`query::ListingQuery::parse`] turns the raw query into a typed set of
//! clauses and [`query::ListingQuery::compile`] lowers those clauses into a
//! SeaORM condition, ordering and paging for the repository to execute.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     postgres::PgProductRepository,
//!     service::ProductService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::products_router(service);
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::{CategoriesApiDoc, ProductsApiDoc};
pub use models::{
    Category, CreateCategory, CreateProduct, ManufacturersResponse, Product, SearchPage,
    SearchParams, UpdateCategory, UpdateProduct,
};
pub use postgres::{PgCategoryRepository, PgProductRepository};
pub use query::{CompiledListing, ListingQuery};
pub use repository::{CategoryRepository, ProductRepository};
pub use service::{CategoryService, ProductService};

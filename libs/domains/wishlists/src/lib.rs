//! Wishlist Domain
//!
//! This module provides a complete domain implementation for wishlists:
//! per-user saved products, unique per `(user_id, product_id)` pair.
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
//! │   Models    │  ← Entities and DTOs
//! └─────────────┘
//! ```
//!
//! Reads embed the referenced catalog product, category included, so the
//! storefront can render a wishlist page from one request. Saving a product
//! twice is a conflict, enforced by the unique pair index.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_wishlists::{
//!     handlers,
//!     postgres::PgWishlistRepository,
//!     service::WishlistService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgWishlistRepository::new(db);
//! let service = WishlistService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{WishlistError, WishlistResult};
pub use handlers::ApiDoc;
pub use models::{AddToWishlist, WishlistItem, WishlistQuery};
pub use postgres::PgWishlistRepository;
pub use repository::WishlistRepository;
pub use service::WishlistService;

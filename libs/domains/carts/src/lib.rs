//! Cart Domain
//!
//! This module provides a complete domain implementation for shopping carts:
//! per-user item lists keyed by `(user_id, product_id)`, quantity updates and
//! a computed cart total.
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
//! Reads embed the referenced catalog product into each item so the cart
//! total can be computed from current prices. Adding a product that is
//! already in the cart stacks onto the existing row instead of creating a
//! second one.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_carts::{
//!     handlers,
//!     postgres::PgCartRepository,
//!     service::CartService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgCartRepository::new(db);
//! let service = CartService::new(repository);
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
pub use error::{CartError, CartResult};
pub use handlers::ApiDoc;
pub use models::{
    AddToCart, CartAddition, CartItem, CartQuery, CartResponse, ClearCart, ClearedCart,
    RemovedFromCart, UpdateCartItem,
};
pub use postgres::PgCartRepository;
pub use repository::CartRepository;
pub use service::CartService;

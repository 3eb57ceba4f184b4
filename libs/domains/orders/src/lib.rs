//! Order Domain
//!
//! This module provides a complete domain implementation for customer
//! orders: checkout records with a status lifecycle and per-order product
//! lines.
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
//! Orders start `pending` and move through `active`, `completed` or
//! `cancelled`. Listings filter by exact customer email and status. Lines
//! live under `/{id}/items` and are removed with their order.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_orders::{
//!     handlers,
//!     postgres::PgOrderRepository,
//!     service::OrderService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgOrderRepository::new(db);
//! let service = OrderService::new(repository);
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
pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{
    AddOrderItem, CreateOrder, Order, OrderItem, OrderQuery, OrderStatus, UpdateOrder,
};
pub use postgres::PgOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;

//! Address Domain
//!
//! This module provides a complete domain implementation for delivery
//! addresses: per-user address books with a single default address.
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
//! Marking an address as the default clears the flag on the user's other
//! addresses, so at most one default exists per user. Listings return the
//! default address first.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_addresses::{
//!     handlers,
//!     postgres::PgAddressRepository,
//!     service::AddressService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgAddressRepository::new(db);
//! let service = AddressService::new(repository);
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
pub use error::{AddressError, AddressResult};
pub use handlers::ApiDoc;
pub use models::{Address, AddressQuery, CreateAddress, UpdateAddress};
pub use postgres::PgAddressRepository;
pub use repository::AddressRepository;
pub use service::AddressService;

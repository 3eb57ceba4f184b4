//! PC Build Domain
//!
//! This module provides a complete domain implementation for PC
//! configurations: named usage profiles with up to ten component slots,
//! each slot referencing a catalog product.
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
//! Usage profiles travel as plain strings and are parsed against the
//! [`PcUsage`] enum at the service boundary, so an unknown profile is a
//! client error everywhere it can appear. Listings resolve component
//! slots into their products in a single batched query, and paginate
//! twelve builds per page.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_builds::{
//!     handlers,
//!     postgres::PgBuildRepository,
//!     service::BuildService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgBuildRepository::new(db);
//! let service = BuildService::new(repository);
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
pub use error::{BuildError, BuildResult};
pub use handlers::ApiDoc;
pub use models::{BuildQuery, CreatePcBuild, PcBuild, PcUsage, UpdatePcBuild};
pub use postgres::PgBuildRepository;
pub use repository::BuildRepository;
pub use service::BuildService;

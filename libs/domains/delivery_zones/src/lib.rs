//! Delivery Zone Domain
//!
//! This module provides a complete domain implementation for delivery
//! areas: named zones covering sets of postal codes, with fees and
//! minimum order amounts.
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
//! Postal codes are stored as a JSON array and matched exactly. The
//! `/check` endpoint answers 200 for covered and uncovered areas alike,
//! with the body telling them apart.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_delivery_zones::{
//!     handlers,
//!     postgres::PgDeliveryZoneRepository,
//!     service::DeliveryZoneService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgDeliveryZoneRepository::new(db);
//! let service = DeliveryZoneService::new(repository);
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
pub use error::{DeliveryZoneError, DeliveryZoneResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateDeliveryZone, DeliveryZone, Serviceability, ServiceabilityQuery, UpdateDeliveryZone,
};
pub use postgres::PgDeliveryZoneRepository;
pub use repository::DeliveryZoneRepository;
pub use service::DeliveryZoneService;

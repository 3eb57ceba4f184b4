//! Rating Domain
//!
//! This module provides a complete domain implementation for product
//! ratings: star scores with optional written reviews, aggregated per
//! product.
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
//! Star counts are validated into 1..=5 before anything reaches the
//! database, and a rating can only target a product that exists. The
//! per-product listing bundles the mean star count and total alongside
//! the ratings themselves, so clients render a summary without a second
//! request.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_ratings::{
//!     handlers,
//!     postgres::PgRatingRepository,
//!     service::RatingService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgRatingRepository::new(db);
//! let service = RatingService::new(repository);
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
pub use error::{RatingError, RatingResult};
pub use handlers::ApiDoc;
pub use models::{CreateRating, ProductRatings, Rating, UpdateRating};
pub use postgres::PgRatingRepository;
pub use repository::RatingRepository;
pub use service::RatingService;

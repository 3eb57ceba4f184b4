//! Notification Domain
//!
//! This module provides a complete domain implementation for in-app
//! notifications: per-user message feeds with read tracking.
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
//! Notifications are created unread and listed newest first. Single
//! notifications flip their read flag via PATCH; a bulk endpoint marks
//! everything a user has unread as read and reports how many rows it
//! touched.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_notifications::{
//!     handlers,
//!     postgres::PgNotificationRepository,
//!     service::NotificationService,
//! };
//! use sea_orm::DatabaseConnection;
//!
//! # fn example(db: DatabaseConnection) {
//! // Create a repository and service
//! let repository = PgNotificationRepository::new(db);
//! let service = NotificationService::new(repository);
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
pub use error::{NotificationError, NotificationResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateNotification, MarkAllRead, MarkRead, MarkedRead, Notification, NotificationQuery,
};
pub use postgres::PgNotificationRepository;
pub use repository::NotificationRepository;
pub use service::NotificationService;

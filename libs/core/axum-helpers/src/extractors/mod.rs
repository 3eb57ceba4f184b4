//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that cut request-parsing boilerplate and route
//! every rejection through the standard error response shape.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;

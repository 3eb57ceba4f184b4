/// Unified error type for database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Generic(String),
}

impl DatabaseError {
    /// True when the underlying driver reported a foreign key violation.
    /// Domain repositories map these to 409/404 instead of 500.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::Postgres(db_err)
                if matches!(db_err.sql_err(), Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
        )
    }

    /// True when the underlying driver reported a unique constraint violation
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::Postgres(db_err)
                if matches!(db_err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
        )
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

//! Core error types for the Budgetbook application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::budget::BudgetError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Budget(#[from] BudgetError),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A check constraint was violated.
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true when the error means a referenced record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Database(DatabaseError::NotFound(_))
                | Error::Budget(BudgetError::AuthorNotFound(_))
        )
    }

    /// Returns true when the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Budget(BudgetError::InvalidMonth(_)))
    }
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Database(DatabaseError::Internal(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_budget_errors() {
        assert!(Error::from(BudgetError::AuthorNotFound(7)).is_not_found());
        assert!(!Error::from(BudgetError::AuthorNotFound(7)).is_client_error());
        assert!(Error::from(BudgetError::InvalidMonth(13)).is_client_error());
    }

    #[test]
    fn unknown_stored_type_is_not_a_client_error() {
        let err = Error::from(BudgetError::UnknownBudgetType("SAVINGS".into()));
        assert!(!err.is_client_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn classifies_database_errors() {
        let not_found = Error::Database(DatabaseError::NotFound("author".into()));
        assert!(not_found.is_not_found());

        let failed = Error::Database(DatabaseError::QueryFailed("disk I/O".into()));
        assert!(!failed.is_not_found());
        assert!(!failed.is_client_error());
    }
}

use thiserror::Error;

/// Errors raised by budget record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(i32),

    #[error("Author with id {0} not found")]
    AuthorNotFound(i32),

    #[error("Unknown budget type: {0}")]
    UnknownBudgetType(String),
}

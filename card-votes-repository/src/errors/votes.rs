//! Error types for the votes repository.
//! Defines specific errors that can occur during database operations on
//! individual vote records.
use thiserror::Error;

/// Represents errors that can occur within the votes repository.
///
/// This enum consolidates error conditions specific to vote persistence,
/// such as SQLx errors and malformed role columns read back from joins.
#[derive(Debug, Error)]
pub enum VotesRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid voter role: {0}")]
    InvalidRole(i16),
}

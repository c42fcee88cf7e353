//! Error types for the voters repository.
//! Defines specific errors that can occur during database operations on
//! voter identity projections.
use thiserror::Error;

/// Represents errors that can occur within the voters repository.
#[derive(Debug, Error)]
pub enum VotersRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid voter role: {0}")]
    InvalidRole(i16),
}

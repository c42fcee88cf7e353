//! Error types for the cards repository.
//! Defines specific errors that can occur during database operations on cards.
use thiserror::Error;

/// Represents errors that can occur within the cards repository.
#[derive(Debug, Error)]
pub enum CardsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

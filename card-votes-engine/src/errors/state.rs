//! Error types for the vote state module of the engine.
//! Defines the errors that can occur while deciding how a vote submission
//! changes the stored vote set.
use thiserror::Error;

/// Represents errors that can occur while applying a vote submission.
///
/// Invalid submissions are rejected before any mutation, so no partial state
/// change ever occurs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VoteStateError {
    #[error("Invalid vote value: {0}")]
    InvalidValue(f64),
}

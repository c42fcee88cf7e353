//! This module defines the `VoteStateManager`, responsible for deciding how
//! a single vote submission changes the stored vote set for one
//! `(card, user)` pair.
//!
//! The decision enforces the one-vote-per-user-per-card invariant and the
//! toggle-to-cancel rule; applying the decision against storage is the
//! caller's concern.
use crate::errors::VoteStateError;

/// Represents the storage operation a vote submission resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteDecision {
    /// No vote exists for the pair; create one with the submitted value.
    Create,
    /// A vote exists with a different value; overwrite it and refresh its
    /// timestamp.
    Update,
    /// A vote exists with the same value; delete it (toggle-to-cancel).
    Cancel,
}

/// `VoteStateManager` maps a vote submission onto a `VoteDecision`.
///
/// The manager is pure: it sees only the existing vote's value (if any) and
/// the submitted value, and holds no state between calls.
pub struct VoteStateManager;

impl VoteStateManager {
    /// Decides whether a submission creates, updates, or cancels the user's
    /// vote on a card.
    ///
    /// # Arguments
    ///
    /// * `existing` - The value of the user's current vote on the card, if
    ///   one exists.
    /// * `submitted` - The value being submitted.
    ///
    /// # Returns
    ///
    /// The `VoteDecision` to apply against the vote store.
    ///
    /// # Errors
    ///
    /// Returns `VoteStateError::InvalidValue` if the submitted value is not
    /// a finite number. The check runs before anything else, so an invalid
    /// submission never reaches storage.
    pub fn decide(existing: Option<f64>, submitted: f64) -> Result<VoteDecision, VoteStateError> {
        if !submitted.is_finite() {
            return Err(VoteStateError::InvalidValue(submitted));
        }

        match existing {
            None => Ok(VoteDecision::Create),
            Some(current) if current.to_bits() == submitted.to_bits() => Ok(VoteDecision::Cancel),
            Some(_) => Ok(VoteDecision::Update),
        }
    }
}

use crate::types::{CardId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents one active opinion by one user about one card's value.
///
/// At most one vote exists per `(card_id, user_id)` pair; this is enforced by
/// a uniqueness constraint in the store, not merely by convention.
/// `updated_at` reflects the most recent creation or modification, so
/// re-voting refreshes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vote {
    pub card_id: CardId,
    pub user_id: UserId,
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

/// Represents how a vote submission changed the stored vote set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteMutation {
    /// A new vote was created for the `(card, user)` pair.
    Created,
    /// The existing vote's value was overwritten.
    Updated,
    /// The existing vote was deleted because the same value was resubmitted.
    Cancelled,
}

/// Represents one entry of a user's voting history, joined with the card
/// name for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserVoteView {
    pub card_id: CardId,
    pub card_name: String,
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

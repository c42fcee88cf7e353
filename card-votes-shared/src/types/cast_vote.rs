use crate::types::{UserId, VoterRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a stored vote joined with its voter's role.
///
/// This is the read model the consensus aggregator consumes: the raw value,
/// the freshness timestamp, and the role that determines the vote's base
/// weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastVote {
    pub user_id: UserId,
    pub role: VoterRole,
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

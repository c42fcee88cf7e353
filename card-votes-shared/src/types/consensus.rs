use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single vote annotated with its computed weights.
///
/// Not persisted; recomputed on every aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightedVote {
    pub user_id: UserId,
    pub value: f64,
    pub updated_at: DateTime<Utc>,
    pub days_since_vote: i64,
    pub role_weight: f64,
    pub time_weight: f64,
    pub weighted_value: f64,
}

/// Represents one distinct raw vote value with its aggregated totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteBucket {
    /// The raw vote value shared by every vote in this bucket.
    pub value: f64,
    /// Sum of `weighted_value` over the bucket.
    pub weighted_sum: f64,
    /// Unweighted number of votes in the bucket, for display.
    pub raw_count: usize,
}

/// Represents the per-card output of a consensus computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsensusResult {
    /// Distinct vote values with weighted sums and raw counts, ascending by
    /// value.
    pub buckets: Vec<VoteBucket>,
    /// Per-vote weight detail, in input order.
    pub weighted: Vec<WeightedVote>,
    /// The greatest weighted sum across all buckets.
    pub max_weighted_sum: f64,
    /// Every value whose weighted sum equals the maximum exactly, ascending.
    pub most_voted_values: Vec<f64>,
    /// The single consensus value, or the `-1.0` sentinel when two or more
    /// values tie for the maximum.
    pub final_value: f64,
    /// Total number of votes that entered the computation.
    pub vote_count: usize,
    /// Number of votes that still carry a nonzero weight.
    pub weighted_vote_count: usize,
}

impl ConsensusResult {
    /// Returns the weighted sum recorded for a raw vote value, if any vote
    /// carried it.
    pub fn weighted_sum_for(&self, value: f64) -> Option<f64> {
        self.buckets
            .iter()
            .find(|bucket| bucket.value.to_bits() == value.to_bits())
            .map(|bucket| bucket.weighted_sum)
    }
}

//! This module defines the `ConsensusAggregator`, responsible for reducing a
//! card's current vote set to a single display value.
//!
//! Each vote is weighted by voter trust (role) and freshness (a piecewise
//! time decay), weights are summed per distinct raw value, and the value
//! with the greatest sum wins. Ties are flagged explicitly with the
//! `NO_CONSENSUS` sentinel rather than silently picking a value.
use card_votes_shared::types::{CastVote, ConsensusResult, VoteBucket, WeightedVote, NO_CONSENSUS};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Votes older than this many days are fully expired and contribute nothing.
const EXPIRY_DAYS: i64 = 365;

/// Minimum weight of any unexpired vote. Older opinions count for less, but
/// never vanish before expiry.
const TIME_WEIGHT_FLOOR: f64 = 0.1;

/// `ConsensusAggregator` computes a card's consensus value from its full
/// current vote set.
///
/// The aggregator is a bounded, synchronous fold over an already-fetched
/// vote list. It holds no state between invocations; serializing the
/// read-compute-write sequence per card belongs to the caller.
pub struct ConsensusAggregator;

impl ConsensusAggregator {
    /// Computes the weighted consensus over a card's votes.
    ///
    /// # Arguments
    ///
    /// * `votes` - The card's full current vote set, each joined with the
    ///   voter's role.
    /// * `now` - The instant to measure vote age against. Passed explicitly
    ///   so the computation stays deterministic and testable.
    ///
    /// # Returns
    ///
    /// `Some(ConsensusResult)` with the distribution and the selected
    /// `final_value`, or `None` for an empty vote set: no votes means no
    /// change, and the caller leaves the card's prior value untouched.
    pub fn compute(votes: &[CastVote], now: DateTime<Utc>) -> Option<ConsensusResult> {
        if votes.is_empty() {
            return None;
        }

        let weighted: Vec<WeightedVote> = votes.iter().map(|vote| Self::weigh(vote, now)).collect();

        let mut grouped: HashMap<u64, VoteBucket> = HashMap::new();
        for vote in &weighted {
            // Exact bit equality defines the group key; groups never merge
            // due to floating-point tolerance.
            let bucket = grouped
                .entry(vote.value.to_bits())
                .or_insert_with(|| VoteBucket {
                    value: vote.value,
                    weighted_sum: 0.0,
                    raw_count: 0,
                });
            bucket.weighted_sum += vote.weighted_value;
            bucket.raw_count += 1;
        }

        let mut buckets: Vec<VoteBucket> = grouped.into_values().collect();
        buckets.sort_by(|a, b| a.value.total_cmp(&b.value));

        let max_weighted_sum = buckets
            .iter()
            .map(|bucket| bucket.weighted_sum)
            .fold(f64::NEG_INFINITY, f64::max);

        // Ties are exact equality of summed weights. Role weights are small
        // integers and time weights share the same piecewise formula across
        // voters in the same window, so exact ties are expected.
        let most_voted_values: Vec<f64> = buckets
            .iter()
            .filter(|bucket| bucket.weighted_sum == max_weighted_sum)
            .map(|bucket| bucket.value)
            .collect();

        let final_value = if most_voted_values.len() == 1 {
            most_voted_values[0]
        } else {
            NO_CONSENSUS
        };

        let weighted_vote_count = weighted
            .iter()
            .filter(|vote| vote.weighted_value > 0.0)
            .count();

        Some(ConsensusResult {
            vote_count: votes.len(),
            weighted_vote_count,
            buckets,
            weighted,
            max_weighted_sum,
            most_voted_values,
            final_value,
        })
    }

    /// Annotates one vote with its role weight, time weight, and combined
    /// weighted value.
    fn weigh(vote: &CastVote, now: DateTime<Utc>) -> WeightedVote {
        let days_since_vote = days_since(vote.updated_at, now);
        let role_weight = vote.role.weight();
        let time_weight = time_weight(days_since_vote);

        WeightedVote {
            user_id: vote.user_id,
            value: vote.value,
            updated_at: vote.updated_at,
            days_since_vote,
            role_weight,
            time_weight,
            weighted_value: role_weight * time_weight,
        }
    }
}

/// Returns the whole days elapsed between a vote's last modification and
/// `now`, clamped at zero so clock skew never inflates a weight above 1.
pub fn days_since(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - updated_at).num_days().max(0)
}

/// Returns the freshness multiplier for a vote of the given age.
///
/// Piecewise-linear decay: 1.0 → 0.5 over the first week, 0.5 → 0.25 over
/// the second, 0.25 → ~0.1 through day 30, then a flat 0.1 floor until the
/// vote expires entirely after `EXPIRY_DAYS`.
pub fn time_weight(days_since_vote: i64) -> f64 {
    if days_since_vote > EXPIRY_DAYS {
        return 0.0;
    }

    let days = days_since_vote.max(0) as f64;
    let weight = if days <= 7.0 {
        1.0 - days / 14.0
    } else if days <= 14.0 {
        0.5 - (days - 7.0) / 28.0
    } else if days <= 30.0 {
        0.25 - (days - 14.0) / 160.0
    } else {
        TIME_WEIGHT_FLOOR
    };

    // The floor is never undercut by drift in the piecewise formulas.
    weight.max(TIME_WEIGHT_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_votes_shared::types::VoterRole;
    use chrono::Duration;
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_755_182_913, 0).unwrap()
    }

    fn make_vote(role: VoterRole, value: f64, days_ago: i64) -> CastVote {
        CastVote {
            user_id: Uuid::new_v4(),
            role,
            value,
            updated_at: fixed_now() - Duration::days(days_ago),
        }
    }

    #[test]
    fn test_time_weight_bounds_before_expiry() {
        for days in 0..=365 {
            let weight = time_weight(days);
            assert!(
                (0.1..=1.0).contains(&weight),
                "weight {weight} out of bounds at day {days}"
            );
        }
    }

    #[test]
    fn test_time_weight_zero_after_expiry() {
        assert_eq!(time_weight(366), 0.0);
        assert_eq!(time_weight(400), 0.0);
        assert_eq!(time_weight(10_000), 0.0);
    }

    #[test]
    fn test_time_weight_decay_segments() {
        assert_eq!(time_weight(0), 1.0);
        assert_eq!(time_weight(7), 0.5);
        assert_eq!(time_weight(14), 0.25);
        assert_eq!(time_weight(30), 0.25 - 16.0 / 160.0);
        assert_eq!(time_weight(31), TIME_WEIGHT_FLOOR);
        assert_eq!(time_weight(100), TIME_WEIGHT_FLOOR);
        assert_eq!(time_weight(365), TIME_WEIGHT_FLOOR);
        assert_eq!(time_weight(3), 1.0 - 3.0 / 14.0);
        assert_eq!(time_weight(10), 0.5 - 3.0 / 28.0);
        assert_eq!(time_weight(20), 0.25 - 6.0 / 160.0);
    }

    #[test]
    fn test_negative_age_clamps_to_day_zero() {
        assert_eq!(time_weight(-5), 1.0);
        let future_vote = make_vote(VoterRole::User, 0.5, -3);
        let result = ConsensusAggregator::compute(&[future_vote], fixed_now()).unwrap();
        assert_eq!(result.weighted[0].days_since_vote, 0);
        assert_eq!(result.weighted[0].time_weight, 1.0);
    }

    #[test]
    fn test_empty_vote_set_short_circuits() {
        assert_eq!(ConsensusAggregator::compute(&[], fixed_now()), None);
    }

    #[test]
    fn test_single_fresh_user_vote_wins_outright() {
        let votes = [make_vote(VoterRole::User, 0.75, 0)];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.final_value, 0.75);
        assert_eq!(result.most_voted_values, vec![0.75]);
        assert_eq!(result.weighted_sum_for(0.75), Some(1.0));
        assert_eq!(result.vote_count, 1);
        assert_eq!(result.weighted_vote_count, 1);
    }

    #[test]
    fn test_admin_vote_outweighs_user_vote() {
        // One admin at 0.5 and one user at 0.25, both fresh: 5.0 vs 1.0.
        let votes = [
            make_vote(VoterRole::Admin, 0.5, 0),
            make_vote(VoterRole::User, 0.25, 0),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.weighted_sum_for(0.5), Some(5.0));
        assert_eq!(result.weighted_sum_for(0.25), Some(1.0));
        assert_eq!(result.final_value, 0.5);
    }

    #[test]
    fn test_expired_vote_contributes_nothing() {
        // A fresh 0.25 against a 400-day-old 0.75: the expired vote stays in
        // the distribution with a zero sum but cannot win.
        let votes = [
            make_vote(VoterRole::User, 0.25, 0),
            make_vote(VoterRole::User, 0.75, 400),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.weighted_sum_for(0.25), Some(1.0));
        assert_eq!(result.weighted_sum_for(0.75), Some(0.0));
        assert_eq!(result.final_value, 0.25);
        assert_eq!(result.vote_count, 2);
        assert_eq!(result.weighted_vote_count, 1);
    }

    #[test]
    fn test_same_value_votes_accumulate_in_one_bucket() {
        let votes = [
            make_vote(VoterRole::User, 0.5, 0),
            make_vote(VoterRole::User, 0.5, 10),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.buckets.len(), 1);
        assert_eq!(result.buckets[0].raw_count, 2);
        assert_eq!(
            result.weighted_sum_for(0.5),
            Some(1.0 + time_weight(10))
        );
        assert_eq!(result.final_value, 0.5);
    }

    #[test]
    fn test_exact_tie_yields_sentinel() {
        let votes = [
            make_vote(VoterRole::User, 0.25, 0),
            make_vote(VoterRole::User, 0.75, 0),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.final_value, NO_CONSENSUS);
        assert_eq!(result.most_voted_values, vec![0.25, 0.75]);
        assert_eq!(result.max_weighted_sum, 1.0);
    }

    #[test]
    fn test_most_voted_values_sorted_ascending() {
        let votes = [
            make_vote(VoterRole::User, 1.0, 0),
            make_vote(VoterRole::User, 0.25, 0),
            make_vote(VoterRole::User, 0.5, 0),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.most_voted_values, vec![0.25, 0.5, 1.0]);
        assert_eq!(result.final_value, NO_CONSENSUS);
    }

    #[test]
    fn test_all_expired_distinct_values_tie_at_zero() {
        let votes = [
            make_vote(VoterRole::User, 0.25, 400),
            make_vote(VoterRole::Admin, 0.75, 500),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.max_weighted_sum, 0.0);
        assert_eq!(result.most_voted_values, vec![0.25, 0.75]);
        assert_eq!(result.final_value, NO_CONSENSUS);
        assert_eq!(result.weighted_vote_count, 0);
    }

    #[test]
    fn test_all_expired_single_value_wins_with_zero_sum() {
        let votes = [
            make_vote(VoterRole::User, 0.5, 400),
            make_vote(VoterRole::User, 0.5, 700),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.max_weighted_sum, 0.0);
        assert_eq!(result.final_value, 0.5);
    }

    #[test]
    fn test_custom_value_groups_separately() {
        let votes = [
            make_vote(VoterRole::User, 0.6, 0),
            make_vote(VoterRole::User, 0.6, 0),
            make_vote(VoterRole::User, 0.5, 0),
        ];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        assert_eq!(result.weighted_sum_for(0.6), Some(2.0));
        assert_eq!(result.final_value, 0.6);
    }

    #[test]
    fn test_weighted_detail_matches_inputs() {
        let votes = [make_vote(VoterRole::Admin, 0.25, 10)];
        let result = ConsensusAggregator::compute(&votes, fixed_now()).unwrap();

        let detail = &result.weighted[0];
        assert_eq!(detail.user_id, votes[0].user_id);
        assert_eq!(detail.days_since_vote, 10);
        assert_eq!(detail.role_weight, 5.0);
        assert_eq!(detail.time_weight, time_weight(10));
        assert_eq!(detail.weighted_value, 5.0 * time_weight(10));
    }
}

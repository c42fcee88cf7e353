//! This module defines the `VotingService`, responsible for coordinating a
//! vote submission end to end: read the existing vote, let the engine decide
//! the mutation, apply it, recompute the consensus over the post-mutation
//! vote set, and persist the result as the card's display value.
//!
//! The service performs no cross-call locking; the caller serializes
//! submissions per card so two near-simultaneous voters cannot overwrite
//! each other's resulting consensus with stale data.
use crate::errors::ServiceError;
use card_votes_engine::{ConsensusAggregator, VoteDecision, VoteStateManager};
use card_votes_repository::{CardRepository, VoteRepository, VoterRepository};
use card_votes_shared::types::{
    Card, CardId, CardSortField, CardStats, ConsensusResult, SortOrder, UserId, UserVoteView,
    Vote, VoteMutation, Voter, NO_CONSENSUS,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Represents the outcome of one vote submission.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome {
    /// How the submission changed the stored vote set.
    pub mutation: VoteMutation,
    /// The fresh consensus over the post-mutation vote set. `None` when the
    /// mutation left the card without any votes; the card keeps its prior
    /// display value in that case.
    pub consensus: Option<ConsensusResult>,
}

/// `VotingService` coordinates the engine and the repositories.
///
/// It holds `Arc`'d trait objects for the three stores, enabling substitution
/// in tests and alternative backends.
pub struct VotingService {
    cards: Arc<dyn CardRepository>,
    votes: Arc<dyn VoteRepository>,
    voters: Arc<dyn VoterRepository>,
}

impl VotingService {
    /// Creates a new `VotingService` instance.
    ///
    /// # Arguments
    ///
    /// * `cards` - The card store.
    /// * `votes` - The vote store.
    /// * `voters` - The voter identity projection store.
    pub fn new(
        cards: Arc<dyn CardRepository>,
        votes: Arc<dyn VoteRepository>,
        voters: Arc<dyn VoterRepository>,
    ) -> Self {
        Self {
            cards,
            votes,
            voters,
        }
    }

    /// Applies one vote submission and refreshes the card's consensus value.
    ///
    /// The caller passes a resolved, authorized identity; unauthenticated
    /// requests must be rejected before this point. The voter record is
    /// created on first contact, and the stored role (not the one supplied)
    /// determines the vote's weight.
    ///
    /// # Arguments
    ///
    /// * `card_id` - The card being voted on.
    /// * `voter` - The resolved identity of the requester.
    /// * `value` - The submitted vote value.
    ///
    /// # Returns
    ///
    /// The applied `VoteMutation` and the fresh `ConsensusResult`.
    ///
    /// # Errors
    ///
    /// `ServiceError::UnknownCard` if the card does not exist,
    /// `ServiceError::InvalidVote` if the value is not finite (rejected
    /// before any state change), or a repository error.
    pub async fn submit_vote(
        &self,
        card_id: CardId,
        voter: &Voter,
        value: f64,
    ) -> Result<VoteOutcome, ServiceError> {
        self.cards
            .get_card(card_id)
            .await?
            .ok_or(ServiceError::UnknownCard(card_id))?;

        let existing = self.votes.get_vote(card_id, voter.id).await?;
        let decision = VoteStateManager::decide(existing.map(|vote| vote.value), value)?;

        // First contact creates the voter record; an existing record keeps
        // its role.
        self.voters.upsert_voter(voter).await?;

        let now = Utc::now();
        let mutation = match decision {
            VoteDecision::Create | VoteDecision::Update => {
                self.votes
                    .upsert_vote(&Vote {
                        card_id,
                        user_id: voter.id,
                        value,
                        updated_at: now,
                    })
                    .await?;
                if decision == VoteDecision::Create {
                    VoteMutation::Created
                } else {
                    VoteMutation::Updated
                }
            }
            VoteDecision::Cancel => {
                self.votes.delete_vote(card_id, voter.id).await?;
                VoteMutation::Cancelled
            }
        };

        let cast_votes = self.votes.list_card_votes(card_id).await?;
        let consensus = ConsensusAggregator::compute(&cast_votes, now);

        match &consensus {
            Some(result) => {
                self.cards.set_card_value(card_id, result.final_value).await?;
                info!(
                    %card_id,
                    user_id = %voter.id,
                    ?mutation,
                    final_value = result.final_value,
                    vote_count = result.vote_count,
                    "vote applied"
                );
            }
            None => {
                // The last vote was cancelled; no votes means no change, so
                // the card keeps its prior display value.
                debug!(%card_id, user_id = %voter.id, "vote set emptied, card value unchanged");
            }
        }

        Ok(VoteOutcome { mutation, consensus })
    }

    /// Recomputes a card's consensus for display without mutating anything.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the card has no votes.
    pub async fn vote_breakdown(
        &self,
        card_id: CardId,
    ) -> Result<Option<ConsensusResult>, ServiceError> {
        self.cards
            .get_card(card_id)
            .await?
            .ok_or(ServiceError::UnknownCard(card_id))?;

        let cast_votes = self.votes.list_card_votes(card_id).await?;
        Ok(ConsensusAggregator::compute(&cast_votes, Utc::now()))
    }

    /// Creates a card, optionally seeded with an explicit display value.
    ///
    /// Cards created without a seed start at the unvalued sentinel.
    pub async fn create_card(
        &self,
        name: &str,
        seed_value: Option<f64>,
    ) -> Result<Card, ServiceError> {
        let now = Utc::now();
        let card = Card {
            id: Uuid::new_v4(),
            name: name.to_string(),
            value: seed_value.unwrap_or(NO_CONSENSUS),
            created_at: now,
            updated_at: now,
        };
        self.cards.insert_card(&card).await?;
        info!(card_id = %card.id, name, "card created");
        Ok(card)
    }

    /// Fetches a card by id.
    pub async fn get_card(&self, card_id: CardId) -> Result<Card, ServiceError> {
        self.cards
            .get_card(card_id)
            .await?
            .ok_or(ServiceError::UnknownCard(card_id))
    }

    /// Lists the card catalog in the requested order.
    pub async fn list_cards(
        &self,
        sort_by: CardSortField,
        order: SortOrder,
    ) -> Result<Vec<Card>, ServiceError> {
        Ok(self.cards.list_cards(sort_by, order).await?)
    }

    /// Overwrites a card's name and value through the administrative edit
    /// path. Any votes subsequently submitted will overwrite the value with
    /// the computed consensus.
    pub async fn update_card(
        &self,
        card_id: CardId,
        name: &str,
        value: f64,
    ) -> Result<(), ServiceError> {
        self.cards
            .get_card(card_id)
            .await?
            .ok_or(ServiceError::UnknownCard(card_id))?;
        self.cards.update_card(card_id, name, value).await?;
        Ok(())
    }

    /// Deletes a card; its votes are removed by the store's cascade.
    pub async fn delete_card(&self, card_id: CardId) -> Result<(), ServiceError> {
        self.cards
            .get_card(card_id)
            .await?
            .ok_or(ServiceError::UnknownCard(card_id))?;
        self.cards.delete_card(card_id).await?;
        info!(%card_id, "card deleted");
        Ok(())
    }

    /// Computes the tier distribution over the whole catalog.
    pub async fn card_stats(&self) -> Result<CardStats, ServiceError> {
        Ok(self.cards.card_stats().await?)
    }

    /// Fetches a user's voting history, newest first.
    pub async fn user_votes(
        &self,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<UserVoteView>, ServiceError> {
        Ok(self.votes.list_user_votes(user_id, limit).await?)
    }
}

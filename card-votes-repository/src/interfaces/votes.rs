//! This module defines the `VoteRepository` trait, which provides an
//! interface for interacting with the underlying data store for individual
//! vote records and their read models.
use crate::errors::VotesRepositoryError;
use card_votes_shared::types::{CardId, CastVote, UserId, UserVoteView, Vote};

/// A trait that defines the interface for interacting with the vote store.
///
/// Implementors enforce the one-vote-per-user-per-card uniqueness at the
/// storage level; the engine's state decisions are applied through
/// `upsert_vote` and `delete_vote`.
#[async_trait::async_trait]
pub trait VoteRepository: Send + Sync {
    /// Fetches a user's current vote on a card, if one exists.
    async fn get_vote(
        &self,
        card_id: CardId,
        user_id: UserId,
    ) -> Result<Option<Vote>, VotesRepositoryError>;

    /// Creates or overwrites the vote for the record's `(card, user)` pair.
    ///
    /// The store's uniqueness constraint guarantees at most one vote per
    /// pair survives the upsert.
    async fn upsert_vote(&self, vote: &Vote) -> Result<(), VotesRepositoryError>;

    /// Deletes a user's vote on a card. Deleting an absent vote is a no-op.
    async fn delete_vote(
        &self,
        card_id: CardId,
        user_id: UserId,
    ) -> Result<(), VotesRepositoryError>;

    /// Fetches a card's full current vote set joined with voter roles, the
    /// read model the consensus aggregator consumes.
    async fn list_card_votes(&self, card_id: CardId)
        -> Result<Vec<CastVote>, VotesRepositoryError>;

    /// Fetches a user's voting history joined with card names, newest
    /// first, capped at `limit` entries.
    async fn list_user_votes(
        &self,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<UserVoteView>, VotesRepositoryError>;
}

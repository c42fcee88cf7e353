//! This module defines the `VoterRepository` trait, the narrow seam to the
//! locally stored projection of external identities.
use crate::errors::VotersRepositoryError;
use card_votes_shared::types::{UserId, Voter};

/// A trait that defines the interface for interacting with the voter store.
///
/// Voter records are created lazily on first contact; authentication itself
/// lives entirely outside this system.
#[async_trait::async_trait]
pub trait VoterRepository: Send + Sync {
    /// Creates the voter record if it does not exist yet.
    ///
    /// Idempotent: an existing record keeps its name and role untouched, so
    /// repeated first-contact upserts never downgrade an admin.
    async fn upsert_voter(&self, voter: &Voter) -> Result<(), VotersRepositoryError>;

    /// Fetches a voter by id.
    async fn get_voter(&self, user_id: UserId) -> Result<Option<Voter>, VotersRepositoryError>;
}

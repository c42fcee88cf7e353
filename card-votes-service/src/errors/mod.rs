//! Error types for the card votes service.
//! Defines a comprehensive set of errors that can occur while serving vote
//! submissions and card operations, consolidating errors from the engine and
//! the repositories.
use card_votes_shared::types::CardId;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Card not found: {0}")]
    UnknownCard(CardId),
    #[error("Invalid vote: {0}")]
    InvalidVote(#[from] card_votes_engine::VoteStateError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Cards repository error: {0}")]
    CardsRepository(#[from] card_votes_repository::CardsRepositoryError),
    #[error("Votes repository error: {0}")]
    VotesRepository(#[from] card_votes_repository::VotesRepositoryError),
    #[error("Voters repository error: {0}")]
    VotersRepository(#[from] card_votes_repository::VotersRepositoryError),
}

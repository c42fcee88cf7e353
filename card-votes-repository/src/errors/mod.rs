//! Error types for the card votes repository.
//! Consolidates and re-exports error types related to repository operations.
mod cards;
mod voters;
mod votes;

pub use cards::CardsRepositoryError;
pub use voters::VotersRepositoryError;
pub use votes::VotesRepositoryError;

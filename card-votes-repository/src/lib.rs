//! # Card Votes Repository
//! This crate provides traits and implementations for interacting with the
//! card voting data stores. It includes definitions for errors, interfaces,
//! and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{CardsRepositoryError, VotersRepositoryError, VotesRepositoryError};
pub use interfaces::{CardRepository, VoteRepository, VoterRepository};
pub use postgres::{PostgresCardRepository, PostgresVoteRepository, PostgresVoterRepository};

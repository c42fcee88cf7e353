//! PostgreSQL implementations of the card voting repositories.
mod card_repository;
mod vote_repository;
mod voter_repository;

pub use card_repository::PostgresCardRepository;
pub use vote_repository::PostgresVoteRepository;
pub use voter_repository::PostgresVoterRepository;

use card_votes_shared::types::VoterRole;

/// Encodes a voter role into its `smallint` column representation.
pub(crate) fn role_to_i16(role: VoterRole) -> i16 {
    match role {
        VoterRole::User => 0,
        VoterRole::Admin => 1,
    }
}

/// Decodes a `smallint` role column; unknown discriminants are rejected by
/// the caller.
pub(crate) fn role_from_i16(raw: i16) -> Option<VoterRole> {
    match raw {
        0 => Some(VoterRole::User),
        1 => Some(VoterRole::Admin),
        _ => None,
    }
}

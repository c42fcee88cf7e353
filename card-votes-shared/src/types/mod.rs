mod card;
mod cast_vote;
mod consensus;
mod tier;
mod vote;
mod voter;

pub use card::{Card, CardSortField, CardStats, SortOrder, NO_CONSENSUS};
pub use cast_vote::CastVote;
pub use consensus::{ConsensusResult, VoteBucket, WeightedVote};
pub use tier::{tier_label, HIGH, LOW, MID, ONE_MM_PLUS};
pub use vote::{UserVoteView, Vote, VoteMutation};
pub use voter::{Voter, VoterRole};

/// Identifier of a card being voted on.
pub type CardId = uuid::Uuid;

/// Identifier of a voting user.
pub type UserId = uuid::Uuid;

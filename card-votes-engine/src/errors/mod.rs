mod state;

pub use state::VoteStateError;

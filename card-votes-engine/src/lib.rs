//! # Card Votes Engine
//!
//! The pure decision core of the card voting system. It turns a bag of
//! per-user votes into a per-user vote state with toggle/cancel semantics
//! (`state`) and a single deterministic consensus value per card
//! (`consensus`).
//!
//! The engine is stateless and synchronous: it knows nothing about HTTP,
//! sessions, or storage, and the current time is always an explicit
//! parameter so every computation is reproducible.
pub mod consensus;
pub mod errors;
pub mod state;

pub use consensus::ConsensusAggregator;
pub use errors::VoteStateError;
pub use state::{VoteDecision, VoteStateManager};

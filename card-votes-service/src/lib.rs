//! Card Votes Service
//!
//! This crate wires the pure voting engine to the repositories: it applies
//! vote submissions, recomputes the weighted consensus over the post-mutation
//! vote set, and persists the result as the card's display value. It also
//! exposes the CRUD and reporting glue (card catalog, tier statistics,
//! voting history) the surrounding application calls into.
pub mod config;
pub mod errors;
pub mod service;

pub use config::{init_tracing, Dependencies};
pub use errors::ServiceError;
pub use service::{VoteOutcome, VotingService};

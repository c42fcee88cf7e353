//! This module defines and re-exports the interfaces for the card voting
//! repositories. It serves as a central point for accessing traits related
//! to data interaction.
mod cards;
mod voters;
mod votes;

pub use cards::CardRepository;
pub use voters::VoterRepository;
pub use votes::VoteRepository;

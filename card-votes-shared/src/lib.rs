//! # Card Votes Shared
//! This crate defines shared data structures and types used across the card
//! voting ecosystem. It includes common definitions for cards, voters, votes,
//! weighted votes, and consensus results.
pub mod types;

//! Matching logic module
//!
//! Implements price-time priority matching primitives

pub mod crossing;
pub mod executor;

pub use crossing::{can_match, incoming_can_match};
pub use executor::MatchExecutor;

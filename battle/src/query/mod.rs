//! Query helpers over the effectiveness table
//!
//! Useful for picking a type to send against a known opponent.

mod matchup;

pub use matchup::{counter_of, is_weak_to_any, resists_all, strong_against, weak_to};

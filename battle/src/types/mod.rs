//! Domain types for matchups

mod element;
mod outcome;

pub use element::{EFFECTIVENESS_TABLE, ElementalType, TypeNameMatching, VALID_TYPE_NAMES};
pub use outcome::{MatchResult, Winner};

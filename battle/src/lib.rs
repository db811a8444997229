//! Elemental type matchups for Pokemon duels.
//!
//! Three types (Fire, Water, Grass) form a rock-paper-scissors cycle: Fire beats
//! Grass, Grass beats Water, Water beats Fire. A matchup resolves two type names,
//! looks the pair up in [`EFFECTIVENESS_TABLE`] and reports the winner.
//!
//! # Overview
//!
//! ```text
//! pokeduel-battle (types + evaluation) ← THIS CRATE
//!        │
//!        ▼
//! pokeduel-protocol (JSON call boundary)
//!        │
//!        ▼
//! pokeduel-server (line-delimited JSON over TCP)
//! ```
//!
//! # Main Types
//!
//! - [`ElementalType`] - the three types, with the effectiveness table
//! - [`TypeNameMatching`] - how strictly type names are recognized
//! - [`MatchResult`] / [`Winner`] - matchup outcome
//! - [`MatchError`] - invalid arguments or unrecognized type names
//! - [`Combatant`] / [`BattleReport`] - duels between named Pokemon
//!
//! # Example Usage
//!
//! ```
//! use pokeduel_battle::{evaluate_match, Winner};
//!
//! let result = evaluate_match("Fire", "Grass").unwrap();
//! assert_eq!(result.winner, Winner::First);
//! assert!(result.message.contains("super effective"));
//!
//! assert!(evaluate_match("Electric", "Fire").is_err());
//! ```

pub mod duel;
pub mod error;
pub mod evaluate;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use duel::{BattleReport, Combatant, CombatantSummary, battle_combatants};
pub use error::{MatchError, UnrecognizedInput};
pub use evaluate::{evaluate_match, evaluate_match_with, evaluate_types, resolve_pair};
pub use types::{
    EFFECTIVENESS_TABLE, ElementalType, MatchResult, TypeNameMatching, VALID_TYPE_NAMES, Winner,
};

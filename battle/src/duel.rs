//! Battles between two named Pokemon
//!
//! A [`Combatant`] is a stored Pokemon whose type may be missing. The duel
//! resolves each combatant's type name and evaluates the matchup, keeping the
//! combatants' identities in the report.

use crate::error::MatchError;
use crate::evaluate::evaluate_match_with;
use crate::types::{MatchResult, TypeNameMatching};

/// Type name assumed for a combatant with no stored type
pub const DEFAULT_TYPE_NAME: &str = "Normal";

/// A Pokemon entering a duel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: u64,
    pub name: String,
    /// Raw type name as stored; `None` falls back to [`DEFAULT_TYPE_NAME`]
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub type_name: Option<String>,
}

impl Combatant {
    pub fn new(id: u64, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_name: Some(type_name.into()),
        }
    }

    /// Create a combatant with no stored type
    pub fn untyped(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_name: None,
        }
    }

    /// Type name used for the matchup
    pub fn effective_type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or(DEFAULT_TYPE_NAME)
    }

    fn summary(&self) -> CombatantSummary {
        CombatantSummary {
            id: self.id,
            name: self.name.clone(),
            type_name: self.effective_type_name().to_string(),
        }
    }
}

/// A combatant as reported back after the duel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSummary {
    pub id: u64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_name: String,
}

/// Outcome of a duel between two combatants
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub pokemon1: CombatantSummary,
    pub pokemon2: CombatantSummary,
    pub result: MatchResult,
}

/// Battle two combatants by type
pub fn battle_combatants(
    matching: TypeNameMatching,
    first: &Combatant,
    second: &Combatant,
) -> Result<BattleReport, MatchError> {
    let result = evaluate_match_with(
        matching,
        first.effective_type_name(),
        second.effective_type_name(),
    )?;

    Ok(BattleReport {
        pokemon1: first.summary(),
        pokemon2: second.summary(),
        result,
    })
}

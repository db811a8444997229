//! Type matchup helpers

use crate::types::ElementalType;

/// Check if defender loses to any of the attacking types
pub fn is_weak_to_any(defender: ElementalType, attacking_types: &[ElementalType]) -> bool {
    attacking_types.iter().any(|t| t.beats(defender))
}

/// Check if defender beats all of the attacking types
pub fn resists_all(defender: ElementalType, attacking_types: &[ElementalType]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types.iter().all(|t| defender.beats(*t))
}

/// Get all types that `attacker` beats
pub fn strong_against(attacker: ElementalType) -> Vec<ElementalType> {
    ElementalType::all()
        .iter()
        .copied()
        .filter(|t| attacker.beats(*t))
        .collect()
}

/// Get all types that beat `defender`
pub fn weak_to(defender: ElementalType) -> Vec<ElementalType> {
    ElementalType::all()
        .iter()
        .copied()
        .filter(|t| t.beats(defender))
        .collect()
}

/// The type that beats `defender`
///
/// The table is a 3-cycle, so exactly one such type exists.
pub fn counter_of(defender: ElementalType) -> ElementalType {
    match defender {
        ElementalType::Fire => ElementalType::Water,
        ElementalType::Water => ElementalType::Grass,
        ElementalType::Grass => ElementalType::Fire,
    }
}

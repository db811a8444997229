//! Single matchup evaluation
//!
//! Resolution of raw names happens here, before any table lookup. Nothing in
//! this module logs or touches shared mutable state, so every function is safe
//! to call from any number of threads.

use crate::error::{MatchError, UnrecognizedInput};
use crate::types::{ElementalType, MatchResult, TypeNameMatching, Winner};

const DRAW_MESSAGE: &str = "It's a draw! Both Pokemon are of the same type or equally matched.";

/// Evaluate a matchup between two type names using the legacy spellings
///
/// Accepts "fire"/"Fire", "water"/"Water" and "grass"/"Grass". Any other
/// input on either side fails with [`MatchError::UnrecognizedType`].
pub fn evaluate_match(first: &str, second: &str) -> Result<MatchResult, MatchError> {
    evaluate_match_with(TypeNameMatching::Legacy, first, second)
}

/// Evaluate a matchup between two type names under the given matching policy
pub fn evaluate_match_with(
    matching: TypeNameMatching,
    first: &str,
    second: &str,
) -> Result<MatchResult, MatchError> {
    let (first_type, second_type) = resolve_pair(matching, first, second)?;
    Ok(evaluate_types(first_type, second_type))
}

/// Resolve both names, reporting every side that failed
pub fn resolve_pair(
    matching: TypeNameMatching,
    first: &str,
    second: &str,
) -> Result<(ElementalType, ElementalType), MatchError> {
    let resolved = (
        ElementalType::from_name_with(matching, first),
        ElementalType::from_name_with(matching, second),
    );

    match resolved {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, Some(_)) => Err(MatchError::UnrecognizedType(UnrecognizedInput::First(
            first.to_string(),
        ))),
        (Some(_), None) => Err(MatchError::UnrecognizedType(UnrecognizedInput::Second(
            second.to_string(),
        ))),
        (None, None) => Err(MatchError::UnrecognizedType(UnrecognizedInput::Both(
            first.to_string(),
            second.to_string(),
        ))),
    }
}

/// Evaluate a matchup between two already-resolved types
pub fn evaluate_types(first: ElementalType, second: ElementalType) -> MatchResult {
    let winner = Winner::from_score(first.effectiveness(second));
    let message = match winner {
        Winner::First => format!(
            "Pokemon 1 wins! {} is super effective against {}!",
            first, second
        ),
        Winner::Second => format!(
            "Pokemon 2 wins! {} is super effective against {}!",
            second, first
        ),
        Winner::Draw => DRAW_MESSAGE.to_string(),
    };

    MatchResult { winner, message }
}

use pokeduel_battle::{Combatant, MatchError};
use serde::Deserialize;
use serde_json::Value;

use crate::ParseError;

/// A parsed call
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// `{"method":"battle","params":["Fire","Grass"]}`
    ///
    /// Arguments stay dynamically typed until [`battle_args`] checks them.
    Battle { args: Vec<Value> },

    /// `{"method":"battle_pokemon","params":{"pokemon1":{..},"pokemon2":{..}}}`
    BattlePokemon {
        pokemon1: Combatant,
        pokemon2: Combatant,
    },
}

#[derive(Deserialize)]
struct RawRequest {
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Deserialize)]
struct BattlePokemonParams {
    pokemon1: Combatant,
    pokemon2: Combatant,
}

/// Parse one request line
pub fn parse_request(line: &str) -> Result<Request, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let raw: RawRequest =
        serde_json::from_str(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    match raw.method.as_str() {
        "battle" => {
            let args = match raw.params {
                Value::Array(args) => args,
                Value::Null => Vec::new(),
                _ => {
                    return Err(ParseError::InvalidFormat(
                        "battle params must be an array".into(),
                    ));
                }
            };
            Ok(Request::Battle { args })
        }
        "battle_pokemon" => {
            let params: BattlePokemonParams = serde_json::from_value(raw.params)
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
            Ok(Request::BattlePokemon {
                pokemon1: params.pokemon1,
                pokemon2: params.pokemon2,
            })
        }
        other => Err(ParseError::UnknownMethod(other.to_string())),
    }
}

/// Check the first two call arguments are strings
///
/// Arguments past the second are ignored.
pub fn battle_args(args: &[Value]) -> Result<(&str, &str), MatchError> {
    match args {
        [Value::String(first), Value::String(second), ..] => {
            Ok((first.as_str(), second.as_str()))
        }
        [first, second, ..] => Err(MatchError::InvalidArgument(format!(
            "got {} and {}",
            json_kind(first),
            json_kind(second)
        ))),
        _ => Err(MatchError::InvalidArgument(format!(
            "got {} argument(s)",
            args.len()
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

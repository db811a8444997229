use pokeduel_battle::{BattleReport, MatchError, MatchResult};
use serde::{Deserialize, Serialize};

use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// `{"error":{"kind":"UnrecognizedType","message":"..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl From<&MatchError> for ErrorResponse {
    fn from(err: &MatchError) -> Self {
        Self {
            error: ErrorBody {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl From<&ParseError> for ErrorResponse {
    fn from(err: &ParseError) -> Self {
        Self {
            error: ErrorBody {
                kind: ParseError::KIND.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Any response line
///
/// Successful matchups serialize as `{"winner":1,"message":"..."}`, duels as
/// `{"pokemon1":{..},"pokemon2":{..},"result":{..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Error(ErrorResponse),
    Report(BattleReport),
    Match(MatchResult),
}

impl Response {
    pub fn to_wire_format(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

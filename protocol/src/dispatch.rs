use pokeduel_battle::{MatchError, TypeNameMatching, battle_combatants, evaluate_match_with};

use crate::ParseError;
use crate::request::{Request, battle_args, parse_request};
use crate::response::{ErrorResponse, Response};

const INTERNAL_ERROR_LINE: &str =
    r#"{"error":{"kind":"Internal","message":"Failed to encode response"}}"#;

/// Run a parsed request against the matchup rules
pub fn dispatch(request: &Request, matching: TypeNameMatching) -> Result<Response, MatchError> {
    match request {
        Request::Battle { args } => {
            let (first, second) = battle_args(args)?;
            let result = evaluate_match_with(matching, first, second)?;
            Ok(Response::Match(result))
        }
        Request::BattlePokemon { pokemon1, pokemon2 } => {
            let report = battle_combatants(matching, pokemon1, pokemon2)?;
            Ok(Response::Report(report))
        }
    }
}

/// Handle one request line and produce one response line
pub fn handle_line(line: &str, matching: TypeNameMatching) -> String {
    let response = match parse_request(line) {
        Ok(request) => dispatch(&request, matching).unwrap_or_else(|e| {
            tracing::debug!(kind = e.kind(), error = %e, "Battle request rejected");
            Response::Error(ErrorResponse::from(&e))
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse request");
            Response::Error(ErrorResponse::from(&e))
        }
    };

    encode(&response)
}

/// Response line for a request rejected before it could be parsed
pub fn error_line(err: &ParseError) -> String {
    encode(&Response::Error(ErrorResponse::from(err)))
}

fn encode(response: &Response) -> String {
    response.to_wire_format().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to encode response");
        INTERNAL_ERROR_LINE.to_string()
    })
}

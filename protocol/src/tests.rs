use pokeduel_battle::{Combatant, MatchError, MatchResult, TypeNameMatching, Winner};
use serde_json::{Value, json};

use crate::{
    ErrorBody, ErrorResponse, ParseError, Request, Response, battle_args, error_line,
    handle_line, parse_request,
};

fn respond(line: &str) -> Response {
    serde_json::from_str(&handle_line(line, TypeNameMatching::Legacy)).unwrap()
}

fn error_kind(response: &Response) -> &str {
    match response {
        Response::Error(ErrorResponse {
            error: ErrorBody { kind, .. },
        }) => kind.as_str(),
        other => panic!("expected error, got {:?}", other),
    }
}

#[test]
fn test_parse_battle() {
    let request = parse_request(r#"{"method":"battle","params":["Fire","Grass"]}"#).unwrap();
    assert_eq!(
        request,
        Request::Battle {
            args: vec![json!("Fire"), json!("Grass")]
        }
    );
}

#[test]
fn test_parse_battle_without_params() {
    let request = parse_request(r#"{"method":"battle"}"#).unwrap();
    assert_eq!(request, Request::Battle { args: vec![] });
}

#[test]
fn test_parse_battle_pokemon() {
    let line = r#"{"method":"battle_pokemon","params":{
        "pokemon1":{"id":6,"name":"Charizard","type":"Fire"},
        "pokemon2":{"id":7,"name":"Squirtle"}}}"#;
    let request = parse_request(line).unwrap();
    assert_eq!(
        request,
        Request::BattlePokemon {
            pokemon1: Combatant::new(6, "Charizard", "Fire"),
            pokemon2: Combatant::untyped(7, "Squirtle"),
        }
    );
}

#[test]
fn test_parse_empty() {
    assert!(matches!(parse_request("   "), Err(ParseError::EmptyRequest)));
}

#[test]
fn test_parse_unknown_method() {
    let result = parse_request(r#"{"method":"heal","params":[]}"#);
    assert!(matches!(result, Err(ParseError::UnknownMethod(m)) if m == "heal"));
}

#[test]
fn test_parse_invalid_json() {
    assert!(matches!(
        parse_request("battle Fire Grass"),
        Err(ParseError::InvalidFormat(_))
    ));
    assert!(matches!(
        parse_request(r#"{"method":"battle","params":"Fire"}"#),
        Err(ParseError::InvalidFormat(_))
    ));
}

#[test]
fn test_battle_args() {
    let args = vec![json!("Fire"), json!("Grass"), json!(42)];
    assert_eq!(battle_args(&args).unwrap(), ("Fire", "Grass"));

    let err = battle_args(&[json!("Fire")]).unwrap_err();
    assert_eq!(err, MatchError::InvalidArgument("got 1 argument(s)".into()));

    let err = battle_args(&[json!(1), json!("Fire")]).unwrap_err();
    assert_eq!(err, MatchError::InvalidArgument("got number and string".into()));

    assert!(battle_args(&[json!("Fire"), Value::Null]).is_err());
}

#[test]
fn test_handle_battle_success() {
    let response = respond(r#"{"method":"battle","params":["Fire","Grass"]}"#);
    assert_eq!(
        response,
        Response::Match(MatchResult {
            winner: Winner::First,
            message: "Pokemon 1 wins! Fire is super effective against Grass!".into(),
        })
    );
}

#[test]
fn test_handle_battle_draw() {
    match respond(r#"{"method":"battle","params":["grass","Grass"]}"#) {
        Response::Match(m) => {
            assert_eq!(m.winner, Winner::Draw);
            assert!(m.message.starts_with("It's a draw!"));
        }
        other => panic!("expected match, got {:?}", other),
    }
}

#[test]
fn test_handle_battle_wire_shape() {
    let line = handle_line(
        r#"{"method":"battle","params":["Grass","Fire"]}"#,
        TypeNameMatching::Legacy,
    );
    let value: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["winner"], json!(2));
    assert!(value.get("error").is_none());
}

#[test]
fn test_handle_unrecognized_type() {
    let response = respond(r#"{"method":"battle","params":["Electric","Fire"]}"#);
    assert_eq!(error_kind(&response), "UnrecognizedType");

    let line = handle_line(
        r#"{"method":"battle","params":["Electric","Fire"]}"#,
        TypeNameMatching::Legacy,
    );
    assert!(line.contains("Fire, Water, Grass"));
    assert!(!line.contains("winner"));
}

#[test]
fn test_handle_invalid_argument() {
    let response = respond(r#"{"method":"battle","params":["Fire"]}"#);
    assert_eq!(error_kind(&response), "InvalidArgument");

    let response = respond(r#"{"method":"battle","params":[true,"Fire"]}"#);
    assert_eq!(error_kind(&response), "InvalidArgument");
}

#[test]
fn test_handle_invalid_request() {
    let response = respond("not json");
    assert_eq!(error_kind(&response), "InvalidRequest");
}

#[test]
fn test_handle_case_insensitive() {
    let line = r#"{"method":"battle","params":["WATER","FIRE"]}"#;
    assert!(respond(line).is_error());

    let response: Response =
        serde_json::from_str(&handle_line(line, TypeNameMatching::CaseInsensitive)).unwrap();
    assert!(matches!(
        response,
        Response::Match(MatchResult {
            winner: Winner::First,
            ..
        })
    ));
}

#[test]
fn test_handle_battle_pokemon() {
    let line = r#"{"method":"battle_pokemon","params":{
        "pokemon1":{"id":1,"name":"Bulbasaur","type":"Grass"},
        "pokemon2":{"id":7,"name":"Squirtle","type":"Water"}}}"#;

    let value: Value =
        serde_json::from_str(&handle_line(line, TypeNameMatching::Legacy)).unwrap();
    assert_eq!(value["pokemon1"]["name"], json!("Bulbasaur"));
    assert_eq!(value["pokemon2"]["type"], json!("Water"));
    assert_eq!(value["result"]["winner"], json!(1));
}

#[test]
fn test_handle_battle_pokemon_untyped() {
    let line = r#"{"method":"battle_pokemon","params":{
        "pokemon1":{"id":1,"name":"Bulbasaur","type":"Grass"},
        "pokemon2":{"id":132,"name":"Ditto"}}}"#;

    let response = respond(line);
    assert_eq!(error_kind(&response), "UnrecognizedType");
}

#[test]
fn test_error_line_for_unreadable_requests() {
    let response: Response = serde_json::from_str(&error_line(&ParseError::NotUtf8)).unwrap();
    assert_eq!(error_kind(&response), "InvalidRequest");

    let line = error_line(&ParseError::TooLong(1024));
    assert!(line.contains("exceeds 1024 bytes"));
}

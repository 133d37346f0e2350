//! Unit tests for history-endpoint response parsing.

use rstest::rstest;
use travily::services::history_api::parse_history_body;
use travily::types::errors::FetchError;

#[test]
fn test_parses_history_array() {
    let body = r#"{"history":["Paris, France","Tokyo, Japan"]}"#;
    let history = parse_history_body(body).unwrap();
    assert_eq!(history, vec!["Paris, France", "Tokyo, Japan"]);
}

#[test]
fn test_missing_history_field_defaults_to_empty() {
    let history = parse_history_body("{}").unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_extra_fields_are_ignored() {
    let body = r#"{"history":["Lima, Peru"],"count":1}"#;
    let history = parse_history_body(body).unwrap();
    assert_eq!(history, vec!["Lima, Peru"]);
}

#[rstest]
#[case("not-json")]
#[case("")]
#[case(r#"{"history":"Paris"}"#)]
#[case(r#"{"history":[1,2,3]}"#)]
#[case(r#"["Paris"]"#)]
fn test_malformed_bodies_are_rejected(#[case] body: &str) {
    match parse_history_body(body) {
        Err(FetchError::MalformedBody(_)) => {}
        other => panic!("expected MalformedBody error, got {:?}", other),
    }
}

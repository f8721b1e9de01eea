//! Tests for loading rule pairs from JSON.

use dst_rule::config::to_json;
use dst_rule::presets::{US_EASTERN, US_PACIFIC};
use dst_rule::{load_rule_pair, load_rule_pair_from_reader, DstError};

const EASTERN_JSON: &str = r#"{
    "start": {"month": 3, "day_of_week": 1, "ordinal": 2, "hour": 2, "offset_minutes": -240, "abbrev": "EDT"},
    "end": {"month": 11, "day_of_week": 1, "ordinal": 1, "hour": 2, "offset_minutes": -300, "abbrev": "EST"}
}"#;

fn assert_config_error(json: &str, needle: &str) {
    match load_rule_pair(json) {
        Err(DstError::Config(message)) => {
            assert!(
                message.contains(needle),
                "expected {:?} in error message {:?}",
                needle,
                message
            );
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loads_eastern_document() {
    let pair = load_rule_pair(EASTERN_JSON).expect("document should load");
    assert_eq!(pair, US_EASTERN);
}

#[test]
fn loads_from_reader() {
    let pair = load_rule_pair_from_reader(EASTERN_JSON.as_bytes()).unwrap();
    assert_eq!(pair, US_EASTERN);
}

#[test]
fn serialized_preset_loads_back_equal() {
    let json = to_json(&US_PACIFIC).unwrap();
    assert!(json.contains("\"abbrev\": \"PDT\""), "{}", json);
    assert_eq!(load_rule_pair(&json).unwrap(), US_PACIFIC);
}

#[test]
fn field_order_follows_rule_layout() {
    let json = serde_json::to_string(US_EASTERN.start()).unwrap();
    assert_eq!(
        json,
        r#"{"month":3,"day_of_week":1,"ordinal":2,"hour":2,"offset_minutes":-240,"abbrev":"EDT"}"#
    );
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_month_is_rejected() {
    let json = EASTERN_JSON.replace("\"month\": 11", "\"month\": 13");
    assert_config_error(&json, "Invalid month: 13");
}

#[test]
fn last_occurrence_ordinal_is_rejected() {
    let json = EASTERN_JSON.replace("\"ordinal\": 2", "\"ordinal\": 5");
    assert_config_error(&json, "Invalid ordinal: 5");
}

#[test]
fn empty_abbreviation_is_rejected() {
    let json = EASTERN_JSON.replace("\"EST\"", "\"\"");
    assert_config_error(&json, "Invalid abbreviation");
}

#[test]
fn missing_field_is_rejected() {
    let json = EASTERN_JSON.replace("\"hour\": 2, ", "");
    assert_config_error(&json, "hour");
}

#[test]
fn unknown_field_is_rejected() {
    let json = EASTERN_JSON.replace("\"hour\": 2,", "\"hour\": 2, \"minute\": 30,");
    assert_config_error(&json, "minute");
}

#[test]
fn missing_end_rule_is_rejected() {
    let json = r#"{"start": {"month": 3, "day_of_week": 1, "ordinal": 2, "hour": 2, "offset_minutes": -240, "abbrev": "EDT"}}"#;
    assert_config_error(json, "end");
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        load_rule_pair("{not json"),
        Err(DstError::Config(_))
    ));
    assert!(matches!(
        load_rule_pair_from_reader(&b""[..]),
        Err(DstError::Config(_))
    ));
}

use std::fs;
use std::path::PathBuf;

use first_pitch::pbp_fetch::{first_pitch, parse_pbp_json};
use first_pitch::schedule_fetch::parse_schedule_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_schedule_fixture() {
    let raw = read_fixture("schedule.json");
    let games = parse_schedule_json(&raw).expect("fixture should parse");
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, "f3c6d211-1a11-4f8c-9c41-0f1e2a3b4c5d");
    assert_eq!(games[0].home, "Yankees");
    assert_eq!(games[0].away, "Tigers");
    assert_eq!(games[0].venue, "Yankee Stadium");
    assert_eq!(games[0].game_date(), "2024-05-04");
    assert_eq!(games[0].matchup(), "Tigers vs Yankees");
}

#[test]
fn parses_pbp_fixture() {
    let raw = read_fixture("pbp.json");
    let innings = parse_pbp_json(&raw).expect("fixture should parse");
    assert_eq!(innings.len(), 3);
    assert_eq!(innings[1].number, Some(1));
    assert_eq!(innings[1].halfs.len(), 2);
}

#[test]
fn first_pitch_from_fixture_is_the_earliest_inning_one_pitch() {
    let raw = read_fixture("pbp.json");
    let innings = parse_pbp_json(&raw).expect("fixture should parse");
    let pitch = first_pitch(&innings).expect("fixture has a first pitch");

    let coords = pitch
        .mlb_pitch_data
        .as_ref()
        .and_then(|d| d.coordinates.as_ref())
        .expect("pitch has coordinates");
    assert_eq!(coords.x, Some(120.5));
    assert_eq!(coords.y, Some(150.0));
    let pitcher = pitch.pitcher.as_ref().expect("pitch has a pitcher");
    assert_eq!(pitcher.full_name.as_deref(), Some("Gerrit Cole"));
    assert_eq!(pitcher.pitch_type.as_deref(), Some("FA"));
}

#[test]
fn schedule_null_is_empty() {
    assert!(parse_schedule_json("null").expect("null should parse").is_empty());
    assert!(parse_schedule_json("  ").expect("blank should parse").is_empty());
}

#[test]
fn schedule_without_games_key_is_empty() {
    let games = parse_schedule_json(r#"{"date":"2024-05-04"}"#).expect("should parse");
    assert!(games.is_empty());
}

#[test]
fn pbp_null_is_empty() {
    assert!(parse_pbp_json("null").expect("null should parse").is_empty());
    assert!(parse_pbp_json(r#"{"game":null}"#).expect("should parse").is_empty());
    assert!(parse_pbp_json(r#"{"game":{}}"#).expect("should parse").is_empty());
}

#[test]
fn schedule_rejects_malformed_json() {
    assert!(parse_schedule_json("{not json").is_err());
    assert!(parse_pbp_json("[oops").is_err());
}

#[test]
fn sparse_pbp_events_parse_without_error() {
    // Leaves may be absent anywhere in the tree.
    let raw = r#"{
        "game": {
            "innings": [
                { "number": 1, "halfs": [ { "events": [ {}, { "at_bat": { "events": [ { "type": "pitch" } ] } } ] } ] }
            ]
        }
    }"#;
    let innings = parse_pbp_json(raw).expect("sparse tree should parse");
    let pitch = first_pitch(&innings).expect("pitch event present");
    assert!(pitch.mlb_pitch_data.is_none());
    assert!(pitch.pitcher.is_none());
}

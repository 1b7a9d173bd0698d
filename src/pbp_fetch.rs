use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_client::{fetch_json, http_client};

const SPORTRADAR_MLB_BASE: &str = "https://api.sportradar.com/mlb/trial/v7/en";

pub fn pbp_url(api_key: &str, game_id: &str) -> String {
    format!("{SPORTRADAR_MLB_BASE}/games/{game_id}/pbp.json?api_key={api_key}")
}

pub fn fetch_play_by_play(api_key: &str, game_id: &str) -> Result<Vec<Inning>> {
    let client = http_client()?;
    let url = pbp_url(api_key, game_id);
    let body = fetch_json(client, &url).context("play-by-play request failed")?;
    parse_pbp_json(&body)
}

pub fn parse_pbp_json(raw: &str) -> Result<Vec<Inning>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let response: PbpResponse =
        serde_json::from_str(trimmed).context("invalid play-by-play json")?;
    Ok(response.game.map(|game| game.innings).unwrap_or_default())
}

/// First pitch of the first inning, in document order: halfs, then events,
/// then at-bat sub-events. Pitches in later innings are never considered.
pub fn first_pitch(innings: &[Inning]) -> Option<&AtBatEvent> {
    for inning in innings {
        if inning.number != Some(1) {
            continue;
        }
        for half in &inning.halfs {
            for event in &half.events {
                let Some(at_bat) = &event.at_bat else {
                    continue;
                };
                for pitch_event in &at_bat.events {
                    if pitch_event.kind.as_deref() == Some("pitch") {
                        return Some(pitch_event);
                    }
                }
            }
        }
    }
    None
}

// Wire shape: game.innings[].halfs[].events[].at_bat.events[]. Every leaf is
// optional so a sparse feed never aborts parsing.

#[derive(Debug, Deserialize)]
struct PbpResponse {
    #[serde(default)]
    game: Option<PbpGame>,
}

#[derive(Debug, Deserialize)]
struct PbpGame {
    #[serde(default)]
    innings: Vec<Inning>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Inning {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub halfs: Vec<InningHalf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InningHalf {
    #[serde(default)]
    pub events: Vec<HalfEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HalfEvent {
    #[serde(default)]
    pub at_bat: Option<AtBat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AtBat {
    #[serde(default)]
    pub events: Vec<AtBatEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AtBatEvent {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub mlb_pitch_data: Option<MlbPitchData>,
    #[serde(default)]
    pub pitcher: Option<PitcherInfo>,
    #[serde(default)]
    pub hitter: Option<HitterInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MlbPitchData {
    #[serde(default)]
    pub coordinates: Option<PitchCoordinates>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PitchCoordinates {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PitcherInfo {
    #[serde(default)]
    pub pitch_type: Option<String>,
    #[serde(default)]
    pub pitch_speed: Option<f64>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HitterInfo {
    #[serde(default)]
    pub full_name: Option<String>,
}

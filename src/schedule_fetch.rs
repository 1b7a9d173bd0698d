use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_client::{fetch_json, http_client};
use crate::state::GameSummary;

const SPORTRADAR_MLB_BASE: &str = "https://api.sportradar.com/mlb/trial/v7/en";

pub fn schedule_url(api_key: &str, year: &str, month: &str, day: &str) -> String {
    // Date fields go into the path exactly as entered; the API answers a
    // malformed date with a non-success status, which surfaces as one error
    // dialog for the whole batch.
    let year = year.trim();
    let month = month.trim();
    let day = day.trim();
    format!("{SPORTRADAR_MLB_BASE}/games/{year}/{month}/{day}/schedule.json?api_key={api_key}")
}

pub fn fetch_schedule(api_key: &str, year: &str, month: &str, day: &str) -> Result<Vec<GameSummary>> {
    let client = http_client()?;
    let url = schedule_url(api_key, year, month, day);
    let body = fetch_json(client, &url).context("schedule request failed")?;
    parse_schedule_json(&body)
}

pub fn parse_schedule_json(raw: &str) -> Result<Vec<GameSummary>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let response: ScheduleResponse =
        serde_json::from_str(trimmed).context("invalid schedule json")?;
    Ok(response
        .games
        .into_iter()
        .map(|game| GameSummary {
            id: game.id,
            scheduled: game.scheduled.unwrap_or_default(),
            home: game.home.and_then(|t| t.name).unwrap_or_default(),
            away: game.away.and_then(|t| t.name).unwrap_or_default(),
            venue: game.venue.and_then(|v| v.name).unwrap_or_default(),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(default)]
    games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
struct ScheduleGame {
    id: String,
    #[serde(default)]
    scheduled: Option<String>,
    #[serde(default)]
    home: Option<TeamRef>,
    #[serde(default)]
    away: Option<TeamRef>,
    #[serde(default)]
    venue: Option<VenueRef>,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VenueRef {
    #[serde(default)]
    name: Option<String>,
}

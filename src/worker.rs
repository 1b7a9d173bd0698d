use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;

use crate::chart::build_chart;
use crate::pbp_fetch::{Inning, fetch_play_by_play, first_pitch};
use crate::schedule_fetch::fetch_schedule;
use crate::state::{DialogKind, GameSummary, UiTask};

#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub api_key: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

/// Run one load batch on a new thread. Every path ends with exactly one
/// `FinishLoad`, which is what flips the UI back to idle.
pub fn spawn_loader(tx: Sender<UiTask>, request: LoadRequest) {
    thread::spawn(move || {
        run_load(&tx, &request);
        let _ = tx.send(UiTask::FinishLoad);
    });
}

fn run_load(tx: &Sender<UiTask>, request: &LoadRequest) {
    let games = match fetch_schedule(
        &request.api_key,
        &request.year,
        &request.month,
        &request.day,
    ) {
        Ok(games) => games,
        Err(err) => {
            let _ = tx.send(UiTask::Log(format!("[WARN] Schedule fetch failed: {err}")));
            let _ = tx.send(UiTask::ShowDialog {
                kind: DialogKind::Error,
                text: "Failed to fetch game schedule or no games found.".to_string(),
            });
            return;
        }
    };

    if games.is_empty() {
        let _ = tx.send(UiTask::ShowDialog {
            kind: DialogKind::Info,
            text: format!(
                "No games scheduled for {}-{}-{}",
                request.year.trim(),
                request.month.trim(),
                request.day.trim()
            ),
        });
        return;
    }

    // One game at a time; a per-game failure never stops the rest.
    for game in &games {
        let pbp = fetch_play_by_play(&request.api_key, &game.id);
        if let Err(err) = &pbp {
            let _ = tx.send(UiTask::Log(format!(
                "[WARN] Play-by-play fetch failed for {}: {err}",
                game.matchup()
            )));
        }
        let _ = tx.send(game_outcome_task(game, pbp));
    }
}

/// Map one game's play-by-play result onto its single queued UI update.
pub fn game_outcome_task(game: &GameSummary, pbp: Result<Vec<Inning>>) -> UiTask {
    let matchup = game.matchup();
    match pbp {
        Err(_) => UiTask::ShowDialog {
            kind: DialogKind::Error,
            text: format!("Failed to fetch play-by-play data for {matchup}"),
        },
        Ok(innings) => match first_pitch(&innings) {
            None => UiTask::ShowDialog {
                kind: DialogKind::Info,
                text: format!("No first pitch data available for {matchup}"),
            },
            Some(pitch) => {
                let chart = build_chart(pitch, game.game_date(), &matchup, &game.venue);
                UiTask::AddTab {
                    title: matchup,
                    chart,
                }
            }
        },
    }
}

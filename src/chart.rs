use crate::pbp_fetch::AtBatEvent;

// Strike zone rectangle in normalized [0,1]x[0,1] chart space.
pub const ZONE_LEFT: f64 = 0.35;
pub const ZONE_BOTTOM: f64 = 0.3;
pub const ZONE_WIDTH: f64 = 0.3;
pub const ZONE_HEIGHT: f64 = 0.4;

/// Map raw MLB pitch coordinates into chart space. Raw (100,100) lands on the
/// zone corner (0.35, 0.3); the mapping is affine with slopes 0.003 in x and
/// 0.004 in y.
pub fn normalize_coords(x: f64, y: f64) -> (f64, f64) {
    (
        (x - 100.0) / 100.0 * ZONE_WIDTH + ZONE_LEFT,
        (y - 100.0) / 100.0 * ZONE_HEIGHT + ZONE_BOTTOM,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrikeZoneChart {
    pub body: ChartBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Pitch {
        /// Normalized pitch location.
        point: (f64, f64),
        /// Game context: date, matchup, venue.
        header: String,
        /// Pitch details: pitcher vs hitter, type and speed.
        footer: String,
    },
    /// Centered placeholder label; no rectangle, no point.
    Error { label: &'static str },
}

pub const VISUALIZATION_ERROR: &str = "Visualization Error";
pub const UNEXPECTED_ERROR: &str = "Unexpected Error";

/// Build the chart for one pitch. Never fails: a record missing any expected
/// field yields the "Visualization Error" placeholder, and any other fault
/// (non-finite coordinates) the "Unexpected Error" one.
pub fn build_chart(
    pitch: &AtBatEvent,
    game_date: &str,
    matchup: &str,
    venue: &str,
) -> StrikeZoneChart {
    match chart_body(pitch, game_date, matchup, venue) {
        Some(body) => StrikeZoneChart { body },
        None => StrikeZoneChart {
            body: ChartBody::Error {
                label: VISUALIZATION_ERROR,
            },
        },
    }
}

fn chart_body(
    pitch: &AtBatEvent,
    game_date: &str,
    matchup: &str,
    venue: &str,
) -> Option<ChartBody> {
    let coords = pitch.mlb_pitch_data.as_ref()?.coordinates.as_ref()?;
    let x = coords.x?;
    let y = coords.y?;
    let pitcher = pitch.pitcher.as_ref()?;
    let pitch_type = pitcher.pitch_type.as_deref()?;
    let pitch_speed = pitcher.pitch_speed?;
    let pitcher_name = pitcher.full_name.as_deref()?;
    let hitter_name = pitch.hitter.as_ref()?.full_name.as_deref()?;

    if !x.is_finite() || !y.is_finite() || !pitch_speed.is_finite() {
        return Some(ChartBody::Error {
            label: UNEXPECTED_ERROR,
        });
    }

    let point = normalize_coords(x, y);
    let header = format!("Date: {game_date}\nMatchup: {matchup}\nLocation: {venue}");
    let footer = format!(
        "Pitcher: {pitcher_name} vs. Hitter: {hitter_name}\nPitch Type: {pitch_type} @ {pitch_speed} mph"
    );
    Some(ChartBody::Pitch {
        point,
        header,
        footer,
    })
}

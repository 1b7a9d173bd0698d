use first_pitch::pbp_fetch::{
    AtBat, AtBatEvent, HalfEvent, Inning, InningHalf, MlbPitchData, PitchCoordinates, PitcherInfo,
    first_pitch,
};

fn pitch_event(x: f64, y: f64, pitch_type: &str) -> AtBatEvent {
    AtBatEvent {
        kind: Some("pitch".to_string()),
        mlb_pitch_data: Some(MlbPitchData {
            coordinates: Some(PitchCoordinates {
                x: Some(x),
                y: Some(y),
            }),
        }),
        pitcher: Some(PitcherInfo {
            pitch_type: Some(pitch_type.to_string()),
            pitch_speed: Some(90.0),
            full_name: Some("Pitcher".to_string()),
        }),
        hitter: None,
    }
}

fn non_pitch_event() -> AtBatEvent {
    AtBatEvent {
        kind: Some("lineup".to_string()),
        mlb_pitch_data: None,
        pitcher: None,
        hitter: None,
    }
}

fn inning(number: Option<u32>, events: Vec<AtBatEvent>) -> Inning {
    Inning {
        number,
        halfs: vec![InningHalf {
            events: vec![HalfEvent {
                at_bat: Some(AtBat { events }),
            }],
        }],
    }
}

#[test]
fn missing_inning_one_yields_none() {
    let innings = vec![
        inning(Some(2), vec![pitch_event(100.0, 100.0, "FA")]),
        inning(Some(3), vec![pitch_event(110.0, 90.0, "SL")]),
    ];
    assert!(first_pitch(&innings).is_none());
}

#[test]
fn empty_innings_yield_none() {
    assert!(first_pitch(&[]).is_none());
    let bare = Inning {
        number: Some(1),
        halfs: Vec::new(),
    };
    assert!(first_pitch(&[bare]).is_none());
}

#[test]
fn returns_exactly_the_first_pitch_in_inning_one() {
    let wanted = pitch_event(120.0, 140.0, "FA");
    let innings = vec![inning(
        Some(1),
        vec![
            non_pitch_event(),
            wanted.clone(),
            pitch_event(90.0, 95.0, "SL"),
        ],
    )];
    let found = first_pitch(&innings).expect("pitch should be found");
    assert_eq!(found, &wanted);
}

#[test]
fn pitches_in_later_innings_are_ignored() {
    // Inning 1 has no pitch; inning 2 does. There is no fallback.
    let innings = vec![
        inning(Some(1), vec![non_pitch_event()]),
        inning(Some(2), vec![pitch_event(100.0, 100.0, "FA")]),
    ];
    assert!(first_pitch(&innings).is_none());
}

#[test]
fn inning_one_is_found_regardless_of_position() {
    let wanted = pitch_event(115.0, 125.0, "CU");
    let innings = vec![
        inning(Some(3), vec![pitch_event(80.0, 80.0, "FA")]),
        inning(None, vec![pitch_event(85.0, 85.0, "FA")]),
        inning(Some(1), vec![wanted.clone()]),
    ];
    assert_eq!(first_pitch(&innings), Some(&wanted));
}

#[test]
fn scans_halves_in_document_order() {
    let top = pitch_event(111.0, 122.0, "FA");
    let bottom = pitch_event(90.0, 90.0, "SL");
    let innings = vec![Inning {
        number: Some(1),
        halfs: vec![
            InningHalf {
                events: vec![HalfEvent {
                    at_bat: Some(AtBat {
                        events: vec![top.clone()],
                    }),
                }],
            },
            InningHalf {
                events: vec![HalfEvent {
                    at_bat: Some(AtBat {
                        events: vec![bottom],
                    }),
                }],
            },
        ],
    }];
    assert_eq!(first_pitch(&innings), Some(&top));
}

#[test]
fn events_without_at_bat_are_skipped() {
    let wanted = pitch_event(102.0, 103.0, "SI");
    let innings = vec![Inning {
        number: Some(1),
        halfs: vec![InningHalf {
            events: vec![
                HalfEvent { at_bat: None },
                HalfEvent {
                    at_bat: Some(AtBat {
                        events: vec![wanted.clone()],
                    }),
                },
            ],
        }],
    }];
    assert_eq!(first_pitch(&innings), Some(&wanted));
}

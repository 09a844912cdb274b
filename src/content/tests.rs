//! Content domain: tests for loading and validating movement tuning.

use std::path::Path;

use super::{TuningLoadError, load_tuning, parse_tuning};
use crate::movement::{GameLayer, MovementTuning, SoundClip, TuningError};

const SHIPPED_TUNING: &str = include_str!("../../assets/data/movement.ron");

#[test]
fn test_shipped_tuning_parses_and_validates() {
    let tuning = parse_tuning(SHIPPED_TUNING, "movement.ron").unwrap();

    assert_eq!(tuning.fall_gravity_scale, 4.0);
    assert_eq!(tuning.wall_jump_lock_time, 0.2);
    assert_eq!(tuning.wall_kick_speed, 10.0);
    assert_eq!(tuning.wall_hop_speed, 3.0);
    assert_eq!(tuning.wall_hop_lift, 6.0);
    assert_eq!(tuning.probe_distance, 0.1);
    assert_eq!(tuning.ground_layers, vec![GameLayer::Ground]);
    assert_eq!(tuning.wall_layers, vec![GameLayer::Wall]);
    assert_eq!(tuning.jump_sound, SoundClip::new("audio/jump.ogg"));
    assert!(tuning.exclusive_dash);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let tuning = parse_tuning("(move_speed: 5.0, jump_power: 10.0)", "partial.ron").unwrap();

    assert_eq!(tuning.move_speed, 5.0);
    assert_eq!(tuning.jump_power, 10.0);
    assert_eq!(tuning.dash_cooldown, MovementTuning::default().dash_cooldown);
    assert_eq!(tuning.wall_layers, MovementTuning::default().wall_layers);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let result = parse_tuning("(move_speed: \"fast\")", "broken.ron");

    match result {
        Err(TuningLoadError::Parse { path, .. }) => assert_eq!(path, "broken.ron"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_tunable_is_rejected_at_load() {
    let result = parse_tuning("(dash_duration: -1.0)", "negative.ron");

    match result {
        Err(TuningLoadError::Invalid { source, .. }) => assert_eq!(
            source,
            TuningError::Negative {
                field: "dash_duration",
                value: -1.0
            }
        ),
        other => panic!("expected invalid tuning error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_not_an_error() {
    let loaded = load_tuning(Path::new("assets/data/does_not_exist.ron")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_error_messages_name_the_file() {
    let error = parse_tuning("(probe_distance: 0.0)", "zero.ron").unwrap_err();
    let message = error.to_string();

    assert!(message.contains("zero.ron"), "{}", message);
    assert!(message.contains("probe_distance"), "{}", message);
}

use crate::app::interaction::InteractionMode;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{AngleUnit, Axis, DistanceUnit};
use glam::DVec2;

use super::map_intent_to_commands;

#[test]
fn double_click_maps_to_click_then_finish() {
    let state = AppState::new();
    let projected = DVec2::new(100.0, 200.0);

    let commands = map_intent_to_commands(&state, AppIntent::MapDoubleClicked { projected });

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], AppCommand::DispatchMapDoubleClick { projected });
    assert_eq!(commands[1], AppCommand::FinishGesture);
}

#[test]
fn coordinate_edit_parses_raw_text() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointCoordinateEdited {
            index: 1,
            axis: Axis::Lat,
            raw: " 48.137 ".to_string(),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::UpdatePointCoordinate {
            index: 1,
            axis: Axis::Lat,
            value: 48.137,
        }]
    );
}

#[test]
fn invalid_coordinate_text_becomes_nan() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointCoordinateEdited {
            index: 0,
            axis: Axis::Long,
            raw: "abc".to_string(),
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::UpdatePointCoordinate { value, .. } if value.is_nan()
    ));
}

#[test]
fn unit_toggle_uses_current_preference() {
    let mut state = AppState::new();
    state.units.distance_unit = DistanceUnit::Miles;
    state.units.angle_unit = AngleUnit::Degrees;

    let distance = map_intent_to_commands(&state, AppIntent::DistanceUnitToggled);
    let angle = map_intent_to_commands(&state, AppIntent::AngleUnitToggled);

    assert_eq!(
        distance,
        vec![AppCommand::SetDistanceUnit {
            unit: DistanceUnit::Kilometers
        }]
    );
    assert_eq!(
        angle,
        vec![AppCommand::SetAngleUnit {
            unit: AngleUnit::Radians
        }]
    );
}

#[test]
fn mode_selected_maps_to_set_mode() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModeSelected {
            mode: InteractionMode::FreeDraw,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetInteractionMode {
            mode: InteractionMode::FreeDraw
        }]
    );
}

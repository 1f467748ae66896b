//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::point::parse_coordinate;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { projected } => vec![AppCommand::DispatchMapClick { projected }],
        // Der Host meldet beim Doppelklick keinen zweiten Einzelklick mehr,
        // daher trägt der Doppelklick selbst den Punkt. Liegt er auf dem
        // Punkt des ersten Klicks, verwirft ihn die Duplikat-Prüfung, auch
        // wenn der erste Klick die Geste bereits abgeschlossen hat.
        AppIntent::MapDoubleClicked { projected } => vec![
            AppCommand::DispatchMapDoubleClick { projected },
            AppCommand::FinishGesture,
        ],
        AppIntent::FinishGestureRequested => vec![AppCommand::FinishGesture],
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetInteractionMode { mode }],
        AppIntent::PointCoordinateEdited { index, axis, raw } => {
            vec![AppCommand::UpdatePointCoordinate {
                index,
                axis,
                value: parse_coordinate(&raw),
            }]
        }
        AppIntent::PointDeleteRequested { index } => vec![AppCommand::DeletePoint { index }],
        AppIntent::EmptyPointAddRequested => vec![AppCommand::AppendEmptyPoint],
        AppIntent::ResetRequested => vec![AppCommand::ResetSequence],
        AppIntent::DistanceUnitSelected { unit } => vec![AppCommand::SetDistanceUnit { unit }],
        AppIntent::AngleUnitSelected { unit } => vec![AppCommand::SetAngleUnit { unit }],
        AppIntent::DistanceUnitToggled => vec![AppCommand::SetDistanceUnit {
            unit: state.units.distance_unit.toggled(),
        }],
        AppIntent::AngleUnitToggled => vec![AppCommand::SetAngleUnit {
            unit: state.units.angle_unit.toggled(),
        }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor, focus } => vec![AppCommand::ZoomCamera { factor, focus }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;

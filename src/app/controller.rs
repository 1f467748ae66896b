//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punkte & Gesten ===
            AppCommand::DispatchMapClick { projected } => {
                handlers::points::dispatch_click(state, projected)
            }
            AppCommand::DispatchMapDoubleClick { projected } => {
                handlers::points::dispatch_double_click(state, projected)
            }
            AppCommand::FinishGesture => handlers::points::finish_gesture(state),
            AppCommand::UpdatePointCoordinate { index, axis, value } => {
                handlers::points::update_coordinate(state, index, axis, value)
            }
            AppCommand::DeletePoint { index } => handlers::points::delete_point(state, index),
            AppCommand::AppendEmptyPoint => handlers::points::append_empty_point(state),
            AppCommand::ResetSequence => handlers::points::reset_sequence(state),

            // === Modus ===
            AppCommand::SetInteractionMode { mode } => {
                handlers::mode::set_interaction_mode(state, mode)?
            }

            // === Einheiten ===
            AppCommand::SetDistanceUnit { unit } => handlers::units::set_distance_unit(state, unit),
            AppCommand::SetAngleUnit { unit } => handlers::units::set_angle_unit(state, unit),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }

            // === Optionen & Anwendungssteuerung ===
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
            AppCommand::RequestExit => handlers::options::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}

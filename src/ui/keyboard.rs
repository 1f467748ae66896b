//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgelöst.

use crate::app::{AppIntent, InteractionMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, mode: InteractionMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_s, key_enter, key_escape, key_home) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Home),
        )
    });

    // Ctrl+S: Optionen speichern (Messdaten werden nie gespeichert)
    if modifiers.command && key_s {
        events.push(AppIntent::SaveOptionsRequested);
        return events;
    }

    if key_enter && mode.tool_kind().is_some() {
        events.push(AppIntent::FinishGestureRequested);
    }

    if key_escape && mode.tool_kind().is_some() {
        events.push(AppIntent::ResetRequested);
    }

    if key_home {
        events.push(AppIntent::ResetCameraRequested);
    }

    // Modus-Wechsel, Einheiten
    let (key_0, key_1, key_2, key_u, key_w) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Num0),
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::U),
            i.key_pressed(egui::Key::W),
        )
    });

    if modifiers.any() {
        return events;
    }

    if key_0 {
        events.push(AppIntent::ModeSelected {
            mode: InteractionMode::Idle,
        });
    }
    if key_1 {
        events.push(AppIntent::ModeSelected {
            mode: InteractionMode::LineMeasurement,
        });
    }
    if key_2 {
        events.push(AppIntent::ModeSelected {
            mode: InteractionMode::FreeDraw,
        });
    }
    if key_u {
        events.push(AppIntent::DistanceUnitToggled);
    }
    if key_w {
        events.push(AppIntent::AngleUnitToggled);
    }

    events
}

#[cfg(test)]
mod tests;

//! Toolbar für Modus- und Einheitenauswahl.

use crate::app::{AppIntent, AppState, InteractionMode};
use crate::core::{AngleUnit, DistanceUnit};

/// Modus-Buttons in Anzeige-Reihenfolge mit Tastenkürzel.
const MODE_BUTTONS: [(InteractionMode, &str); 3] = [
    (InteractionMode::Idle, "⏸ Inaktiv (0)"),
    (InteractionMode::LineMeasurement, "📏 Linie messen (1)"),
    (InteractionMode::FreeDraw, "✏ Freihand (2)"),
];

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.mode();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            for (mode, label) in MODE_BUTTONS {
                let mut response = ui.selectable_label(active == mode, label);
                if mode == active {
                    if let Some(tool) = state.map.tool() {
                        response = response.on_hover_text(tool.description());
                    }
                }
                // Auch ein Klick auf den aktiven Modus montiert neu und leert
                if response.clicked() {
                    events.push(AppIntent::ModeSelected { mode });
                }
            }

            ui.separator();
            render_unit_selectors(ui, state, &mut events);

            ui.separator();

            if ui.button("➕").on_hover_text("Hineinzoomen").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("➖").on_hover_text("Herauszoomen").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui
                .button("🏠")
                .on_hover_text("Startansicht (Pos1)")
                .clicked()
            {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⏻ Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
                if ui
                    .button("💾 Optionen speichern")
                    .on_hover_text("Ctrl+S")
                    .clicked()
                {
                    events.push(AppIntent::SaveOptionsRequested);
                }
            });
        });
    });

    events
}

fn render_unit_selectors(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Distanz:");
    let mut distance_unit = state.units.distance_unit;
    ui.selectable_value(&mut distance_unit, DistanceUnit::Kilometers, "km");
    ui.selectable_value(&mut distance_unit, DistanceUnit::Miles, "mi");
    if distance_unit != state.units.distance_unit {
        events.push(AppIntent::DistanceUnitSelected {
            unit: distance_unit,
        });
    }

    ui.separator();

    ui.label("Winkel:");
    let mut angle_unit = state.units.angle_unit;
    ui.selectable_value(&mut angle_unit, AngleUnit::Degrees, "°");
    ui.selectable_value(&mut angle_unit, AngleUnit::Radians, "rad");
    if angle_unit != state.units.angle_unit {
        events.push(AppIntent::AngleUnitSelected { unit: angle_unit });
    }
}

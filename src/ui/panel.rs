//! Mess-Panel (rechte Seitenleiste): eine Zeile pro Punkt mit editierbaren
//! Koordinaten, Distanz und Winkel, darunter die Gesamtlänge.

use crate::app::{summarize, AppIntent, AppState, CoordinateDraft, MeasurementRow};
use crate::core::Axis;

/// Rendert das Mess-Panel und gibt erzeugte Events zurück.
///
/// Nimmt `&mut AppState`, weil der Rohtext eines fokussierten Eingabefelds
/// als Entwurf im UI-State gehalten wird.
pub fn render_measurement_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("measurement_panel")
        .default_width(420.0)
        .min_width(320.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Messung");
            ui.separator();

            let summary = summarize(state.points.get_all(), state.units);

            if summary.rows.is_empty() {
                ui.label("Keine Punkte. Auf die Karte klicken oder Punkt hinzufügen.");
            } else {
                egui::ScrollArea::vertical()
                    .max_height((ui.available_height() - 80.0).max(120.0))
                    .show(ui, |ui| {
                        egui::Grid::new("measurement_rows")
                            .num_columns(6)
                            .striped(true)
                            .show(ui, |ui| {
                                ui.strong("#");
                                ui.strong("Breite");
                                ui.strong("Länge");
                                ui.strong("Distanz");
                                ui.strong("Winkel");
                                ui.label("");
                                ui.end_row();

                                for row in &summary.rows {
                                    render_row(ui, row, state, &mut events);
                                    ui.end_row();
                                }
                            });
                    });
            }

            ui.separator();
            ui.label(
                egui::RichText::new(format!("Gesamtlänge: {}", summary.total_text)).strong(),
            );

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("➕ Punkt hinzufügen").clicked() {
                    events.push(AppIntent::EmptyPointAddRequested);
                }
                let has_tool = state.map.tool().is_some();
                if ui
                    .add_enabled(
                        has_tool && !state.interaction.is_gesture_complete(),
                        egui::Button::new("✔ Beenden"),
                    )
                    .on_hover_text("Enter oder Doppelklick")
                    .clicked()
                {
                    events.push(AppIntent::FinishGestureRequested);
                }
                if ui
                    .add_enabled(!state.points.is_empty(), egui::Button::new("⟲ Zurücksetzen"))
                    .on_hover_text("Esc")
                    .clicked()
                {
                    events.push(AppIntent::ResetRequested);
                }
            });
        });

    events
}

fn render_row(
    ui: &mut egui::Ui,
    row: &MeasurementRow,
    state: &mut AppState,
    events: &mut Vec<AppIntent>,
) {
    ui.label(format!("{}", row.index + 1));

    for axis in [Axis::Lat, Axis::Long] {
        coordinate_input(ui, row, axis, state, events);
    }

    ui.label(&row.distance_text);
    ui.label(&row.angle_text);

    if ui.small_button("🗑").on_hover_text("Punkt löschen").clicked() {
        events.push(AppIntent::PointDeleteRequested { index: row.index });
    }
}

fn coordinate_input(
    ui: &mut egui::Ui,
    row: &MeasurementRow,
    axis: Axis,
    state: &mut AppState,
    events: &mut Vec<AppIntent>,
) {
    let draft_text = state
        .ui
        .coordinate_draft
        .as_ref()
        .filter(|draft| draft.index == row.index && draft.axis == axis)
        .map(|draft| draft.text.clone());
    let is_draft = draft_text.is_some();
    let mut text = draft_text.unwrap_or_else(|| format_coordinate(row.point.get(axis)));

    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .desired_width(90.0)
            .hint_text(axis.label()),
    );

    if response.changed() {
        events.push(AppIntent::PointCoordinateEdited {
            index: row.index,
            axis,
            raw: text.clone(),
        });
    }

    if response.has_focus() {
        state.ui.coordinate_draft = Some(CoordinateDraft {
            index: row.index,
            axis,
            text,
        });
    } else if is_draft {
        state.ui.coordinate_draft = None;
    }
}

/// Anzeigetext eines Koordinatenwerts (leer = nicht gesetzt).
fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_coordinate;

    #[test]
    fn test_format_coordinate_placeholders() {
        assert_eq!(format_coordinate(None), "");
        assert_eq!(format_coordinate(Some(f64::NAN)), "NaN");
        assert_eq!(format_coordinate(Some(48.5)), "48.5");
    }
}

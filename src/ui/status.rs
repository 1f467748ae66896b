//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::projection::to_lon_lat;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.mode().label()));

            ui.separator();

            ui.label(format!(
                "Punkte: {} ({} vollständig)",
                state.point_count(),
                state.points.complete_count()
            ));

            let tool_status = state.tool_status();
            if !tool_status.is_empty() {
                ui.separator();
                ui.label(tool_status);
            }

            ui.separator();

            let center = to_lon_lat(state.map.camera.position);
            ui.label(format!(
                "Zoom: {:.2}x | Mitte: {:.4}°, {:.4}°",
                state.map.camera.zoom, center.y, center.x
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

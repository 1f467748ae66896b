//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Schreibt die aktuellen Optionen in die Konfigurationsdatei.
///
/// Die aktuelle Einheiten-Auswahl wird als neue Vorgabe übernommen.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.default_distance_unit = state.units.distance_unit;
    state.options.default_angle_unit = state.units.angle_unit;

    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

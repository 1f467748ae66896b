//! Handler für den Wechsel des Interaktionsmodus.

use crate::app::interaction::InteractionMode;
use crate::app::AppState;

/// Wechselt den Modus. Auch die erneute Auswahl desselben Modus leert
/// Sequenz und Geometrie und montiert das Tool frisch.
pub fn set_interaction_mode(state: &mut AppState, mode: InteractionMode) -> anyhow::Result<()> {
    state.interaction.set_mode(
        mode,
        &mut state.map,
        &mut state.points,
        &mut state.geometry,
        &state.options,
    )?;
    state.ui.coordinate_draft = None;
    Ok(())
}

//! Handler für Punkt-Mutationen und den Gesten-Flow.
//!
//! Jede Mutation der Sequenz endet mit einem vollständigen Redraw der
//! Geometrie aus dem frischen Store-Zustand.

use crate::app::click_dispatcher::ClickOutcome;
use crate::app::tools::GestureSignal;
use crate::app::AppState;
use crate::core::{Axis, FeatureStyle};
use glam::DVec2;

/// Gibt einen Karten-Klick an den Dispatcher und meldet den Punkt dem Tool.
pub fn dispatch_click(state: &mut AppState, projected: DVec2) {
    let outcome = state.dispatcher.on_map_click(
        projected,
        &state.map,
        &mut state.points,
        &mut state.interaction,
    );
    apply_click_outcome(state, outcome);
}

/// Wie `dispatch_click`, aber für das zweite Drücken eines Doppelklicks.
pub fn dispatch_double_click(state: &mut AppState, projected: DVec2) {
    let outcome = state.dispatcher.on_map_double_click(
        projected,
        &state.map,
        &mut state.points,
        &mut state.interaction,
    );
    apply_click_outcome(state, outcome);
}

fn apply_click_outcome(state: &mut AppState, outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Appended { .. } => {}
        ClickOutcome::Restarted { .. } => state.geometry.set_style(FeatureStyle::Drawing),
        ClickOutcome::Duplicate | ClickOutcome::Ignored => return,
    }

    // Manuell eingefügte leere Punkte zählen nicht zur Geste
    let complete_points = state.points.complete_count();
    let signal = state
        .map
        .tool_mut()
        .map(|tool| tool.on_vertex(complete_points));
    match signal {
        Some(GestureSignal::Started) => log::debug!("Geste gestartet"),
        Some(GestureSignal::Completed) => complete_gesture(state),
        Some(GestureSignal::Continue) | None => {}
    }

    resync(state);
}

/// Beendet die laufende Geste, sofern das Tool genug Punkte hat.
pub fn finish_gesture(state: &mut AppState) {
    if state.interaction.is_gesture_complete() {
        return;
    }

    let complete_points = state.points.complete_count();
    let signal = state
        .map
        .tool_mut()
        .map(|tool| tool.on_finish_request(complete_points));

    if signal == Some(GestureSignal::Completed) {
        complete_gesture(state);
        resync(state);
    }
}

/// Setzt eine Koordinate eines Punktes; ungültige Indizes bleiben wirkungslos.
pub fn update_coordinate(state: &mut AppState, index: usize, axis: Axis, value: f64) {
    state.points.update(index, axis, value);
    resync(state);
}

/// Entfernt einen Punkt; ungültige Indizes bleiben wirkungslos.
pub fn delete_point(state: &mut AppState, index: usize) {
    state.points.delete(index);
    // Ohne vollständige Punkte beginnt der nächste Klick eine neue Geste
    if state.points.complete_count() == 0 {
        if let Some(tool) = state.map.tool_mut() {
            tool.reset();
        }
    }
    if state
        .ui
        .coordinate_draft
        .as_ref()
        .is_some_and(|draft| draft.index >= index)
    {
        state.ui.coordinate_draft = None;
    }
    resync(state);
}

/// Hängt einen leeren Punkt an, der im Panel ausgefüllt wird.
pub fn append_empty_point(state: &mut AppState) {
    state.points.insert_empty();
    resync(state);
}

/// Verwirft die Sequenz und macht das montierte Tool wieder bereit.
pub fn reset_sequence(state: &mut AppState) {
    state.points.reset();
    state.interaction.begin_gesture();
    if let Some(tool) = state.map.tool_mut() {
        tool.reset();
    }
    state.geometry.set_style(FeatureStyle::Drawing);
    state.geometry.clear();
    state.ui.coordinate_draft = None;
    log::debug!("Sequenz zurückgesetzt");
}

fn complete_gesture(state: &mut AppState) {
    state.interaction.mark_complete();
    state.geometry.set_style(FeatureStyle::Finished);
    log::debug!(
        "Geste abgeschlossen mit {} Punkten",
        state.points.complete_count()
    );
}

fn resync(state: &mut AppState) {
    state.geometry.redraw(state.points.get_all());
}

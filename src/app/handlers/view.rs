//! Handler für Kamera und Viewport.

use crate::app::state::initial_center;
use crate::app::AppState;
use glam::DVec2;

/// Setzt die Kamera auf die konfigurierte Startansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    let camera = &mut state.map.camera;
    camera.look_at(initial_center(&state.options));
    camera.zoom = state
        .options
        .initial_zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.map.camera.zoom_by(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.map.camera.zoom_by(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.map.viewport_size = size;
}

/// Verschiebt die Kamera um ein Delta in projizierten Metern.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.map.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt; der Fokus bleibt auf dem Bildschirm stabil.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: Option<DVec2>) {
    let (min, max) = (state.options.camera_zoom_min, state.options.camera_zoom_max);
    match focus {
        Some(focus) => state.map.camera.zoom_towards(factor, focus, min, max),
        None => state.map.camera.zoom_by(factor, min, max),
    }
}

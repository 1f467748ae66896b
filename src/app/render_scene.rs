//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        geometry: state.geometry.geometry().cloned(),
        camera: state.map.camera.clone(),
        viewport_size,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{FeatureStyle, GeoPoint};

    #[test]
    fn build_copies_current_geometry() {
        let mut state = AppState::new();
        let scene = build(&state, [1280.0, 720.0]);
        assert!(!scene.has_geometry());

        state.points.append(GeoPoint::new(0.0, 0.0));
        state.points.append(GeoPoint::new(0.0, 1.0));
        state.geometry.redraw(state.points.get_all());

        let scene = build(&state, [1280.0, 720.0]);
        let geometry = scene.geometry.expect("Geometrie erwartet");
        assert_eq!(geometry.vertex_count(), 2);
        assert_eq!(geometry.style, FeatureStyle::Drawing);
        assert_eq!(scene.viewport_size, [1280.0, 720.0]);
    }
}

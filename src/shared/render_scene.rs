//! Render-Szene als expliziter Übergabevertrag zwischen App und Karten-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Camera2D, RenderedGeometry};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Die eine Messgeometrie (None = nichts zu zeichnen)
    pub geometry: Option<RenderedGeometry>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Geometrie gezeichnet werden muss.
    pub fn has_geometry(&self) -> bool {
        self.geometry
            .as_ref()
            .is_some_and(|g| !g.vertices.is_empty())
    }
}

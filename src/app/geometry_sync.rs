//! Hält die gerenderte Messgeometrie im Gleichschritt mit der Punktsequenz.
//!
//! Die Geometrie wird nach jeder Mutation vollständig neu berechnet, nie
//! inkrementell gepatcht.

use crate::core::{
    FeatureStyle, GeoPoint, GeometryKind, RenderedGeometry, VectorLayer, VectorSurface,
};
use glam::DVec2;

/// Besitzt die Zeichenfläche und das eine verwaltete Feature.
#[derive(Debug, Clone, Default)]
pub struct GeometrySynchronizer<S: VectorSurface = VectorLayer> {
    surface: S,
    kind: GeometryKind,
    style: FeatureStyle,
}

impl<S: VectorSurface> GeometrySynchronizer<S> {
    /// Erstellt einen Synchronizer über einer Zeichenfläche.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            kind: GeometryKind::LineString,
            style: FeatureStyle::Drawing,
        }
    }

    /// Berechnet die Stützpunkte aus allen vollständigen Punkten neu und
    /// ersetzt die Geometrie. Ohne vollständige Punkte wird geleert.
    pub fn redraw(&mut self, points: &[GeoPoint]) {
        let vertices: Vec<DVec2> = points
            .iter()
            .filter_map(|p| p.coords())
            .map(|(lat, long)| DVec2::new(long, lat))
            .collect();

        if vertices.is_empty() {
            self.surface.clear();
            return;
        }

        self.surface.set_geometry(RenderedGeometry {
            kind: self.kind,
            vertices,
            style: self.style,
        });
    }

    /// Entfernt alle gerenderten Features.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Setzt die Geometrie-Art (wirkt beim nächsten `redraw`).
    pub fn set_kind(&mut self, kind: GeometryKind) {
        self.kind = kind;
    }

    /// Setzt den Darstellungszustand (wirkt beim nächsten `redraw`).
    pub fn set_style(&mut self, style: FeatureStyle) {
        self.style = style;
    }

    /// Aktueller Darstellungszustand.
    pub fn style(&self) -> FeatureStyle {
        self.style
    }

    /// Read-only Zugriff auf die Zeichenfläche.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Aktuell gerenderte Geometrie.
    pub fn geometry(&self) -> Option<&RenderedGeometry> {
        self.surface.geometry()
    }

    /// Anzahl der gerenderten Stützpunkte (0 ohne Feature).
    pub fn vertex_count(&self) -> usize {
        self.geometry().map_or(0, RenderedGeometry::vertex_count)
    }
}

//! Vektor-Layer als Zeichenfläche für die Messgeometrie.
//!
//! Die Oberfläche kennt nur zwei Operationen: Geometrie des einen verwalteten
//! Features setzen und alle Features entfernen.

use glam::DVec2;

/// Art der dargestellten Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryKind {
    /// Offener Linienzug (Messmodus)
    #[default]
    LineString,
    /// Geschlossener Ring (Freihand-Modus)
    Polygon,
}

/// Darstellungszustand eines Features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureStyle {
    /// Geste läuft noch (gestrichelt)
    #[default]
    Drawing,
    /// Geste abgeschlossen
    Finished,
}

/// Die eine gerenderte Geometrie: Stützpunkte als `(lon, lat)` in Grad.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedGeometry {
    /// Geometrie-Art
    pub kind: GeometryKind,
    /// Stützpunkte (nur vollständige Punkte, in Sequenz-Reihenfolge)
    pub vertices: Vec<DVec2>,
    /// Darstellungszustand
    pub style: FeatureStyle,
}

impl RenderedGeometry {
    /// Anzahl der Stützpunkte.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Zeichenfläche, auf die der Synchronizer schreibt.
pub trait VectorSurface {
    /// Ersetzt die Geometrie des verwalteten Features (legt es bei Bedarf an).
    fn set_geometry(&mut self, geometry: RenderedGeometry);

    /// Entfernt alle Features.
    fn clear(&mut self);

    /// Aktuell dargestellte Geometrie (None = keine Features).
    fn geometry(&self) -> Option<&RenderedGeometry>;
}

/// In-Memory-Layer, den der Karten-Painter pro Frame abfragt.
#[derive(Debug, Clone, Default)]
pub struct VectorLayer {
    feature: Option<RenderedGeometry>,
    /// Anzahl der Schreibvorgänge (für Repaint-Entscheidungen)
    revision: u64,
}

impl VectorLayer {
    /// Erstellt einen leeren Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Revisionszähler, steigt bei jeder Änderung.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Anzahl der Features (0 oder 1).
    pub fn feature_count(&self) -> usize {
        usize::from(self.feature.is_some())
    }
}

impl VectorSurface for VectorLayer {
    fn set_geometry(&mut self, geometry: RenderedGeometry) {
        self.feature = Some(geometry);
        self.revision += 1;
    }

    fn clear(&mut self) {
        self.feature = None;
        self.revision += 1;
    }

    fn geometry(&self) -> Option<&RenderedGeometry> {
        self.feature.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_geometry_replaces_single_feature() {
        let mut layer = VectorLayer::new();
        layer.set_geometry(RenderedGeometry {
            vertices: vec![DVec2::ZERO],
            ..Default::default()
        });
        layer.set_geometry(RenderedGeometry {
            vertices: vec![DVec2::ZERO, DVec2::ONE],
            ..Default::default()
        });
        assert_eq!(layer.feature_count(), 1);
        assert_eq!(layer.geometry().map(|g| g.vertex_count()), Some(2));
        assert_eq!(layer.revision(), 2);
    }

    #[test]
    fn test_clear_removes_feature() {
        let mut layer = VectorLayer::new();
        layer.set_geometry(RenderedGeometry::default());
        layer.clear();
        assert_eq!(layer.feature_count(), 0);
        assert!(layer.geometry().is_none());
    }
}

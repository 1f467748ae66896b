//! Geordnete Punktsequenz als einzige beschreibbare Kopie des Messzustands.

use super::{Axis, GeoPoint};

/// Besitzt die geordnete Liste aller Messpunkte.
///
/// Alle anderen Komponenten lesen über [`get_all`](Self::get_all) und
/// schreiben ausschließlich über die Methoden dieses Stores. Mutierende
/// Methoden geben synchron den neuen Stand zurück.
#[derive(Debug, Clone, Default)]
pub struct PointSequenceStore {
    points: Vec<GeoPoint>,
}

impl PointSequenceStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an und gibt die neue Länge zurück.
    pub fn append(&mut self, point: GeoPoint) -> usize {
        self.points.push(point);
        self.points.len()
    }

    /// Hängt einen leeren (unvollständigen) Punkt an.
    pub fn insert_empty(&mut self) -> usize {
        self.append(GeoPoint::empty())
    }

    /// Setzt eine Achse des Punkts an `index`.
    ///
    /// Ungültiger Index ist ein No-op.
    pub fn update(&mut self, index: usize, axis: Axis, value: f64) -> &[GeoPoint] {
        match self.points.get_mut(index) {
            Some(point) => point.set(axis, value),
            None => log::debug!(
                "Update ignoriert: Index {} außerhalb (Länge {})",
                index,
                self.points.len()
            ),
        }
        &self.points
    }

    /// Entfernt den Punkt an `index`, nachfolgende Indizes rücken auf.
    ///
    /// Ungültiger Index ist ein No-op.
    pub fn delete(&mut self, index: usize) -> &[GeoPoint] {
        if index < self.points.len() {
            self.points.remove(index);
        } else {
            log::debug!(
                "Löschen ignoriert: Index {} außerhalb (Länge {})",
                index,
                self.points.len()
            );
        }
        &self.points
    }

    /// Leert die Sequenz.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Read-only Sicht auf die aktuelle Sequenz.
    pub fn get_all(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Anzahl der Punkte (inkl. unvollständiger).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Letzter Punkt der Sequenz.
    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Anzahl vollständiger Punkte.
    pub fn complete_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_complete()).count()
    }
}

//! Übersetzt Karten-Klicks in Punkte und unterdrückt doppelt ausgelöste Klicks.

use super::interaction::InteractionModeController;
use super::map_view::MapView;
use crate::core::projection::to_lon_lat;
use crate::core::{GeoPoint, PointSequenceStore};
use glam::DVec2;

/// Ergebnis eines Karten-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Punkt angehängt, neue Länge
    Appended {
        /// Länge der Sequenz nach dem Anhängen
        len: usize,
    },
    /// Vorherige Geste war beendet: Sequenz geleert, Klick ist erster Punkt
    Restarted {
        /// Länge der Sequenz nach dem Neustart (immer 1)
        len: usize,
    },
    /// Gleiche gerundete Koordinate wie der vorherige Punkt → verworfen
    Duplicate,
    /// Kein Tool montiert / keine Listener → verworfen
    Ignored,
}

impl ClickOutcome {
    /// Wurde ein Punkt übernommen?
    pub fn accepted(self) -> bool {
        matches!(
            self,
            ClickOutcome::Appended { .. } | ClickOutcome::Restarted { .. }
        )
    }
}

/// Klick-Verteiler mit Duplikat-Unterdrückung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapClickDispatcher {
    /// Nachkommastellen für den Duplikat-Vergleich
    pub precision: u32,
}

impl Default for MapClickDispatcher {
    fn default() -> Self {
        Self::new(crate::shared::options::DUPLICATE_PRECISION)
    }
}

impl MapClickDispatcher {
    /// Erstellt einen Verteiler mit der angegebenen Vergleichsgenauigkeit.
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Wandelt eine projizierte Klick-Koordinate in einen geographischen Punkt.
    pub fn to_geo_point(projected: DVec2) -> GeoPoint {
        let lon_lat = to_lon_lat(projected);
        GeoPoint::new(lon_lat.y, lon_lat.x)
    }

    /// Verarbeitet einen Karten-Klick.
    ///
    /// Nach abgeschlossener Geste beginnt der Klick eine neue Sequenz,
    /// ansonsten wird er angehängt, sofern er nicht (gerundet) auf dem
    /// vorherigen Punkt liegt.
    pub fn on_map_click(
        &self,
        projected: DVec2,
        map: &MapView,
        store: &mut PointSequenceStore,
        interaction: &mut InteractionModeController,
    ) -> ClickOutcome {
        if !map.accepts_clicks() {
            log::debug!("Klick ignoriert: kein Gesten-Tool montiert");
            return ClickOutcome::Ignored;
        }

        let point = Self::to_geo_point(projected);

        if interaction.is_gesture_complete() {
            store.reset();
            interaction.begin_gesture();
            let len = store.append(point);
            log::debug!("Neue Geste nach Abschluss gestartet");
            return ClickOutcome::Restarted { len };
        }

        if self.is_duplicate(&point, store) {
            log::debug!("Doppelter Klick unterdrückt: {:?}", point);
            return ClickOutcome::Duplicate;
        }

        ClickOutcome::Appended {
            len: store.append(point),
        }
    }

    /// Verarbeitet das zweite Drücken eines Doppelklicks.
    ///
    /// Liegt es gerundet auf dem letzten Punkt, ist es ein Doppelauslöser
    /// des vorherigen Klicks und wird verworfen, auch wenn dieser die Geste
    /// bereits abgeschlossen hat.
    pub fn on_map_double_click(
        &self,
        projected: DVec2,
        map: &MapView,
        store: &mut PointSequenceStore,
        interaction: &mut InteractionModeController,
    ) -> ClickOutcome {
        if map.accepts_clicks() && self.is_duplicate(&Self::to_geo_point(projected), store) {
            log::debug!("Doppelklick auf letztem Punkt unterdrückt");
            return ClickOutcome::Duplicate;
        }
        self.on_map_click(projected, map, store, interaction)
    }

    /// Liegt `point` gerundet auf dem letzten Punkt der Sequenz?
    pub fn is_duplicate(&self, point: &GeoPoint, store: &PointSequenceStore) -> bool {
        let Some(previous) = store.last().and_then(|p| p.rounded(self.precision)) else {
            return false;
        };
        point.rounded(self.precision) == Some(previous)
    }
}

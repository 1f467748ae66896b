//! Handler für die Einheiten-Auswahl. Betrifft nur die Anzeige.

use crate::app::AppState;
use crate::core::{AngleUnit, DistanceUnit};

/// Setzt die Distanz-Einheit.
pub fn set_distance_unit(state: &mut AppState, unit: DistanceUnit) {
    state.units.distance_unit = unit;
}

/// Setzt die Winkel-Einheit.
pub fn set_angle_unit(state: &mut AppState, unit: AngleUnit) {
    state.units.angle_unit = unit;
}

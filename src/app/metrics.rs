//! Anzeige-Modell für das Mess-Panel: eine Zeile pro Punkt plus Gesamtlänge.
//!
//! Wird bei jedem Lesen frisch aus der Sequenz berechnet; gespeichert wird nichts.

use crate::core::measurement::{self, angle_at, distance_at, total_distance};
use crate::core::{GeoPoint, UnitPreference};

/// Messwerte für einen Punkt der Sequenz.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Index in der Sequenz
    pub index: usize,
    /// Der Punkt selbst
    pub point: GeoPoint,
    /// Distanz vom Vorgänger (None = nicht berechenbar)
    pub distance: Option<f64>,
    /// Winkel am Vorgänger (NaN = undefiniert)
    pub angle: f64,
    /// Formatierte Distanz ("N/A" / "NaN" als Platzhalter)
    pub distance_text: String,
    /// Formatierter Winkel ("NaN" als Platzhalter)
    pub angle_text: String,
}

/// Aggregierte Messwerte der ganzen Sequenz.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSummary {
    /// Eine Zeile pro Punkt
    pub rows: Vec<MeasurementRow>,
    /// Gesamtlänge in der gewählten Einheit
    pub total_distance: f64,
    /// Formatierte Gesamtlänge
    pub total_text: String,
    /// Anzahl vollständiger Punkte
    pub complete_points: usize,
}

/// Berechnet alle Zeilen und die Gesamtlänge.
pub fn summarize(points: &[GeoPoint], units: UnitPreference) -> MeasurementSummary {
    let rows = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let distance = distance_at(points, index, units.distance_unit);
            let angle = angle_at(points, index, units.angle_unit);
            MeasurementRow {
                index,
                point: *point,
                distance,
                angle,
                distance_text: measurement::format_distance(distance, units.distance_unit),
                angle_text: measurement::format_angle(angle, units.angle_unit),
            }
        })
        .collect();

    let total = total_distance(points, units.distance_unit);

    MeasurementSummary {
        rows,
        total_distance: total,
        total_text: measurement::format_distance(Some(total), units.distance_unit),
        complete_points: points.iter().filter(|p| p.is_complete()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AngleUnit, DistanceUnit};
    use approx::assert_relative_eq;

    fn triangle() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ]
    }

    #[test]
    fn test_rows_for_right_triangle() {
        let summary = summarize(&triangle(), UnitPreference::default());
        assert_eq!(summary.rows.len(), 3);

        assert_eq!(summary.rows[0].distance_text, "N/A");
        assert_eq!(summary.rows[1].distance_text, "111.19 km");
        assert_eq!(summary.rows[1].angle_text, "NaN");
        assert_eq!(summary.rows[2].angle_text, "90.00°");
        assert_eq!(summary.complete_points, 3);
    }

    #[test]
    fn test_unit_switch_changes_only_display() {
        let points = triangle();
        let km = summarize(&points, UnitPreference::default());
        let mi = summarize(
            &points,
            UnitPreference {
                distance_unit: DistanceUnit::Miles,
                angle_unit: AngleUnit::Radians,
            },
        );
        assert_eq!(km.rows[1].point, mi.rows[1].point);
        assert!(mi.rows[1].distance_text.ends_with(" mi"));
        assert_relative_eq!(
            mi.rows[2].angle,
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert!(mi.total_distance < km.total_distance);
    }

    #[test]
    fn test_incomplete_point_gives_placeholders() {
        let mut points = triangle();
        points[1].lat = None;
        let summary = summarize(&points, UnitPreference::default());
        assert_eq!(summary.rows[1].distance_text, "N/A");
        assert_eq!(summary.rows[2].distance_text, "N/A");
        assert_eq!(summary.rows[2].angle_text, "NaN");
        assert_eq!(summary.total_text, "0.00 km");
    }
}

//! Reine Messfunktionen: Distanz, Winkel, Gesamtlänge und Einheiten.

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Kugelradius in Metern, mit dem auch die Kartenbibliothek projizierte
/// Linien vermisst (mittlerer Erdradius nach IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
/// Umrechnungsfaktor Meter → Meilen.
pub const METERS_TO_MILES: f64 = 0.000_621_371_192_2;

/// Einheit für Distanzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Kilometer
    #[default]
    Kilometers,
    /// Meilen
    Miles,
}

impl DistanceUnit {
    /// Rechnet Meter in diese Einheit um.
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => meters / 1000.0,
            DistanceUnit::Miles => meters * METERS_TO_MILES,
        }
    }

    /// Einheitenkürzel für die Anzeige.
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Die jeweils andere Einheit (Umschalter).
    pub fn toggled(self) -> Self {
        match self {
            DistanceUnit::Kilometers => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Kilometers,
        }
    }
}

/// Einheit für Winkel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Grad
    #[default]
    Degrees,
    /// Bogenmaß
    Radians,
}

impl AngleUnit {
    /// Rechnet einen Winkel im Bogenmaß in diese Einheit um.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }

    /// Einheitenkürzel für die Anzeige.
    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "°",
            AngleUnit::Radians => "rad",
        }
    }

    /// Die jeweils andere Einheit (Umschalter).
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }
}

/// Prozessweite Einheiten-Auswahl. Ändert nur die Anzeige, nie die Punktdaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitPreference {
    /// Einheit für Distanzen
    pub distance_unit: DistanceUnit,
    /// Einheit für Winkel
    pub angle_unit: AngleUnit,
}

/// Großkreis-Distanz in Metern (Haversine).
fn haversine_m(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = a;
    let (lat2, lon2) = b;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distanz zwischen zwei Punkten in `unit`.
///
/// `None`, wenn einer der Punkte unvollständig ist. NaN-Koordinaten ergeben NaN.
pub fn distance(a: &GeoPoint, b: &GeoPoint, unit: DistanceUnit) -> Option<f64> {
    let a = a.coords()?;
    let b = b.coords()?;
    Some(unit.from_meters(haversine_m(a, b)))
}

/// Innenwinkel bei `b` zwischen den Schenkeln `b→a` und `b→c`.
///
/// Kosinussatz auf den ebenen Seitenlängen in Grad-Koordinaten (keine
/// Reprojektion). Unvollständige Punkte oder degenerierte Dreiecke ergeben NaN.
pub fn angle(a: &GeoPoint, b: &GeoPoint, c: &GeoPoint, unit: AngleUnit) -> f64 {
    let (Some(a), Some(b), Some(c)) = (a.coords(), b.coords(), c.coords()) else {
        return f64::NAN;
    };
    let side = |p: (f64, f64), q: (f64, f64)| (p.0 - q.0).hypot(p.1 - q.1);

    let ab = side(a, b);
    let bc = side(b, c);
    let ac = side(a, c);

    // Rundungsfehler bei kollinearen Punkten dürfen acos nicht aus [-1, 1] schieben
    let cos_b = ((ab * ab + bc * bc - ac * ac) / (2.0 * ab * bc)).clamp(-1.0, 1.0);
    unit.from_radians(cos_b.acos())
}

/// Summe der Distanzen aller aufeinanderfolgenden Paare.
///
/// Paare mit unvollständigem Endpunkt tragen 0 bei.
pub fn total_distance(points: &[GeoPoint], unit: DistanceUnit) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1], unit).unwrap_or(0.0))
        .sum()
}

/// Distanz vom Vorgänger zu `points[index]` (Index 0 hat keinen Vorgänger).
pub fn distance_at(points: &[GeoPoint], index: usize, unit: DistanceUnit) -> Option<f64> {
    if index == 0 {
        return None;
    }
    distance(points.get(index - 1)?, points.get(index)?, unit)
}

/// Winkel am Vorgänger von `points[index]`, gebildet aus
/// `points[index - 2]`, `points[index - 1]` und `points[index]`.
pub fn angle_at(points: &[GeoPoint], index: usize, unit: AngleUnit) -> f64 {
    if index < 2 || index >= points.len() {
        return f64::NAN;
    }
    angle(&points[index - 2], &points[index - 1], &points[index], unit)
}

/// Formatiert eine Distanz für die Anzeige ("N/A" bei fehlenden Punkten).
pub fn format_distance(value: Option<f64>, unit: DistanceUnit) -> String {
    match value {
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) => format!("{:.2} {}", v, unit.suffix()),
        None => "N/A".to_string(),
    }
}

/// Formatiert einen Winkel für die Anzeige ("NaN" wenn undefiniert).
pub fn format_angle(value: f64, unit: AngleUnit) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    match unit {
        AngleUnit::Degrees => format!("{:.2}{}", value, unit.suffix()),
        AngleUnit::Radians => format!("{:.4} {}", value, unit.suffix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ]
    }

    #[test]
    fn test_one_degree_along_equator() {
        let d = distance(
            &GeoPoint::new(0.0, 0.0),
            &GeoPoint::new(0.0, 1.0),
            DistanceUnit::Kilometers,
        )
        .expect("vollständige Punkte");
        assert_relative_eq!(d, 111.195, epsilon = 0.001);
    }

    #[test]
    fn test_miles_conversion() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let km = distance(&a, &b, DistanceUnit::Kilometers).unwrap();
        let mi = distance(&a, &b, DistanceUnit::Miles).unwrap();
        assert_relative_eq!(mi, km * 1000.0 * METERS_TO_MILES, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(48.137, 11.575);
        let b = GeoPoint::new(52.52, 13.405);
        let ab = distance(&a, &b, DistanceUnit::Kilometers).unwrap();
        let ba = distance(&b, &a, DistanceUnit::Kilometers).unwrap();
        assert_relative_eq!(ab, ba, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_incomplete_is_none() {
        let a = GeoPoint::new(1.0, 1.0);
        let b = GeoPoint {
            lat: Some(2.0),
            long: None,
        };
        assert_eq!(distance(&a, &b, DistanceUnit::Kilometers), None);
    }

    #[test]
    fn test_nan_coordinate_propagates() {
        let a = GeoPoint::new(f64::NAN, 1.0);
        let b = GeoPoint::new(2.0, 1.0);
        let d = distance(&a, &b, DistanceUnit::Kilometers).unwrap();
        assert!(d.is_nan());
        assert_eq!(format_distance(Some(d), DistanceUnit::Kilometers), "NaN");
    }

    #[test]
    fn test_right_angle_in_triangle() {
        let pts = triangle();
        assert_relative_eq!(angle_at(&pts, 2, AngleUnit::Degrees), 90.0, epsilon = 1e-9);
        assert_relative_eq!(
            angle_at(&pts, 2, AngleUnit::Radians),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angle_undefined_before_third_point() {
        let pts = triangle();
        assert!(angle_at(&pts, 0, AngleUnit::Degrees).is_nan());
        assert!(angle_at(&pts, 1, AngleUnit::Degrees).is_nan());
        assert!(angle_at(&pts, 3, AngleUnit::Degrees).is_nan());
    }

    #[test]
    fn test_angle_with_incomplete_point_is_nan() {
        let mut pts = triangle();
        pts[0].long = None;
        assert!(angle_at(&pts, 2, AngleUnit::Degrees).is_nan());
    }

    #[test]
    fn test_collinear_angle_is_straight() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.1),
            GeoPoint::new(0.0, 0.3),
        ];
        assert_relative_eq!(angle_at(&pts, 2, AngleUnit::Degrees), 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_total_distance_sums_pairs() {
        let pts = triangle();
        let expected = distance_at(&pts, 1, DistanceUnit::Kilometers).unwrap()
            + distance_at(&pts, 2, DistanceUnit::Kilometers).unwrap();
        assert_relative_eq!(
            total_distance(&pts, DistanceUnit::Kilometers),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_total_distance_skips_incomplete_pairs() {
        let mut pts = triangle();
        pts.insert(1, GeoPoint::empty());
        // (0,0)-(leer) und (leer)-(0,1) tragen 0 bei
        let expected = distance(&pts[2], &pts[3], DistanceUnit::Kilometers).unwrap();
        assert_relative_eq!(
            total_distance(&pts, DistanceUnit::Kilometers),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_format_placeholders() {
        assert_eq!(format_distance(None, DistanceUnit::Miles), "N/A");
        assert_eq!(format_angle(f64::NAN, AngleUnit::Degrees), "NaN");
        assert_eq!(format_angle(90.0, AngleUnit::Degrees), "90.00°");
        assert_eq!(
            format_distance(Some(111.1949), DistanceUnit::Kilometers),
            "111.19 km"
        );
    }
}

//! Geographischer Punkt mit optional fehlenden Koordinaten.

/// Koordinaten-Achse eines Punkts (für manuelle Eingaben).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Breitengrad
    Lat,
    /// Längengrad
    Long,
}

impl Axis {
    /// Kurzes Label für das Eingabefeld.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Lat => "Lat",
            Axis::Long => "Long",
        }
    }
}

/// Ein möglicherweise unvollständiger Punkt (Breite, Länge in Grad).
///
/// Unvollständige Punkte bleiben in der Sequenz, fließen aber nicht in
/// Distanz- oder Winkelberechnungen ein.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Breitengrad in Grad (None = noch nicht gesetzt)
    pub lat: Option<f64>,
    /// Längengrad in Grad (None = noch nicht gesetzt)
    pub long: Option<f64>,
}

impl GeoPoint {
    /// Erstellt einen vollständigen Punkt.
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            lat: Some(lat),
            long: Some(long),
        }
    }

    /// Erstellt einen leeren Punkt (beide Achsen fehlen).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn beide Achsen gesetzt sind.
    ///
    /// NaN zählt als gesetzt: ungültige Eingaben sollen sichtbar bis in die
    /// Messwerte durchschlagen.
    pub fn is_complete(&self) -> bool {
        self.lat.is_some() && self.long.is_some()
    }

    /// Gibt `(lat, long)` zurück, falls der Punkt vollständig ist.
    pub fn coords(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.long?))
    }

    /// Liest eine Achse.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Lat => self.lat,
            Axis::Long => self.long,
        }
    }

    /// Setzt eine Achse.
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Lat => self.lat = Some(value),
            Axis::Long => self.long = Some(value),
        }
    }

    /// Auf `decimals` Nachkommastellen gerundete Koordinaten (nur für Vergleiche).
    pub fn rounded(&self, decimals: u32) -> Option<(f64, f64)> {
        let (lat, long) = self.coords()?;
        Some((round_to(lat, decimals), round_to(long, decimals)))
    }
}

/// Rundet `value` auf `decimals` Nachkommastellen.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Parst eine Roh-Eingabe aus einem Koordinatenfeld.
///
/// Nicht parsebarer Text ergibt NaN und wird nicht abgewiesen.
pub fn parse_coordinate(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_point_has_no_coords() {
        let mut p = GeoPoint::empty();
        assert!(!p.is_complete());
        assert_eq!(p.coords(), None);

        p.set(Axis::Lat, 12.5);
        assert!(!p.is_complete());

        p.set(Axis::Long, 3.0);
        assert_eq!(p.coords(), Some((12.5, 3.0)));
    }

    #[test]
    fn test_rounded_uses_two_decimals() {
        let p = GeoPoint::new(48.123_456, 11.575_1);
        assert_eq!(p.rounded(2), Some((48.12, 11.58)));
    }

    #[test]
    fn test_parse_coordinate_invalid_is_nan() {
        assert_eq!(parse_coordinate(" 4.25 "), 4.25);
        assert!(parse_coordinate("abc").is_nan());
        assert!(parse_coordinate("").is_nan());
    }
}

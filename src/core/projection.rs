//! Web-Mercator (EPSG:3857) ↔ geographische Koordinaten.
//!
//! Die Karte liefert Klicks in projizierten Metern; das Messmodell arbeitet
//! mit Breite/Länge in Grad.

use glam::DVec2;

/// Radius der sphärischen Mercator-Projektion in Metern.
pub const MERCATOR_RADIUS_M: f64 = 6_378_137.0;
/// Halbe Weltbreite in projizierten Metern.
pub const MERCATOR_HALF_EXTENT_M: f64 = std::f64::consts::PI * MERCATOR_RADIUS_M;
/// Breitengrad-Grenze, ab der Mercator-Werte ins Unendliche laufen.
pub const MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_59;

/// Projizierte Koordinate (x = Ost, y = Nord) → `(lon, lat)` in Grad.
pub fn to_lon_lat(projected: DVec2) -> DVec2 {
    let lon = (projected.x / MERCATOR_RADIUS_M).to_degrees();
    let lat = (2.0 * (projected.y / MERCATOR_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    DVec2::new(wrap_longitude(lon), lat)
}

/// `(lon, lat)` in Grad → projizierte Koordinate.
///
/// Die Breite wird auf den darstellbaren Mercator-Bereich begrenzt; gespeicherte
/// Punktdaten bleiben davon unberührt.
pub fn from_lon_lat(lon_lat: DVec2) -> DVec2 {
    let lat = lon_lat.y.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT);
    let x = MERCATOR_RADIUS_M * lon_lat.x.to_radians();
    let y = MERCATOR_RADIUS_M
        * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0)
            .tan()
            .ln();
    DVec2::new(x, y)
}

/// Normalisiert einen Längengrad auf [-180, 180).
///
/// Klicks auf einer horizontal wiederholten Welt liefern sonst Werte jenseits ±180.
pub fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

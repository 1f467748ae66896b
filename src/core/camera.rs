//! 2D-Kartenkamera für Pan und Zoom in projizierten Metern.

use super::projection::MERCATOR_HALF_EXTENT_M;
use glam::{DVec2, Vec2};

/// 2D-Kamera mit Pan und Zoom über der Web-Mercator-Ebene
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Kartenmitte in projizierten Metern (x = Ost, y = Nord)
    pub position: DVec2,
    /// Zoom-Level (1.0 = ganze Welt in der Höhe sichtbar)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Halbhöhe in Metern bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f64 = MERCATOR_HALF_EXTENT_M;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.5;
    /// Maximaler Zoom-Faktor (Straßenebene).
    pub const ZOOM_MAX: f64 = 1_000_000.0;

    /// Erstellt eine neue Kamera über dem Ursprung
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der angegebenen Grenzen
    pub fn zoom_by(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Zoomt so, dass `focus` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(&mut self, factor: f64, focus: DVec2, min: f64, max: f64) {
        let old_zoom = self.zoom;
        self.zoom_by(factor, min, max);
        let effective = self.zoom / old_zoom;
        self.position = focus + (self.position - focus) / effective;
    }

    /// Meter pro Bildschirm-Pixel.
    pub fn meters_per_pixel(&self, viewport_height: f32) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * f64::from(viewport_height.max(1.0)))
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) in projizierte Meter.
    /// Screen-Y zeigt nach unten, Karten-Y nach Norden.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> DVec2 {
        let mpp = self.meters_per_pixel(screen_size.y);
        let offset = (screen_pos - screen_size * 0.5).as_dvec2();
        self.position + DVec2::new(offset.x * mpp, -offset.y * mpp)
    }

    /// Konvertiert projizierte Meter in Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world: DVec2, screen_size: Vec2) -> Vec2 {
        let mpp = self.meters_per_pixel(screen_size.y);
        let rel = world - self.position;
        screen_size * 0.5 + Vec2::new((rel.x / mpp) as f32, (-rel.y / mpp) as f32)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

//! Zentrale Konfiguration für den GeoMeasure Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{AngleUnit, DistanceUnit};
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 1_000_000.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 2.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.2;

// ── Gesten ──────────────────────────────────────────────────────────

/// Nachkommastellen für den Duplikat-Vergleich aufeinanderfolgender Klicks.
pub const DUPLICATE_PRECISION: u32 = 2;
/// Obergrenze für `duplicate_precision`; darüber läuft `10^n` über.
pub const MAX_DUPLICATE_PRECISION: u32 = 10;
/// Punkte pro Messlinien-Geste (0 = unbegrenzt).
pub const LINE_MAX_POINTS: usize = 2;
/// Mindestanzahl Punkte, um eine Freihand-Fläche zu schließen.
pub const FREE_DRAW_MIN_POINTS: usize = 3;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienfarbe während des Zeichnens (RGBA: halbtransparentes Schwarz).
pub const LINE_COLOR_DRAWING: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
/// Linienfarbe nach Abschluss der Geste (RGBA: #ffcc33).
pub const LINE_COLOR_FINISHED: [f32; 4] = [1.0, 0.8, 0.2, 1.0];
/// Füllfarbe für Freihand-Flächen (RGBA: halbtransparentes Weiß).
pub const FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.2];
/// Linienbreite in Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.0;
/// Strich- und Lückenlänge der gestrichelten Linie in Pixeln.
pub const DASH_LENGTH_PX: f32 = 10.0;
/// Radius der Stützpunkt-Markierung in Pixeln.
pub const VERTEX_RADIUS_PX: f32 = 5.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geo_measure_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Einheiten ───────────────────────────────────────────────
    /// Distanz-Einheit beim Start
    #[serde(default)]
    pub default_distance_unit: DistanceUnit,
    /// Winkel-Einheit beim Start
    #[serde(default)]
    pub default_angle_unit: AngleUnit,

    // ── Gesten ──────────────────────────────────────────────────
    /// Nachkommastellen für die Duplikat-Unterdrückung
    pub duplicate_precision: u32,
    /// Punkte pro Messlinie (0 = unbegrenzt, Abschluss per Doppelklick)
    pub line_max_points: usize,
    /// Mindestpunktzahl zum Schließen einer Freihand-Fläche
    pub free_draw_min_points: usize,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
    /// Start-Mittelpunkt der Karte als [lon, lat]
    #[serde(default)]
    pub initial_center_lon_lat: [f64; 2],
    /// Start-Zoom der Karte
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienfarbe während des Zeichnens
    pub line_color_drawing: [f32; 4],
    /// Linienfarbe nach Abschluss
    pub line_color_finished: [f32; 4],
    /// Füllfarbe für Freihand-Flächen
    pub fill_color: [f32; 4],
    /// Linienbreite in Pixeln
    pub line_width_px: f32,
    /// Strichlänge der gestrichelten Linie
    pub dash_length_px: f32,
    /// Radius der Stützpunkte
    pub vertex_radius_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_distance_unit: DistanceUnit::Kilometers,
            default_angle_unit: AngleUnit::Degrees,

            duplicate_precision: DUPLICATE_PRECISION,
            line_max_points: LINE_MAX_POINTS,
            free_draw_min_points: FREE_DRAW_MIN_POINTS,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            initial_center_lon_lat: [0.0, 0.0],
            initial_zoom: default_initial_zoom(),

            line_color_drawing: LINE_COLOR_DRAWING,
            line_color_finished: LINE_COLOR_FINISHED,
            fill_color: FILL_COLOR,
            line_width_px: LINE_WIDTH_PX,
            dash_length_px: DASH_LENGTH_PX,
            vertex_radius_px: VERTEX_RADIUS_PX,
        }
    }
}

/// Serde-Default für `initial_zoom` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_initial_zoom() -> f64 {
    1.0
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Korrigiert Werte, mit denen Kamera oder Duplikat-Vergleich nicht
    /// arbeiten können. Ungültige Zoom-Grenzen fallen auf die Standardwerte
    /// zurück, vertauschte werden getauscht.
    pub fn sanitized(mut self) -> Self {
        let valid_bound = |v: f64| v.is_finite() && v > 0.0;
        if !valid_bound(self.camera_zoom_min) || !valid_bound(self.camera_zoom_max) {
            log::warn!(
                "Ungültige Zoom-Grenzen ({}, {}), verwende Standardwerte",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        } else if self.camera_zoom_min > self.camera_zoom_max {
            log::warn!(
                "Zoom-Grenzen vertauscht ({} > {}), werden getauscht",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            std::mem::swap(&mut self.camera_zoom_min, &mut self.camera_zoom_max);
        }

        if !self.initial_zoom.is_finite() {
            log::warn!("Ungültiger Start-Zoom {}, verwende 1.0", self.initial_zoom);
            self.initial_zoom = default_initial_zoom();
        }
        if !valid_bound(self.camera_zoom_step) {
            self.camera_zoom_step = CAMERA_ZOOM_STEP;
        }
        if !valid_bound(self.camera_scroll_zoom_step) {
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }

        if self.duplicate_precision > MAX_DUPLICATE_PRECISION {
            log::warn!(
                "duplicate_precision {} zu groß, begrenzt auf {}",
                self.duplicate_precision,
                MAX_DUPLICATE_PRECISION
            );
            self.duplicate_precision = MAX_DUPLICATE_PRECISION;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geo_measure_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geo_measure_editor.toml")
    }
}

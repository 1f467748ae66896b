//! Application State: zentrale Datenhaltung.
//!
//! `AppState` ist der einzige Besitzer aller Mess-Komponenten. Handler
//! bekommen `&mut AppState`; parallele Schreiber gibt es nicht.

use super::click_dispatcher::MapClickDispatcher;
use super::geometry_sync::GeometrySynchronizer;
use super::interaction::{InteractionMode, InteractionModeController};
use super::map_view::MapView;
use super::CommandLog;
use crate::core::projection::from_lon_lat;
use crate::core::{Axis, PointSequenceStore, UnitPreference, VectorLayer};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Entwurf einer laufenden Koordinaten-Eingabe im Panel.
///
/// Hält den Rohtext, solange das Feld fokussiert ist, damit halb getippte
/// Zahlen ("4.") nicht beim nächsten Frame überschrieben werden.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateDraft {
    /// Punkt-Index
    pub index: usize,
    /// Bearbeitete Achse
    pub axis: Axis,
    /// Rohtext des Feldes
    pub text: String,
}

/// UI-bezogener Zustand (nur Darstellung, keine Messdaten)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktuell bearbeitetes Koordinatenfeld
    pub coordinate_draft: Option<CoordinateDraft>,
    /// Letzte Statusmeldung (z.B. "Optionen gespeichert")
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die eine beschreibbare Punktsequenz
    pub points: PointSequenceStore,
    /// Gerenderte Messgeometrie
    pub geometry: GeometrySynchronizer<VectorLayer>,
    /// Modus und Gesten-Abschluss
    pub interaction: InteractionModeController,
    /// Klick-Verteiler mit Duplikat-Unterdrückung
    pub dispatcher: MapClickDispatcher,
    /// Karte (Kamera, Viewport, montiertes Tool)
    pub map: MapView,
    /// Einheiten-Auswahl (nur Anzeige)
    pub units: UnitPreference,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let mut map = MapView::new();
        map.camera.look_at(initial_center(&options));
        map.camera.zoom = options
            .initial_zoom
            .clamp(options.camera_zoom_min, options.camera_zoom_max);

        Self {
            points: PointSequenceStore::new(),
            geometry: GeometrySynchronizer::new(VectorLayer::new()),
            interaction: InteractionModeController::new(),
            dispatcher: MapClickDispatcher::new(options.duplicate_precision),
            map,
            units: UnitPreference {
                distance_unit: options.default_distance_unit,
                angle_unit: options.default_angle_unit,
            },
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Aktiver Interaktionsmodus
    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Anzahl der Punkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Statustext des montierten Tools (leer ohne Tool)
    pub fn tool_status(&self) -> &str {
        if self.interaction.is_gesture_complete() {
            return "Geste abgeschlossen, nächster Klick beginnt neu";
        }
        self.map.tool().map_or("", |tool| tool.status_text())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start-Mittelpunkt der Karte in projizierten Metern.
pub(crate) fn initial_center(options: &EditorOptions) -> DVec2 {
    let [lon, lat] = options.initial_center_lon_lat;
    from_lon_lat(DVec2::new(lon, lat))
}

use crate::app::interaction::InteractionMode;
use crate::core::{AngleUnit, Axis, DistanceUnit};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Einfacher Klick auf die Karte (projizierte Koordinate in Metern)
    MapClicked { projected: DVec2 },
    /// Doppelklick auf die Karte: Punkt setzen und Geste beenden
    MapDoubleClicked { projected: DVec2 },
    /// Geste ohne neuen Punkt beenden (Enter)
    FinishGestureRequested,
    /// Interaktionsmodus auswählen (auch erneut denselben)
    ModeSelected { mode: InteractionMode },
    /// Koordinatenfeld im Panel geändert (Rohtext, wird hier geparst)
    PointCoordinateEdited {
        index: usize,
        axis: Axis,
        raw: String,
    },
    /// Punkt im Panel löschen
    PointDeleteRequested { index: usize },
    /// Leeren Punkt am Ende anhängen
    EmptyPointAddRequested,
    /// Sequenz verwerfen, Tool bleibt aktiv
    ResetRequested,
    /// Distanz-Einheit wählen
    DistanceUnitSelected { unit: DistanceUnit },
    /// Winkel-Einheit wählen
    AngleUnitSelected { unit: AngleUnit },
    /// Distanz-Einheit umschalten (Tastenkürzel)
    DistanceUnitToggled,
    /// Winkel-Einheit umschalten (Tastenkürzel)
    AngleUnitToggled,
    /// Kamera auf Startansicht zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (projizierte Meter)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom { factor: f64, focus: Option<DVec2> },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

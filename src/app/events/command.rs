use crate::app::interaction::InteractionMode;
use crate::core::{AngleUnit, Axis, DistanceUnit};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Karten-Klick an den Dispatcher geben
    DispatchMapClick { projected: DVec2 },
    /// Zweites Drücken eines Doppelklicks an den Dispatcher geben
    DispatchMapDoubleClick { projected: DVec2 },
    /// Laufende Geste beenden
    FinishGesture,
    /// Modus wechseln (leert Sequenz und Geometrie)
    SetInteractionMode { mode: InteractionMode },
    /// Einzelne Koordinate setzen (NaN bei ungültiger Eingabe)
    UpdatePointCoordinate {
        index: usize,
        axis: Axis,
        value: f64,
    },
    /// Punkt entfernen
    DeletePoint { index: usize },
    /// Leeren Punkt anhängen
    AppendEmptyPoint,
    /// Sequenz und Geometrie leeren
    ResetSequence,
    /// Distanz-Einheit setzen
    SetDistanceUnit { unit: DistanceUnit },
    /// Winkel-Einheit setzen
    SetAngleUnit { unit: AngleUnit },
    /// Kamera auf Startansicht zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera { factor: f64, focus: Option<DVec2> },
    /// Optionen persistieren
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}

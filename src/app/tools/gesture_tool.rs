//! GestureTool-Trait: Schnittstelle für alle Zeichen-Gesten auf der Karte.

use crate::core::GeometryKind;

use super::{GestureSignal, ToolKind};

/// Schnittstelle für montierbare Gesten-Werkzeuge (Messlinie, Freihand).
///
/// Ein Tool kennt nur den Fortschritt der laufenden Geste. Die Punkte selbst
/// liegen ausschließlich im `PointSequenceStore`; das Tool bekommt nur Zählerstände.
pub trait GestureTool {
    /// Art des Tools (für Transition-Tabelle und Logging)
    fn kind(&self) -> ToolKind;

    /// Anzeigename für Toolbar und Statusleiste
    fn name(&self) -> &str;

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Statustext für das Mess-Panel (z.B. "Startpunkt klicken")
    fn status_text(&self) -> &str;

    /// Geometrie-Art, die der Synchronizer für dieses Tool zeichnet.
    fn geometry_kind(&self) -> GeometryKind;

    /// Maximale Punktanzahl einer Geste (None = unbegrenzt).
    fn max_points(&self) -> Option<usize>;

    /// Ein Klick-Punkt wurde in den Store übernommen.
    /// `complete_points` ist die Anzahl vollständiger Punkte danach.
    fn on_vertex(&mut self, complete_points: usize) -> GestureSignal;

    /// Benutzer möchte die Geste beenden (Doppelklick / Enter).
    /// `complete_points` ist die Anzahl vollständiger Punkte.
    fn on_finish_request(&mut self, complete_points: usize) -> GestureSignal;

    /// Tool-Zustand zurücksetzen (Escape / neue Geste / Unmount).
    fn reset(&mut self);

    /// Läuft gerade eine Geste?
    fn is_drawing(&self) -> bool;
}

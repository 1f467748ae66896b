//! Trait-basiertes Gesten-Tool-System für die Karten-Interaktion.
//!
//! Jedes Tool implementiert den `GestureTool`-Trait und wird vom
//! `InteractionModeController` auf der `MapView` montiert. Tools melden nur
//! Start/Ende einer Geste; die Punktdaten verwaltet der Store.

/// Freihand-Tool (geschlossene Fläche, unbegrenzte Punktanzahl).
pub mod free_draw;
/// GestureTool-Trait, Schnittstelle für alle Gesten-Tools.
mod gesture_tool;
/// Messlinien-Tool (Standard: zwei Punkte pro Geste).
pub mod line_measure;
mod progress;

pub use free_draw::FreeDrawTool;
pub use gesture_tool::GestureTool;
pub use line_measure::LineMeasureTool;

use crate::shared::EditorOptions;

/// Verfügbare Gesten-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Messlinie
    LineMeasure,
    /// Freihand-Fläche
    FreeDraw,
}

/// Signal eines Tools nach einer Eingabe; steuert den Gesten-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSignal {
    /// Erster Punkt einer neuen Geste ("draw start")
    Started,
    /// Punkt registriert, Geste läuft weiter
    Continue,
    /// Geste abgeschlossen ("draw end")
    Completed,
}

/// Erstellt ein frisches Tool der angegebenen Art mit Werten aus den Optionen.
pub fn create_tool(kind: ToolKind, options: &EditorOptions) -> Box<dyn GestureTool> {
    match kind {
        ToolKind::LineMeasure => Box::new(LineMeasureTool::new(options.line_max_points)),
        ToolKind::FreeDraw => Box::new(FreeDrawTool::new(options.free_draw_min_points)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tool_uses_options() {
        let mut options = EditorOptions::default();
        options.line_max_points = 4;
        let tool = create_tool(ToolKind::LineMeasure, &options);
        assert_eq!(tool.kind(), ToolKind::LineMeasure);
        assert_eq!(tool.max_points(), Some(4));

        let tool = create_tool(ToolKind::FreeDraw, &options);
        assert_eq!(tool.kind(), ToolKind::FreeDraw);
        assert_eq!(tool.max_points(), None);
    }
}

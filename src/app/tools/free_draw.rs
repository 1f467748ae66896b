//! Freihand-Tool: beliebig viele Punkte als geschlossener Ring,
//! Geste endet per Doppelklick oder Enter.

use super::progress::GestureProgress;
use super::{GestureSignal, GestureTool, ToolKind};
use crate::core::GeometryKind;

/// Freihand-Tool
pub struct FreeDrawTool {
    progress: GestureProgress,
}

impl FreeDrawTool {
    /// Erstellt ein Freihand-Tool mit Mindestpunktzahl zum Beenden.
    pub fn new(min_points_to_finish: usize) -> Self {
        Self {
            progress: GestureProgress::new(None, min_points_to_finish.max(1)),
        }
    }
}

impl Default for FreeDrawTool {
    fn default() -> Self {
        Self::new(3)
    }
}

impl GestureTool for FreeDrawTool {
    fn kind(&self) -> ToolKind {
        ToolKind::FreeDraw
    }

    fn name(&self) -> &str {
        "✏ Freihand"
    }

    fn description(&self) -> &str {
        "Zeichnet eine freie Fläche aus beliebig vielen Punkten"
    }

    fn status_text(&self) -> &str {
        if self.progress.drawing {
            "Weitere Punkte klicken, Doppelklick oder Enter schließt die Fläche"
        } else {
            "Ersten Punkt klicken"
        }
    }

    fn geometry_kind(&self) -> GeometryKind {
        GeometryKind::Polygon
    }

    fn max_points(&self) -> Option<usize> {
        None
    }

    fn on_vertex(&mut self, complete_points: usize) -> GestureSignal {
        self.progress.vertex(complete_points)
    }

    fn on_finish_request(&mut self, complete_points: usize) -> GestureSignal {
        self.progress.finish(complete_points)
    }

    fn reset(&mut self) {
        self.progress.reset();
    }

    fn is_drawing(&self) -> bool {
        self.progress.drawing
    }
}

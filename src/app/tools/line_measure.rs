//! Messlinien-Tool: Punkte per Klick setzen, Geste endet nach `max_points`
//! Punkten oder per Doppelklick.

use super::progress::GestureProgress;
use super::{GestureSignal, GestureTool, ToolKind};
use crate::core::GeometryKind;

/// Kleinste Punktanzahl, mit der eine Messlinie beendet werden kann.
const MIN_LINE_POINTS: usize = 2;

/// Messlinien-Tool
pub struct LineMeasureTool {
    progress: GestureProgress,
}

impl LineMeasureTool {
    /// Erstellt ein Messlinien-Tool. `max_points == 0` bedeutet unbegrenzt.
    pub fn new(max_points: usize) -> Self {
        let max = (max_points > 0).then_some(max_points.max(MIN_LINE_POINTS));
        Self {
            progress: GestureProgress::new(max, MIN_LINE_POINTS),
        }
    }
}

impl Default for LineMeasureTool {
    fn default() -> Self {
        Self::new(MIN_LINE_POINTS)
    }
}

impl GestureTool for LineMeasureTool {
    fn kind(&self) -> ToolKind {
        ToolKind::LineMeasure
    }

    fn name(&self) -> &str {
        "📏 Messlinie"
    }

    fn description(&self) -> &str {
        "Misst Distanzen und Winkel entlang einer Linie"
    }

    fn status_text(&self) -> &str {
        if self.progress.drawing {
            "Nächsten Punkt klicken, Doppelklick beendet die Linie"
        } else {
            "Startpunkt klicken"
        }
    }

    fn geometry_kind(&self) -> GeometryKind {
        GeometryKind::LineString
    }

    fn max_points(&self) -> Option<usize> {
        self.progress.max_points
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line_has_two_points() {
        let tool = LineMeasureTool::default();
        assert_eq!(tool.max_points(), Some(2));
        assert_eq!(tool.geometry_kind(), GeometryKind::LineString);
    }

    #[test]
    fn test_zero_means_unbounded() {
        let mut tool = LineMeasureTool::new(0);
        assert_eq!(tool.max_points(), None);
        assert_eq!(tool.on_vertex(1), GestureSignal::Started);
        assert_eq!(tool.on_vertex(5), GestureSignal::Continue);
        assert_eq!(tool.on_finish_request(5), GestureSignal::Completed);
        assert!(!tool.is_drawing());
    }

    #[test]
    fn test_single_point_limit_is_raised_to_two() {
        let tool = LineMeasureTool::new(1);
        assert_eq!(tool.max_points(), Some(2));
    }

    #[test]
    fn test_reset_stops_gesture() {
        let mut tool = LineMeasureTool::default();
        tool.on_vertex(1);
        assert!(tool.is_drawing());
        tool.reset();
        assert!(!tool.is_drawing());
        assert_eq!(tool.status_text(), "Startpunkt klicken");
    }
}

//! Gemeinsamer Gesten-Fortschritt für alle Gesten-Tools.

use super::GestureSignal;

/// Fortschritt einer Geste: läuft sie, und ab wann gilt sie als beendet?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GestureProgress {
    /// Geste läuft (mindestens ein Punkt gesetzt, noch nicht beendet)
    pub drawing: bool,
    /// Maximale Punktanzahl (None = unbegrenzt)
    pub max_points: Option<usize>,
    /// Mindestanzahl vollständiger Punkte für ein manuelles Beenden
    pub min_points_to_finish: usize,
}

impl GestureProgress {
    /// Erstellt einen ruhenden Fortschritt.
    pub fn new(max_points: Option<usize>, min_points_to_finish: usize) -> Self {
        Self {
            drawing: false,
            max_points,
            min_points_to_finish,
        }
    }

    /// Verarbeitet einen übernommenen Punkt.
    pub fn vertex(&mut self, complete_points: usize) -> GestureSignal {
        let started = !self.drawing;
        self.drawing = true;

        if self.max_points.is_some_and(|max| complete_points >= max) {
            self.drawing = false;
            return GestureSignal::Completed;
        }
        if started {
            GestureSignal::Started
        } else {
            GestureSignal::Continue
        }
    }

    /// Verarbeitet eine Beenden-Anfrage.
    pub fn finish(&mut self, complete_points: usize) -> GestureSignal {
        if self.drawing && complete_points >= self.min_points_to_finish {
            self.drawing = false;
            GestureSignal::Completed
        } else {
            GestureSignal::Continue
        }
    }

    /// Zurück in den Ruhezustand.
    pub fn reset(&mut self) {
        self.drawing = false;
    }
}

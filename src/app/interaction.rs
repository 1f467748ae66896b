//! Interaktionsmodus: welches Gesten-Tool auf der Karte montiert ist und
//! ob die aktuelle Geste abgeschlossen wurde.

use super::geometry_sync::GeometrySynchronizer;
use super::map_view::MapView;
use super::tools::{create_tool, ToolKind};
use crate::core::{FeatureStyle, GeometryKind, PointSequenceStore, VectorSurface};
use crate::shared::EditorOptions;

/// Aktiver Interaktionsmodus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Kein Tool montiert (Startzustand)
    #[default]
    Idle,
    /// Distanz-/Winkelmessung entlang einer Linie
    LineMeasurement,
    /// Freies Zeichnen einer Fläche
    FreeDraw,
}

impl InteractionMode {
    /// Tool, das in diesem Modus montiert ist.
    pub fn tool_kind(self) -> Option<ToolKind> {
        match self {
            InteractionMode::Idle => None,
            InteractionMode::LineMeasurement => Some(ToolKind::LineMeasure),
            InteractionMode::FreeDraw => Some(ToolKind::FreeDraw),
        }
    }

    /// Geometrie-Art, die in diesem Modus gezeichnet wird.
    pub fn geometry_kind(self) -> GeometryKind {
        match self {
            InteractionMode::FreeDraw => GeometryKind::Polygon,
            InteractionMode::Idle | InteractionMode::LineMeasurement => GeometryKind::LineString,
        }
    }

    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Idle => "Inaktiv",
            InteractionMode::LineMeasurement => "Linie messen",
            InteractionMode::FreeDraw => "Freihand",
        }
    }

    /// Transition-Tabelle: was beim Wechsel von `self` nach `target` passiert.
    ///
    /// Jeder Wechsel (auch in denselben Modus) leert die Sequenz; ein
    /// montiertes Tool wird immer vor dem neuen demontiert.
    pub fn transition(self, target: InteractionMode) -> ModeTransition {
        use InteractionMode::{FreeDraw, Idle, LineMeasurement};

        let (unmount, mount) = match (self, target) {
            (Idle, Idle) => (false, None),
            (Idle, LineMeasurement) => (false, Some(ToolKind::LineMeasure)),
            (Idle, FreeDraw) => (false, Some(ToolKind::FreeDraw)),
            (LineMeasurement | FreeDraw, Idle) => (true, None),
            (LineMeasurement | FreeDraw, LineMeasurement) => (true, Some(ToolKind::LineMeasure)),
            (LineMeasurement | FreeDraw, FreeDraw) => (true, Some(ToolKind::FreeDraw)),
        };

        ModeTransition {
            from: self,
            to: target,
            unmount,
            mount,
        }
    }
}

/// Ergebnis eines Tabellen-Lookups für einen Moduswechsel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    /// Ausgangsmodus
    pub from: InteractionMode,
    /// Zielmodus
    pub to: InteractionMode,
    /// Muss das aktuelle Tool demontiert werden?
    pub unmount: bool,
    /// Neu zu montierendes Tool
    pub mount: Option<ToolKind>,
}

/// Verwaltet Modus und Gesten-Abschluss.
#[derive(Debug, Clone, Default)]
pub struct InteractionModeController {
    mode: InteractionMode,
    gesture_complete: bool,
}

impl InteractionModeController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Wurde die aktuelle Geste abgeschlossen?
    pub fn is_gesture_complete(&self) -> bool {
        self.gesture_complete
    }

    /// Markiert die Sequenz als abgeschlossen ("draw end").
    pub fn mark_complete(&mut self) {
        self.gesture_complete = true;
    }

    /// Beginnt eine neue Geste (hebt den Abschluss auf).
    pub fn begin_gesture(&mut self) {
        self.gesture_complete = false;
    }

    /// Wechselt den Modus: Sequenz und Geometrie leeren, altes Tool
    /// demontieren, neues Tool montieren und Listener registrieren.
    pub fn set_mode<S: VectorSurface>(
        &mut self,
        target: InteractionMode,
        map: &mut MapView,
        store: &mut PointSequenceStore,
        geometry: &mut GeometrySynchronizer<S>,
        options: &EditorOptions,
    ) -> anyhow::Result<ModeTransition> {
        let transition = self.mode.transition(target);

        store.reset();
        geometry.clear();
        geometry.set_kind(target.geometry_kind());
        geometry.set_style(FeatureStyle::Drawing);

        if transition.unmount {
            map.unregister_listeners();
            map.unmount();
        }

        if let Some(kind) = transition.mount {
            map.mount(create_tool(kind, options))?;
            map.register_listeners();
        }

        self.mode = target;
        self.gesture_complete = false;

        log::info!(
            "Modus gewechselt: {} → {}",
            transition.from.label(),
            transition.to.label()
        );
        Ok(transition)
    }
}

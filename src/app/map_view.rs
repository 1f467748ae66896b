//! Langlebige Karten-Ressource: Kamera, Viewport und der eine Tool-Slot.
//!
//! Wird einmal erzeugt und in die Komponenten gereicht, die sie brauchen.
//! Tools werden explizit montiert und demontiert.

use super::tools::GestureTool;
use crate::core::Camera2D;
use anyhow::bail;

/// Registrierte Karten-Listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapListeners {
    /// Klick-Listener (MapClickDispatcher)
    pub click: bool,
    /// Gesten-Listener (Start/Ende-Signale des Tools)
    pub gesture: bool,
}

/// Karten-/View-Zustand mit höchstens einem montierten Gesten-Tool.
pub struct MapView {
    /// Kamera (Pan/Zoom) in projizierten Metern
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    tool: Option<Box<dyn GestureTool>>,
    listeners: MapListeners,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView {
    /// Erstellt eine Karte ohne montiertes Tool.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            tool: None,
            listeners: MapListeners::default(),
        }
    }

    /// Montiert ein Tool. Schlägt fehl, wenn bereits eines montiert ist.
    pub fn mount(&mut self, tool: Box<dyn GestureTool>) -> anyhow::Result<()> {
        if let Some(existing) = &self.tool {
            bail!(
                "Tool '{}' kann nicht montiert werden: '{}' ist noch aktiv",
                tool.name(),
                existing.name()
            );
        }
        log::debug!("Tool montiert: {}", tool.name());
        self.tool = Some(tool);
        Ok(())
    }

    /// Demontiert das aktuelle Tool und bricht eine laufende Geste ab.
    pub fn unmount(&mut self) -> Option<Box<dyn GestureTool>> {
        let mut tool = self.tool.take()?;
        tool.reset();
        log::debug!("Tool demontiert: {}", tool.name());
        Some(tool)
    }

    /// Registriert Klick- und Gesten-Listener.
    pub fn register_listeners(&mut self) {
        self.listeners = MapListeners {
            click: true,
            gesture: true,
        };
    }

    /// Entfernt alle Listener.
    pub fn unregister_listeners(&mut self) {
        self.listeners = MapListeners::default();
    }

    /// Aktuell registrierte Listener.
    pub fn listeners(&self) -> MapListeners {
        self.listeners
    }

    /// Nimmt die Karte Klicks an? (Listener registriert und Tool montiert)
    pub fn accepts_clicks(&self) -> bool {
        self.listeners.click && self.tool.is_some()
    }

    /// Referenz auf das montierte Tool.
    pub fn tool(&self) -> Option<&dyn GestureTool> {
        self.tool.as_deref()
    }

    /// Mutable Referenz auf das montierte Tool.
    pub fn tool_mut(&mut self) -> Option<&mut (dyn GestureTool + 'static)> {
        self.tool.as_deref_mut()
    }

    /// Anzahl montierter Tools (0 oder 1).
    pub fn mounted_tool_count(&self) -> usize {
        usize::from(self.tool.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::{FreeDrawTool, LineMeasureTool};

    #[test]
    fn test_second_mount_is_rejected() {
        let mut map = MapView::new();
        map.mount(Box::new(LineMeasureTool::default()))
            .expect("erstes Tool montierbar");
        let err = map.mount(Box::new(FreeDrawTool::default()));
        assert!(err.is_err());
        assert_eq!(map.mounted_tool_count(), 1);
    }

    #[test]
    fn test_unmount_resets_running_gesture() {
        let mut map = MapView::new();
        map.mount(Box::new(LineMeasureTool::default())).unwrap();
        if let Some(tool) = map.tool_mut() {
            tool.on_vertex(1);
        }
        let tool = map.unmount().expect("Tool war montiert");
        assert!(!tool.is_drawing());
        assert!(map.tool().is_none());
    }

    #[test]
    fn test_clicks_need_tool_and_listener() {
        let mut map = MapView::new();
        map.register_listeners();
        assert!(!map.accepts_clicks());
        map.mount(Box::new(LineMeasureTool::default())).unwrap();
        assert!(map.accepts_clicks());
        map.unregister_listeners();
        assert!(!map.accepts_clicks());
    }
}

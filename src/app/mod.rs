//! Application-Layer: Controller, State, Events und Mess-Komponenten.

pub mod click_dispatcher;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod geometry_sync;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod map_view;
pub mod metrics;
pub mod render_scene;
/// Application State
///
/// Besitzt Punktsequenz, Geometrie, Modus, Karte und Optionen.
pub mod state;
pub mod tools;

pub use crate::core::Camera2D;
pub use click_dispatcher::{ClickOutcome, MapClickDispatcher};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use geometry_sync::GeometrySynchronizer;
pub use interaction::{InteractionMode, InteractionModeController, ModeTransition};
pub use map_view::MapView;
pub use metrics::{summarize, MeasurementRow, MeasurementSummary};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CoordinateDraft, UiState};

//! GeoMeasure Editor Library.
//! Mess-Zustandsmaschine als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ClickOutcome, GeometrySynchronizer,
    InteractionMode, InteractionModeController, MapClickDispatcher, MapView, UiState,
};
pub use core::{
    AngleUnit, Axis, Camera2D, DistanceUnit, GeoPoint, PointSequenceStore, UnitPreference,
    VectorLayer, VectorSurface,
};
pub use shared::{EditorOptions, RenderScene};

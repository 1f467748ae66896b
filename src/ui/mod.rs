//! UI-Komponenten: Toolbar, Mess-Panel, Status-Bar, Karten-Painter und Input-Handling.

pub mod input;
mod keyboard;
/// Zeichnet Gitter und Messgeometrie aus der RenderScene.
pub mod map_painter;
pub mod panel;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use map_painter::paint_map;
pub use panel::render_measurement_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

//! Viewport-Input-Handling: Maus-Events, Pan, Scroll → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, Camera2D, InteractionMode};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
struct ViewportContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
    viewport_size: [f32; 2],
    camera: &'a Camera2D,
    options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Klicks, Pan, Scroll und Tastatur.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &EditorOptions,
        mode: InteractionMode,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = Vec::new();

        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        events.extend(keyboard::collect_keyboard_intents(ui, mode));

        if mode.tool_kind().is_some() {
            handle_clicks(&ctx, &mut events);
        }
        handle_pointer_delta(&ctx, &mut events);
        handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

// ── Klick-Events ────────────────────────────────────────────

fn handle_clicks(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
    // Doppelklick zuerst prüfen: im selben Frame meldet egui auch `clicked`.
    if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::MapDoubleClicked {
                projected: screen_pos_to_world(pointer_pos, ctx),
            });
        }
    } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::MapClicked {
                projected: screen_pos_to_world(pointer_pos, ctx),
            });
        }
    }
}

// ── Pointer-Delta (Pan) ─────────────────────────────────────

fn handle_pointer_delta(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
    let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
    if pointer_delta == egui::Vec2::ZERO {
        return;
    }

    if ctx.response.dragged_by(egui::PointerButton::Primary)
        || ctx.response.dragged_by(egui::PointerButton::Middle)
        || ctx.response.dragged_by(egui::PointerButton::Secondary)
    {
        let mpp = ctx.camera.meters_per_pixel(ctx.viewport_size[1]);
        // Screen-Y zeigt nach unten, Karten-Y nach Norden
        events.push(AppIntent::CameraPan {
            delta: DVec2::new(
                -f64::from(pointer_delta.x) * mpp,
                f64::from(pointer_delta.y) * mpp,
            ),
        });
    }
}

// ── Scroll-Zoom (auf Mausposition) ──────────────────────────

fn handle_scroll_zoom(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
    if !ctx.response.hovered() {
        return;
    }
    let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }

    let step = ctx.options.camera_scroll_zoom_step;
    let factor = if scroll > 0.0 { step } else { 1.0 / step };
    let focus = ctx
        .response
        .hover_pos()
        .map(|pos| screen_pos_to_world(pos, ctx));
    events.push(AppIntent::CameraZoom { factor, focus });
}

fn screen_pos_to_world(pointer_pos: egui::Pos2, ctx: &ViewportContext) -> DVec2 {
    let local = pointer_pos - ctx.response.rect.min;
    ctx.camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(ctx.viewport_size[0], ctx.viewport_size[1]),
    )
}

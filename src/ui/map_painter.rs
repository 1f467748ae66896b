//! Zeichnet die Karte: Hintergrund, Längen-/Breitengitter und die Messgeometrie.
//!
//! Konsumiert ausschließlich die `RenderScene`; kein Zugriff auf den AppState.

use crate::core::projection::{from_lon_lat, to_lon_lat, MERCATOR_HALF_EXTENT_M, MERCATOR_MAX_LAT};
use crate::core::{Camera2D, FeatureStyle, GeometryKind};
use crate::shared::RenderScene;
use glam::DVec2;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(226, 232, 238);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(196, 204, 214);
const GRID_LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 130, 140);

/// Kandidaten für den Gitterabstand in Grad, grob nach fein.
const GRID_STEPS_DEG: [f64; 10] = [30.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.1, 0.05, 0.01, 0.005];
/// Mindestabstand zweier Gitterlinien auf dem Bildschirm.
const MIN_GRID_SPACING_PX: f32 = 80.0;
const MAX_GRID_LINES: usize = 200;

/// Zeichnet eine komplette Szene in `rect`.
pub fn paint_map(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    paint_graticule(painter, rect, &scene.camera);
    paint_geometry(painter, rect, scene);
}

fn to_screen(rect: egui::Rect, camera: &Camera2D, lon_lat: DVec2) -> egui::Pos2 {
    let size = glam::Vec2::new(rect.width(), rect.height());
    let p = camera.world_to_screen(from_lon_lat(lon_lat), size);
    rect.min + egui::vec2(p.x, p.y)
}

// ── Gitter ──────────────────────────────────────────────────

/// Wählt den gröbsten Gitterabstand, der noch mindestens
/// `MIN_GRID_SPACING_PX` Pixel auseinander liegt.
pub(crate) fn grid_step_deg(camera: &Camera2D, viewport_height: f32) -> f64 {
    let mpp = camera.meters_per_pixel(viewport_height);
    let meters_per_degree = MERCATOR_HALF_EXTENT_M / 180.0;
    GRID_STEPS_DEG
        .iter()
        .rev()
        .copied()
        .find(|step| step * meters_per_degree / mpp >= f64::from(MIN_GRID_SPACING_PX))
        .unwrap_or(GRID_STEPS_DEG[0])
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, camera: &Camera2D) {
    let size = glam::Vec2::new(rect.width(), rect.height());
    let top_left = camera.screen_to_world(glam::Vec2::ZERO, size);
    let bottom_right = camera.screen_to_world(size, size);

    let half = MERCATOR_HALF_EXTENT_M;
    let x_range = (top_left.x.max(-half), bottom_right.x.min(half));
    let y_range = (bottom_right.y.max(-half), top_left.y.min(half));
    if x_range.0 >= x_range.1 || y_range.0 >= y_range.1 {
        return;
    }

    // Ohne Umbruch rechnen: die Gitterlinien liegen in [-180, 180]
    let lon_min = (x_range.0 / half) * 180.0;
    let lon_max = (x_range.1 / half) * 180.0;
    let lat_of = |y: f64| to_lon_lat(DVec2::new(0.0, y)).y;
    let lat_min = lat_of(y_range.0).max(-MERCATOR_MAX_LAT);
    let lat_max = lat_of(y_range.1).min(MERCATOR_MAX_LAT);

    let step = grid_step_deg(camera, rect.height());
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);
    let font = egui::FontId::proportional(11.0);

    for lon in grid_values(lon_min, lon_max, step) {
        let a = to_screen(rect, camera, DVec2::new(lon, lat_min));
        let b = to_screen(rect, camera, DVec2::new(lon, lat_max));
        painter.line_segment([a, b], stroke);
        painter.text(
            egui::pos2(a.x + 3.0, rect.bottom() - 14.0),
            egui::Align2::LEFT_TOP,
            format_degrees(lon, step),
            font.clone(),
            GRID_LABEL_COLOR,
        );
    }

    for lat in grid_values(lat_min, lat_max, step) {
        let a = to_screen(rect, camera, DVec2::new(lon_min, lat));
        let b = to_screen(rect, camera, DVec2::new(lon_max, lat));
        painter.line_segment([a, b], stroke);
        painter.text(
            egui::pos2(rect.left() + 3.0, a.y - 13.0),
            egui::Align2::LEFT_TOP,
            format_degrees(lat, step),
            font.clone(),
            GRID_LABEL_COLOR,
        );
    }
}

/// Vielfache von `step` in `[min, max]`, begrenzt auf `MAX_GRID_LINES`.
pub(crate) fn grid_values(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .take(MAX_GRID_LINES)
        .map(move |i| i as f64 * step)
}

fn format_degrees(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else {
        3
    };
    format!("{value:.decimals$}°")
}

// ── Messgeometrie ───────────────────────────────────────────

fn paint_geometry(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let Some(geometry) = scene.geometry.as_ref() else {
        return;
    };
    let options = &scene.options;

    let points: Vec<egui::Pos2> = geometry
        .vertices
        .iter()
        .map(|v| to_screen(rect, &scene.camera, *v))
        // NaN-Eingaben bleiben in der Geometrie, sind aber nicht zeichenbar
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();

    let line_color = match geometry.style {
        FeatureStyle::Drawing => color32(options.line_color_drawing),
        FeatureStyle::Finished => color32(options.line_color_finished),
    };
    let stroke = egui::Stroke::new(options.line_width_px, line_color);

    let mut outline = points.clone();
    if geometry.kind == GeometryKind::Polygon && points.len() >= 3 {
        // Konkave Flächen kann egui nicht füllen; dann nur die Kontur
        if is_convex(&points) {
            painter.add(egui::Shape::convex_polygon(
                points.clone(),
                color32(options.fill_color),
                egui::Stroke::NONE,
            ));
        }
        outline.push(points[0]);
    }

    if outline.len() >= 2 {
        match geometry.style {
            FeatureStyle::Drawing => {
                painter.extend(egui::Shape::dashed_line(
                    &outline,
                    stroke,
                    options.dash_length_px,
                    options.dash_length_px,
                ));
            }
            FeatureStyle::Finished => {
                painter.add(egui::Shape::line(outline, stroke));
            }
        }
    }

    for p in &points {
        painter.circle_filled(*p, options.vertex_radius_px, color32(options.fill_color));
        painter.circle_stroke(*p, options.vertex_radius_px, stroke);
    }
}

/// Prüft, ob ein geschlossenes Polygon konvex ist (alle Kreuzprodukte gleich gerichtet).
pub(crate) fn is_convex(points: &[egui::Pos2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f32;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cross = (b - a).x * (c - b).y - (b - a).y * (c - b).x;
        if cross.abs() <= f32::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_step_gets_finer_when_zooming_in() {
        let mut camera = Camera2D::new();
        let coarse = grid_step_deg(&camera, 720.0);
        camera.zoom = 1000.0;
        let fine = grid_step_deg(&camera, 720.0);
        assert!(fine < coarse);
    }

    #[test]
    fn test_grid_values_are_multiples_in_range() {
        let values: Vec<f64> = grid_values(-12.0, 21.0, 10.0).collect();
        assert_eq!(values, vec![-10.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_convexity() {
        let square = [
            egui::pos2(0.0, 0.0),
            egui::pos2(10.0, 0.0),
            egui::pos2(10.0, 10.0),
            egui::pos2(0.0, 10.0),
        ];
        assert!(is_convex(&square));

        let arrow = [
            egui::pos2(0.0, 0.0),
            egui::pos2(10.0, 5.0),
            egui::pos2(0.0, 10.0),
            egui::pos2(3.0, 5.0),
        ];
        assert!(!is_convex(&arrow));
    }
}

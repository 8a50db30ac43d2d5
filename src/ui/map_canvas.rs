//! Karten-Canvas: zeichnet Marker, Route und Fahrzeug, sammelt Input.
//!
//! Gezeichnet wird direkt mit dem egui-Painter; es werden keine Kacheln
//! geladen, die Karte zeigt ein neutrales Mercator-Quadrat mit optionalem
//! Gradnetz.

use crate::app::{build_map_scene, AppIntent, AppState};
use crate::core::PointRole;
use crate::map::MapSurface;
use crate::shared::MapScene;

use super::input::InputState;
use super::keyboard;

/// Hintergrundfarbe der Kartenfläche.
const CANVAS_FILL: egui::Color32 = egui::Color32::from_rgb(225, 233, 240);
/// Farbe der Gradnetz-Linien.
const GRATICULE_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 210, 220);

/// Rendert die Karte in den verfügbaren Bereich und gibt AppIntents zurück.
pub fn render_map_canvas(
    ui: &mut egui::Ui,
    state: &AppState,
    input: &mut InputState,
) -> Vec<AppIntent> {
    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click_and_drag());
    let viewport_size = [rect.width(), rect.height()];
    let viewport = glam::DVec2::new(rect.width() as f64, rect.height() as f64);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, CANVAS_FILL);

    let scene = build_map_scene(state);
    let map = state.view.map.as_ref();

    if scene.options.show_grid {
        draw_graticule(&painter, rect, map, viewport);
    }
    draw_route(&painter, rect, map, viewport, &scene);
    draw_markers(&painter, rect, map, viewport, &scene);
    draw_vehicle(&painter, rect, map, viewport, &scene);

    let mut events =
        input.collect_canvas_events(ui, &response, viewport_size, map, &state.options);
    events.extend(keyboard::collect_keyboard_intents(
        ui,
        state.booking.role_selection.awaiting(),
    ));
    events
}

/// Viewport-lokale Projektionskoordinate → absolute Bildschirmposition.
fn to_screen(rect: egui::Rect, p: glam::DVec2) -> egui::Pos2 {
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Gradnetz alle 10° in Breite und Länge.
fn draw_graticule(
    painter: &egui::Painter,
    rect: egui::Rect,
    map: &dyn MapSurface,
    viewport: glam::DVec2,
) {
    let stroke = egui::Stroke::new(0.5, GRATICULE_COLOR);

    for lat in (-80..=80).step_by(10) {
        let p = map.project(
            crate::core::Coordinates {
                lat: lat as f64,
                lng: 0.0,
            },
            viewport,
        );
        let y = rect.min.y + p.y as f32;
        if y >= rect.min.y && y <= rect.max.y {
            painter.hline(rect.x_range(), y, stroke);
        }
    }

    for lng in (-180..=180).step_by(10) {
        let p = map.project(
            crate::core::Coordinates {
                lat: 0.0,
                lng: lng as f64,
            },
            viewport,
        );
        let x = rect.min.x + p.x as f32;
        if x >= rect.min.x && x <= rect.max.x {
            painter.vline(x, rect.y_range(), stroke);
        }
    }
}

/// Gestrichelte Luftlinie zwischen Abhol- und Lieferort.
fn draw_route(
    painter: &egui::Painter,
    rect: egui::Rect,
    map: &dyn MapSurface,
    viewport: glam::DVec2,
    scene: &MapScene,
) {
    if let Some((a, b)) = scene.route {
        let pa = to_screen(rect, map.project(a, viewport));
        let pb = to_screen(rect, map.project(b, viewport));
        let stroke = egui::Stroke::new(3.0, color32(scene.options.route_color));
        painter.extend(egui::Shape::dashed_line(&[pa, pb], stroke, 10.0, 6.0));
    }
}

/// Orts-Marker als gefüllte Kreise mit Beschriftung.
fn draw_markers(
    painter: &egui::Painter,
    rect: egui::Rect,
    map: &dyn MapSurface,
    viewport: glam::DVec2,
    scene: &MapScene,
) {
    let radius = scene.options.marker_radius_px;

    for marker in &scene.markers {
        let pos = to_screen(rect, map.project(marker.coords, viewport));
        let fill = match marker.role {
            PointRole::Pickup => color32(scene.options.marker_color_pickup),
            PointRole::Delivery => color32(scene.options.marker_color_delivery),
        };

        painter.circle_filled(pos, radius, fill);
        painter.circle_stroke(pos, radius, egui::Stroke::new(2.0, egui::Color32::WHITE));
        painter.text(
            pos + egui::vec2(0.0, -radius - 4.0),
            egui::Align2::CENTER_BOTTOM,
            &marker.label,
            egui::FontId::proportional(12.0),
            egui::Color32::DARK_GRAY,
        );
    }
}

/// Fahrzeugposition auf der Tracking-Seite.
fn draw_vehicle(
    painter: &egui::Painter,
    rect: egui::Rect,
    map: &dyn MapSurface,
    viewport: glam::DVec2,
    scene: &MapScene,
) {
    if let Some(v) = scene.vehicle {
        let pos = to_screen(rect, map.project(v, viewport));
        let radius = scene.options.marker_radius_px * 0.8;
        painter.circle_filled(pos, radius, color32(scene.options.vehicle_color));
        painter.circle_stroke(pos, radius, egui::Stroke::new(2.0, egui::Color32::WHITE));
    }
}

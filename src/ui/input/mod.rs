//! Karten-Input-Handling: Maus-Events und Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick auf die Karte (Ort setzen)
//! - `pointer_delta` — Pan-Deltas während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition

mod clicks;
mod pointer_delta;
mod zoom;

use crate::app::AppIntent;
use crate::core::Coordinates;
use crate::map::MapSurface;
use crate::shared::PlannerOptions;

/// Bündelt die gemeinsamen Parameter für Karten-Event-Verarbeitung.
pub(crate) struct CanvasContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub map: &'a dyn MapSurface,
    pub options: &'a PlannerOptions,
}

/// Verwaltet den Input-Zustand für die Karte (Drag, Scroll).
#[derive(Default)]
pub struct InputState {
    /// Gesamte Drag-Distanz seit Drag-Beginn; unterscheidet Klick von Pan.
    drag_distance: f32,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Karten-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus- und
    /// Scroll-Interaktionen auf der Karte.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        map: &dyn MapSurface,
        options: &PlannerOptions,
    ) -> Vec<AppIntent> {
        let ctx = CanvasContext {
            ui,
            response,
            viewport_size,
            map,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.drag_distance = 0.0;
        }

        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in eine Geo-Koordinate um.
pub(crate) fn screen_pos_to_coords(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    map: &dyn MapSurface,
) -> Coordinates {
    let local = pointer_pos - response.rect.min;
    map.unproject(
        glam::DVec2::new(local.x as f64, local.y as f64),
        glam::DVec2::new(viewport_size[0] as f64, viewport_size[1] as f64),
    )
}

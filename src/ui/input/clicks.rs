//! Klick-Events: Kartenklick setzt einen Ortspunkt.

use super::{screen_pos_to_coords, CanvasContext, InputState};
use crate::app::AppIntent;

/// Ab dieser Drag-Distanz (Pixel) zählt ein Loslassen nicht mehr als Klick.
const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0;

impl InputState {
    /// Verarbeitet Klick-Events auf der Karte.
    pub(crate) fn handle_clicks(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        if self.drag_distance > CLICK_DRAG_TOLERANCE_PX {
            return;
        }

        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            let position =
                screen_pos_to_coords(pointer_pos, ctx.response, ctx.viewport_size, ctx.map);
            events.push(AppIntent::MapClicked { position });
        }
    }
}

//! Pointer-Delta-Verarbeitung: Karten-Pan per Drag.

use super::{CanvasContext, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für das Karten-Pan.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &CanvasContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let dragging = ctx.response.dragged_by(egui::PointerButton::Primary)
            || ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary);
        if !dragging {
            return;
        }

        self.drag_distance += pointer_delta.length();

        // Maus nach rechts → Karte folgt der Maus, Zentrum wandert nach Westen
        events.push(AppIntent::CameraPan {
            delta_px: glam::DVec2::new(-pointer_delta.x as f64, -pointer_delta.y as f64),
        });
    }
}

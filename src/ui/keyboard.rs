//! Keyboard-Shortcuts für die Karte.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::PointRole;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    armed_role: Option<PointRole>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_plus, key_minus, key_a, key_l, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::L),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }

    // A/L schalten die Rollen scharf (Abholort / Lieferort).
    // Nicht während ein Textfeld den Fokus hat, sonst tippt man Shortcuts.
    let text_field_focused = ui.ctx().memory(|m| m.focused().is_some());
    if text_field_focused {
        return events;
    }

    if key_a && !modifiers.any() {
        events.push(AppIntent::RoleSelected {
            role: PointRole::Pickup,
        });
    }
    if key_l && !modifiers.any() {
        events.push(AppIntent::RoleSelected {
            role: PointRole::Delivery,
        });
    }

    // Escape löst die scharfgeschaltete Rolle wieder (Toggle derselben Rolle)
    if key_escape {
        if let Some(role) = armed_role {
            events.push(AppIntent::RoleSelected { role });
        }
    }

    events
}

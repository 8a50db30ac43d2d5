//! Ortsauswahl-Steuerung: Rollen-Buttons, Adressfelder, erweiterte Einstellungen.

use crate::app::{AppIntent, AppState};
use crate::core::PointRole;

/// Rendert die Ortsauswahl-Steuerung (Schritt "Orte & Zeit" des Assistenten).
pub fn render_booking_controls(ui: &mut egui::Ui, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.label("Klicken Sie auf die Karte, um Abhol- und Lieferort zu setzen.");
    ui.add_space(4.0);

    // Rollen-Buttons: scharfgeschaltete Rolle ist hervorgehoben
    ui.horizontal(|ui| {
        for role in [PointRole::Pickup, PointRole::Delivery] {
            let armed = state.booking.role_selection.awaiting() == Some(role);
            if ui.selectable_label(armed, role.display_name()).clicked() {
                events.push(AppIntent::RoleSelected { role });
            }
        }
    });

    ui.add_space(4.0);
    render_address_row(ui, state, PointRole::Pickup, &mut events);
    render_address_row(ui, state, PointRole::Delivery, &mut events);

    ui.add_space(4.0);
    match (
        state.booking.draft.distance_km(),
        state.booking.draft.price_estimate(),
    ) {
        (Some(km), Some(price)) => {
            ui.label(format!("Luftlinie: {:.2} km", km));
            ui.label(
                egui::RichText::new(format!("Preisvorschlag: {:.2} €", price)).strong(),
            );
        }
        _ => {
            ui.label("Beide Orte setzen, um Distanz und Preis zu sehen.");
        }
    }

    ui.add_space(4.0);
    ui.collapsing("Erweiterte Einstellungen", |ui| {
        let mut locked = state.booking.lock_markers;
        if ui.checkbox(&mut locked, "Marker sperren").changed() {
            events.push(AppIntent::LockMarkersToggled);
        }

        if ui.button("Beide Orte löschen").clicked() {
            events.push(AppIntent::ClearPointsRequested);
        }

        if ui.button("Ansicht zurücksetzen").clicked() {
            events.push(AppIntent::ResetViewRequested);
        }
    });

    events
}

/// Adresszeile einer Rolle: Freitext plus Übernehmen in den gesetzten Punkt.
fn render_address_row(
    ui: &mut egui::Ui,
    state: &mut AppState,
    role: PointRole,
    events: &mut Vec<AppIntent>,
) {
    let coords = state.booking.draft.point(role).map(|p| p.coords);

    ui.horizontal(|ui| {
        ui.label(format!("{}:", role.display_name()));

        let input = match role {
            PointRole::Pickup => &mut state.booking.pickup_address_input,
            PointRole::Delivery => &mut state.booking.delivery_address_input,
        };
        ui.add(
            egui::TextEdit::singleline(input)
                .hint_text("Adresse (optional)")
                .desired_width(160.0),
        );

        // Adresse wird dem bereits gesetzten Punkt zugeordnet
        let can_apply = coords.is_some() && !input.trim().is_empty();
        if ui
            .add_enabled(can_apply, egui::Button::new("Übernehmen"))
            .clicked()
        {
            if let Some(c) = coords {
                events.push(AppIntent::PlacePointRequested {
                    role,
                    lat: c.lat,
                    lng: c.lng,
                    address: Some(input.trim().to_string()),
                });
            }
        }
    });

    if let Some(point) = state.booking.draft.point(role) {
        ui.label(
            egui::RichText::new(format!("  {}", point.label()))
                .small()
                .color(egui::Color32::GRAY),
        );
    }
}

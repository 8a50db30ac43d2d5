//! Buchungsassistent als Seitenpanel (vier Schritte).

use crate::app::state::{WIZARD_FIRST_STEP, WIZARD_LAST_STEP};
use crate::app::use_cases::wizard::can_advance;
use crate::app::{AppIntent, AppState, ServiceKind};

use super::booking_panel;

/// Titel der vier Assistenten-Schritte.
const STEP_TITLES: [&str; 4] = [
    "Ihre Infos",
    "Service wählen",
    "Orte & Zeit",
    "Bestätigung",
];

/// Rendert den Assistenten als linkes Seitenpanel.
pub fn render_wizard_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("wizard_panel")
        .default_width(320.0)
        .show(ctx, |ui| {
            let step = state.wizard.step;
            ui.heading(format!(
                "Schritt {} von {}: {}",
                step,
                WIZARD_LAST_STEP,
                STEP_TITLES[(step - 1) as usize]
            ));
            ui.separator();

            match step {
                1 => render_contact_step(ui, state),
                2 => render_service_step(ui, state, &mut events),
                3 => {
                    events.extend(booking_panel::render_booking_controls(ui, state));
                    ui.add_space(8.0);
                    render_schedule_inputs(ui, state);
                }
                _ => render_confirmation_step(ui, state, &mut events),
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(step > WIZARD_FIRST_STEP, egui::Button::new("Zurück"))
                    .clicked()
                {
                    events.push(AppIntent::WizardBackRequested);
                }

                let can_next = step < WIZARD_LAST_STEP && can_advance(state);
                if ui
                    .add_enabled(can_next, egui::Button::new("Weiter"))
                    .clicked()
                {
                    events.push(AppIntent::WizardNextRequested);
                }
            });
        });

    events
}

/// Schritt 1: Kontaktdaten.
fn render_contact_step(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label("Name:");
    ui.text_edit_singleline(&mut state.wizard.name);
    ui.label("E-Mail:");
    ui.text_edit_singleline(&mut state.wizard.email);
    ui.label("Telefon (optional):");
    ui.text_edit_singleline(&mut state.wizard.phone);
}

/// Schritt 2: Dienstleistung auswählen.
fn render_service_step(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    for service in [
        ServiceKind::Moving,
        ServiceKind::Cleaning,
        ServiceKind::Packing,
    ] {
        let selected = state.wizard.service == Some(service);
        if ui
            .selectable_label(selected, service.display_name())
            .clicked()
        {
            events.push(AppIntent::ServiceSelected { service });
        }
    }
}

/// Datum und Uhrzeit (Freitext, Teil von Schritt 3).
fn render_schedule_inputs(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Datum:");
        ui.add(
            egui::TextEdit::singleline(&mut state.wizard.date)
                .hint_text("TT.MM.JJJJ")
                .desired_width(100.0),
        );
        ui.label("Uhrzeit:");
        ui.add(
            egui::TextEdit::singleline(&mut state.wizard.time)
                .hint_text("HH:MM")
                .desired_width(60.0),
        );
    });
}

/// Schritt 4: Zusammenfassung und Abschluss.
fn render_confirmation_step(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    egui::Grid::new("summary_grid").num_columns(2).show(ui, |ui| {
        ui.label("Name:");
        ui.label(&state.wizard.name);
        ui.end_row();

        ui.label("Service:");
        ui.label(
            state
                .wizard
                .service
                .map(ServiceKind::display_name)
                .unwrap_or("–"),
        );
        ui.end_row();

        ui.label("Abholort:");
        ui.label(state.wizard.summary_pickup.as_deref().unwrap_or("–"));
        ui.end_row();

        ui.label("Lieferort:");
        ui.label(state.wizard.summary_delivery.as_deref().unwrap_or("–"));
        ui.end_row();

        ui.label("Termin:");
        ui.label(format!("{} {}", state.wizard.date, state.wizard.time));
        ui.end_row();

        if let (Some(km), Some(price)) = (
            state.booking.draft.distance_km(),
            state.booking.draft.price_estimate(),
        ) {
            ui.label("Luftlinie:");
            ui.label(format!("{:.2} km", km));
            ui.end_row();

            ui.label("Preis:");
            ui.label(egui::RichText::new(format!("{:.2} €", price)).strong());
            ui.end_row();
        }
    });

    ui.add_space(8.0);
    if state.wizard.confirmed {
        ui.label(
            egui::RichText::new("Ihre Buchung ist bestätigt. Vielen Dank!")
                .color(egui::Color32::LIGHT_GREEN),
        );
    } else if ui.button("Buchung abschließen").clicked() {
        events.push(AppIntent::BookingSubmitted);
    }
}

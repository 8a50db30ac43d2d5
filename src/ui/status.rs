//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Page};

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let center = state.view.map.center();
            ui.label(format!(
                "Zoom: {:.1} | Zentrum: {:.4}, {:.4}",
                state.view.map.zoom(),
                center.lat,
                center.lng
            ));

            ui.separator();

            match state.ui.page {
                Page::Booking => {
                    match (
                        state.booking.draft.distance_km(),
                        state.booking.draft.price_estimate(),
                    ) {
                        (Some(km), Some(price)) => {
                            ui.label(format!("Distanz: {:.2} km | Preis: {:.2} €", km, price));
                        }
                        _ => {
                            ui.label("Distanz: – | Preis: –");
                        }
                    }

                    if state.booking.lock_markers {
                        ui.separator();
                        ui.label(
                            egui::RichText::new("Marker gesperrt")
                                .color(egui::Color32::LIGHT_RED),
                        );
                    }

                    if let Some(role) = state.booking.role_selection.awaiting() {
                        ui.separator();
                        ui.label(format!("Nächster Klick: {}", role.display_name()));
                    }
                }
                Page::Tracking => {
                    let sim = &state.tracking.sim;
                    ui.label(format!(
                        "{} | {:.1} % | {:.0} km verbleibend",
                        sim.phase().display_name(),
                        sim.progress(),
                        sim.remaining_km()
                    ));
                }
            }

            // Statusnachricht (z.B. Buchungsbestätigung)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

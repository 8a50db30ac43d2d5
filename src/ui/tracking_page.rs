//! Sendungsverfolgung: Statuspanel neben der Karte.

use crate::app::{AppIntent, AppState};
use crate::core::tracking::format_minutes;

/// Rendert das Statuspanel der Sendungsverfolgung.
pub fn render_tracking_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let events = Vec::new();
    let sim = &state.tracking.sim;

    egui::SidePanel::left("tracking_panel")
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Ihre Lieferung");
            ui.separator();

            ui.label(
                egui::RichText::new(sim.phase().display_name())
                    .strong()
                    .size(16.0),
            );
            ui.add_space(4.0);

            ui.add(
                egui::ProgressBar::new((sim.progress() / 100.0) as f32)
                    .text(format!("{:.1} %", sim.progress())),
            );

            ui.add_space(8.0);
            egui::Grid::new("tracking_grid").num_columns(2).show(ui, |ui| {
                ui.label("Verbleibende Distanz:");
                ui.label(format!("{:.0} km", sim.remaining_km()));
                ui.end_row();

                ui.label("Geschwindigkeit:");
                ui.label(format!("{} km/h", sim.speed_kmh()));
                ui.end_row();

                ui.label("Ankunft in:");
                ui.label(format_minutes(sim.eta_min()));
                ui.end_row();

                ui.label("Unterwegs seit:");
                ui.label(format_minutes(sim.elapsed_min()));
                ui.end_row();
            });

            if sim.is_complete() {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Das Fahrzeug ist angekommen.")
                        .color(egui::Color32::LIGHT_GREEN),
                );
            }
        });

    events
}

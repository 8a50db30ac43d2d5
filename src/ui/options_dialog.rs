//! Optionen-Dialog für Preise, Kamera und Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Preise ──────────────────────────────────────
            ui.collapsing("Preise", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Grundpreis (€):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.base_price_eur)
                                .range(0.0..=500.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Preis pro km (€):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.price_per_km_eur)
                                .range(0.0..=20.0)
                                .speed(0.05),
                        )
                        .changed();
                });
            });

            // ── Kamera ──────────────────────────────────────
            ui.collapsing("Kamera", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Zoom-Schritt (Menü):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.camera_zoom_step)
                                .range(1.01..=3.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Zoom-Schritt (Scroll):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                .range(1.01..=2.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Einpass-Rand (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.fit_padding_px)
                                .range(0.0..=200.0)
                                .speed(1.0),
                        )
                        .changed();
                });
            });

            // ── Darstellung ─────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Marker-Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.marker_radius_px)
                                .range(4.0..=30.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Abholort:", &mut opts.marker_color_pickup);
                changed |= color_edit(ui, "Lieferort:", &mut opts.marker_color_delivery);
                changed |= color_edit(ui, "Route:", &mut opts.route_color);
                changed |= color_edit(ui, "Fahrzeug:", &mut opts.vehicle_color);
                changed |= ui.checkbox(&mut opts.show_grid, "Gradnetz anzeigen").changed();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}

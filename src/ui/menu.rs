//! Top-Menü (File, Edit, View, Seite).

use crate::app::{AppIntent, AppState, Page};

/// Rendert die Menü-Leiste.
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Ansicht zurücksetzen").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });

            ui.separator();

            // Seitenumschaltung direkt in der Leiste
            for (page, label) in [
                (Page::Booking, "Buchung"),
                (Page::Tracking, "Sendungsverfolgung"),
            ] {
                if ui
                    .selectable_label(state.ui.page == page, label)
                    .clicked()
                {
                    events.push(AppIntent::PageSelected { page });
                }
            }
        });
    });

    events
}

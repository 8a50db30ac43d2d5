//! Umzug-Buchungsplaner.
//!
//! Desktop-Anwendung für Umzugs-, Reinigungs- und Verpackungsbuchungen:
//! Abhol- und Lieferort per Kartenklick, Luftlinien-Preis, vierstufiger
//! Assistent und simulierte Sendungsverfolgung.

use eframe::egui;
use std::time::Instant;
use umzug_buchungsplaner::core::tracking::TICK_PERIOD;
use umzug_buchungsplaner::{ui, AppController, AppIntent, AppState, Page, PlannerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Umzug-Buchungsplaner v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Umzug-Buchungsplaner"),
            ..Default::default()
        };

        eframe::run_native(
            "Umzug-Buchungsplaner",
            options,
            Box::new(|_cc| Ok(Box::new(BookingApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct BookingApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl BookingApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PlannerOptions::config_path();
        let planner_options = PlannerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(planner_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.pump_tracking_timer(ctx);
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);
        self.sync_wizard_summary();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl BookingApp {
    /// Erzeugt einen Tracking-Tick, sobald die Tick-Periode abgelaufen ist.
    fn pump_tracking_timer(&self, ctx: &egui::Context) -> Vec<AppIntent> {
        let Some(last_tick) = self.state.tracking.last_tick else {
            return Vec::new();
        };

        let elapsed = Instant::now().duration_since(last_tick);
        if elapsed >= TICK_PERIOD {
            vec![AppIntent::TrackingTicked]
        } else {
            // Aufwachen, sobald der nächste Tick fällig ist
            ctx.request_repaint_after(TICK_PERIOD - elapsed);
            Vec::new()
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        match self.state.ui.page {
            Page::Booking => events.extend(ui::render_wizard_panel(ctx, &mut self.state)),
            Page::Tracking => events.extend(ui::render_tracking_panel(ctx, &self.state)),
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(ui::render_map_canvas(ui, &self.state, &mut self.input));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Überträgt aufgelaufene Orts-Änderungsmeldungen in den Assistenten.
    fn sync_wizard_summary(&mut self) {
        umzug_buchungsplaner::app::use_cases::wizard::drain_location_notifications(&mut self.state);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}

//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Seiten & Beenden ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::SetPage { page } => handlers::view::set_page(state, page),

            // === Ortsauswahl ===
            AppCommand::SelectRole { role } => handlers::booking::select_role(state, role),
            AppCommand::PlacePoint {
                role,
                lat,
                lng,
                address,
            } => handlers::booking::place_point(state, role, lat, lng, address)?,
            AppCommand::ClearPoints => handlers::booking::clear_points(state),
            AppCommand::ToggleLockMarkers => handlers::booking::toggle_lock_markers(state),

            // === Kamera & Viewport ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }

            // === Buchungsassistent ===
            AppCommand::WizardNext => handlers::wizard::next_step(state),
            AppCommand::WizardBack => handlers::wizard::back_step(state),
            AppCommand::SetService { service } => handlers::wizard::set_service(state, service),
            AppCommand::ConfirmBooking => handlers::wizard::confirm_booking(state),

            // === Sendungsverfolgung ===
            AppCommand::StartTracking => handlers::tracking::start(state),
            AppCommand::StopTracking => handlers::tracking::stop(state),
            AppCommand::AdvanceTracking => handlers::tracking::advance(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
        }

        Ok(())
    }
}

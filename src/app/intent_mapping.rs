//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::Page;
use super::{AppCommand, AppIntent, AppState};
use crate::core::PointRole;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::PageSelected { page } => {
            if page == state.ui.page {
                return vec![];
            }
            // Seitenwechsel startet bzw. stoppt den Tracking-Timer mit.
            match page {
                Page::Tracking => vec![AppCommand::SetPage { page }, AppCommand::StartTracking],
                Page::Booking => vec![AppCommand::StopTracking, AppCommand::SetPage { page }],
            }
        }

        AppIntent::RoleSelected { role } => vec![AppCommand::SelectRole { role }],
        AppIntent::MapClicked { position } => {
            if state.booking.lock_markers {
                return vec![];
            }
            // Scharfgeschaltete Rolle gewinnt; ohne Auswahl gilt die
            // Reihenfolge Abholort → Lieferort → Abholort überschreiben.
            let role = state.booking.role_selection.awaiting().unwrap_or_else(|| {
                if state.booking.draft.pickup().is_none() {
                    PointRole::Pickup
                } else if state.booking.draft.delivery().is_none() {
                    PointRole::Delivery
                } else {
                    PointRole::Pickup
                }
            });
            vec![AppCommand::PlacePoint {
                role,
                lat: position.lat,
                lng: position.lng,
                address: None,
            }]
        }
        AppIntent::PlacePointRequested {
            role,
            lat,
            lng,
            address,
        } => vec![AppCommand::PlacePoint {
            role,
            lat,
            lng,
            address,
        }],
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearPoints],
        AppIntent::LockMarkersToggled => vec![AppCommand::ToggleLockMarkers],

        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom { factor, focus } => {
            vec![AppCommand::ZoomCamera { factor, focus }]
        }

        AppIntent::WizardNextRequested => vec![AppCommand::WizardNext],
        AppIntent::WizardBackRequested => vec![AppCommand::WizardBack],
        AppIntent::ServiceSelected { service } => vec![AppCommand::SetService { service }],
        AppIntent::BookingSubmitted => vec![AppCommand::ConfirmBooking],

        AppIntent::TrackingTicked => vec![AppCommand::AdvanceTracking],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinates;

    fn click(lat: f64, lng: f64) -> AppIntent {
        AppIntent::MapClicked {
            position: Coordinates { lat, lng },
        }
    }

    fn point(lat: f64, lng: f64) -> crate::core::GeoPoint {
        crate::core::GeoPoint::new(Coordinates { lat, lng }, None)
    }

    #[test]
    fn test_klick_bei_leerem_entwurf_setzt_abholort() {
        let state = AppState::new();
        let commands = map_intent_to_commands(&state, click(52.0, 13.0));
        match commands.as_slice() {
            [AppCommand::PlacePoint { role, .. }] => assert_eq!(*role, PointRole::Pickup),
            other => panic!("Unerwartete Commands: {:?}", other),
        }
    }

    #[test]
    fn test_klick_mit_abholort_setzt_lieferort() {
        let mut state = AppState::new();
        state.booking.draft.place(PointRole::Pickup, point(52.0, 13.0));
        let commands = map_intent_to_commands(&state, click(48.0, 11.0));
        match commands.as_slice() {
            [AppCommand::PlacePoint { role, .. }] => assert_eq!(*role, PointRole::Delivery),
            other => panic!("Unerwartete Commands: {:?}", other),
        }
    }

    #[test]
    fn test_klick_mit_beiden_orten_ueberschreibt_abholort() {
        let mut state = AppState::new();
        state.booking.draft.place(PointRole::Pickup, point(52.0, 13.0));
        state
            .booking
            .draft
            .place(PointRole::Delivery, point(48.0, 11.0));
        let commands = map_intent_to_commands(&state, click(50.0, 8.0));
        match commands.as_slice() {
            [AppCommand::PlacePoint { role, .. }] => assert_eq!(*role, PointRole::Pickup),
            other => panic!("Unerwartete Commands: {:?}", other),
        }
    }

    #[test]
    fn test_scharfgeschaltete_rolle_gewinnt_vor_fallback() {
        let mut state = AppState::new();
        state.booking.role_selection = state.booking.role_selection.toggle(PointRole::Delivery);
        let commands = map_intent_to_commands(&state, click(52.0, 13.0));
        match commands.as_slice() {
            [AppCommand::PlacePoint { role, .. }] => assert_eq!(*role, PointRole::Delivery),
            other => panic!("Unerwartete Commands: {:?}", other),
        }
    }

    #[test]
    fn test_marker_sperre_unterdrueckt_kartenklick() {
        let mut state = AppState::new();
        state.booking.lock_markers = true;
        let commands = map_intent_to_commands(&state, click(52.0, 13.0));
        assert!(commands.is_empty(), "Gesperrte Karte darf nichts auslösen");
    }

    #[test]
    fn test_seitenwechsel_zur_verfolgung_startet_timer() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::PageSelected { page: Page::Tracking });
        assert!(matches!(
            commands.as_slice(),
            [
                AppCommand::SetPage {
                    page: Page::Tracking
                },
                AppCommand::StartTracking
            ]
        ));
    }

    #[test]
    fn test_seitenwechsel_auf_gleiche_seite_ist_wirkungslos() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::PageSelected { page: Page::Booking });
        assert!(commands.is_empty());
    }
}

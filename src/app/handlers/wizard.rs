//! Handler für den Buchungsassistenten.

use crate::app::state::ServiceKind;
use crate::app::use_cases;
use crate::app::AppState;

/// Wechselt zum nächsten Assistenten-Schritt.
pub fn next_step(state: &mut AppState) {
    use_cases::wizard::next_step(state);
}

/// Wechselt zum vorigen Assistenten-Schritt.
pub fn back_step(state: &mut AppState) {
    use_cases::wizard::back_step(state);
}

/// Setzt die ausgewählte Dienstleistung.
pub fn set_service(state: &mut AppState, service: ServiceKind) {
    use_cases::wizard::set_service(state, service);
}

/// Schließt die Buchung verbindlich ab.
pub fn confirm_booking(state: &mut AppState) {
    use_cases::wizard::confirm_booking(state);
}

//! Use-Case-Funktionen für den vierstufigen Buchungsassistenten.

use crate::app::state::{ServiceKind, WIZARD_FIRST_STEP, WIZARD_LAST_STEP};
use crate::app::AppState;

/// Gibt zurück, ob der aktuelle Schritt vollständig ausgefüllt ist.
pub fn can_advance(state: &AppState) -> bool {
    match state.wizard.step {
        1 => !state.wizard.name.trim().is_empty() && !state.wizard.email.trim().is_empty(),
        2 => state.wizard.service.is_some(),
        3 => state.booking.draft.is_quotable(),
        _ => false,
    }
}

/// Wechselt zum nächsten Schritt, sofern der aktuelle vollständig ist.
pub fn next_step(state: &mut AppState) {
    if state.wizard.step >= WIZARD_LAST_STEP {
        return;
    }
    if !can_advance(state) {
        log::warn!(
            "Schritt {} unvollständig, Weiter nicht möglich",
            state.wizard.step
        );
        return;
    }
    state.wizard.step += 1;
    log::info!("Assistent: Schritt {}", state.wizard.step);
}

/// Wechselt zum vorigen Schritt (nicht unter den ersten).
pub fn back_step(state: &mut AppState) {
    if state.wizard.step > WIZARD_FIRST_STEP {
        state.wizard.step -= 1;
        log::info!("Assistent: zurück zu Schritt {}", state.wizard.step);
    }
}

/// Setzt die ausgewählte Dienstleistung.
pub fn set_service(state: &mut AppState, service: ServiceKind) {
    state.wizard.service = Some(service);
    log::info!("Dienstleistung: {}", service.display_name());
}

/// Schließt die Buchung verbindlich ab.
///
/// Setzt voraus, dass Dienstleistung und beide Orte feststehen; sonst
/// bleibt der Zustand unverändert.
pub fn confirm_booking(state: &mut AppState) {
    let price = match state.booking.draft.price_estimate() {
        Some(p) if state.wizard.service.is_some() => p,
        _ => {
            log::warn!("Buchung unvollständig, Abschluss abgelehnt");
            return;
        }
    };

    state.wizard.confirmed = true;
    state.ui.status_message = Some(format!("Buchung bestätigt! Preis: {:.2} €", price));
    log::info!("Buchung abgeschlossen, Preis {:.2} €", price);
}

/// Übernimmt aufgelaufene Orts-Änderungsmeldungen in die Zusammenfassung.
///
/// Wird einmal pro Frame aufgerufen; die Meldungen werden in
/// Commit-Reihenfolge verarbeitet, die letzte gewinnt.
pub fn drain_location_notifications(state: &mut AppState) {
    for change in state.booking.take_notifications() {
        state.wizard.summary_pickup = change.pickup.as_ref().map(|p| p.label());
        state.wizard.summary_delivery = change.delivery.as_ref().map(|p| p.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::booking;
    use crate::core::PointRole;

    fn filled_contact(state: &mut AppState) {
        state.wizard.name = "Max Mustermann".into();
        state.wizard.email = "max@example.de".into();
    }

    #[test]
    fn next_step_requires_completed_contact_data() {
        let mut state = AppState::new();

        next_step(&mut state);
        assert_eq!(state.wizard.step, 1);

        filled_contact(&mut state);
        next_step(&mut state);
        assert_eq!(state.wizard.step, 2);
    }

    #[test]
    fn step_three_requires_both_locations() {
        let mut state = AppState::new();
        filled_contact(&mut state);
        next_step(&mut state);
        set_service(&mut state, ServiceKind::Moving);
        next_step(&mut state);
        assert_eq!(state.wizard.step, 3);

        // Ohne Orte kein Übergang zur Bestätigung
        next_step(&mut state);
        assert_eq!(state.wizard.step, 3);

        booking::place_point(&mut state, PointRole::Pickup, 52.52, 13.405, None).unwrap();
        booking::place_point(&mut state, PointRole::Delivery, 48.1351, 11.582, None).unwrap();
        next_step(&mut state);
        assert_eq!(state.wizard.step, 4);
    }

    #[test]
    fn back_step_stops_at_first() {
        let mut state = AppState::new();
        back_step(&mut state);
        assert_eq!(state.wizard.step, 1);
    }

    #[test]
    fn confirm_requires_service_and_quote() {
        let mut state = AppState::new();
        confirm_booking(&mut state);
        assert!(!state.wizard.confirmed);

        set_service(&mut state, ServiceKind::Packing);
        booking::place_point(&mut state, PointRole::Pickup, 52.52, 13.405, None).unwrap();
        booking::place_point(&mut state, PointRole::Delivery, 48.1351, 11.582, None).unwrap();

        confirm_booking(&mut state);
        assert!(state.wizard.confirmed);
        assert!(state.ui.status_message.as_deref().unwrap().contains("1311.04"));
    }

    #[test]
    fn drained_notifications_fill_the_summary() {
        let mut state = AppState::new();
        booking::place_point(
            &mut state,
            PointRole::Pickup,
            52.52,
            13.405,
            Some("Hauptstraße 1, Berlin".into()),
        )
        .unwrap();
        booking::place_point(&mut state, PointRole::Delivery, 48.1351, 11.582, None).unwrap();

        drain_location_notifications(&mut state);

        assert_eq!(
            state.wizard.summary_pickup.as_deref(),
            Some("Hauptstraße 1, Berlin")
        );
        assert_eq!(state.wizard.summary_delivery.as_deref(), Some("48.13510, 11.58200"));
        assert!(state.booking.notifications.is_empty());

        // Löschen räumt auch die Zusammenfassung
        booking::clear_points(&mut state);
        drain_location_notifications(&mut state);
        assert!(state.wizard.summary_pickup.is_none());
        assert!(state.wizard.summary_delivery.is_none());
    }
}

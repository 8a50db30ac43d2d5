//! Use-Case-Funktionen für Ortsauswahl und Preisberechnung.

use crate::app::AppState;
use crate::core::{round2, Coordinates, GeoPoint, PointRole, RoleSelection};

/// Schaltet eine Rolle scharf bzw. wieder aus (Toggle).
pub fn select_role(state: &mut AppState, role: PointRole) {
    state.booking.role_selection = state.booking.role_selection.toggle(role);
    log::info!(
        "Rollenauswahl: {:?} (nach Klick auf {})",
        state.booking.role_selection,
        role.display_name()
    );
}

/// Setzt einen Ortspunkt mit Rollenzuordnung.
///
/// Validiert die Koordinaten, ersetzt den bisherigen Punkt der Rolle,
/// berechnet Distanz und Preis neu, passt die Kartenansicht an und
/// stellt eine Änderungsmeldung für den Buchungsassistenten ein.
pub fn place_point(
    state: &mut AppState,
    role: PointRole,
    lat: f64,
    lng: f64,
    address: Option<String>,
) -> anyhow::Result<()> {
    let coords = Coordinates::checked(lat, lng)?;
    state.booking.draft.place(role, GeoPoint::new(coords, address));

    // Scharfgeschaltete Rolle ist verbraucht
    if state.booking.role_selection.awaiting() == Some(role) {
        state.booking.role_selection = RoleSelection::Idle;
    }

    recompute_quote(state);
    fit_view_to_points(state);

    state
        .booking
        .notifications
        .push(state.booking.draft.location_change());

    log::info!("{} gesetzt: {}", role.display_name(), coords);
    Ok(())
}

/// Entfernt beide Orte, die abgeleiteten Werte, die Adressfelder und
/// die scharfgeschaltete Rolle.
pub fn clear_points(state: &mut AppState) {
    state.booking.draft.clear();
    state.booking.role_selection = RoleSelection::Idle;
    state.booking.pickup_address_input.clear();
    state.booking.delivery_address_input.clear();

    state
        .booking
        .notifications
        .push(state.booking.draft.location_change());

    log::info!("Beide Orte entfernt");
}

/// Schaltet die Marker-Sperre um.
pub fn toggle_lock_markers(state: &mut AppState) {
    state.booking.lock_markers = !state.booking.lock_markers;
    log::info!(
        "Marker-Sperre: {}",
        if state.booking.lock_markers {
            "aktiv"
        } else {
            "aufgehoben"
        }
    );
}

/// Berechnet Distanz und Preisvorschlag neu, sofern beide Orte gesetzt sind.
///
/// Der Preis wird aus der ungerundeten Distanz berechnet; gerundet
/// werden nur die angezeigten Endwerte.
pub fn recompute_quote(state: &mut AppState) {
    let quote = state.booking.draft.both_points().map(|(pickup, delivery)| {
        let km = state.view.map.distance_between(pickup.coords, delivery.coords) / 1000.0;
        (km, state.options.pricing().quote(km))
    });

    if let Some((km, price)) = quote {
        state.booking.draft.apply_quote(round2(km), price);
    }
}

/// Passt die Kartenansicht so an, dass beide Orte mit Rand sichtbar sind.
fn fit_view_to_points(state: &mut AppState) {
    let viewport = state.view.viewport_dvec2();
    if let Some((pickup, delivery)) = state.booking.draft.both_points() {
        state.view.map.fit_bounds(
            pickup.coords,
            delivery.coords,
            viewport,
            state.options.fit_padding_px,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn place_both_points_computes_distance_and_price() {
        let mut state = AppState::new();

        place_point(&mut state, PointRole::Pickup, 52.5200, 13.4050, None)
            .expect("Abholort muss akzeptiert werden");
        place_point(&mut state, PointRole::Delivery, 48.1351, 11.5820, None)
            .expect("Lieferort muss akzeptiert werden");

        // Berlin → München, R = 6371 km
        assert_relative_eq!(state.booking.draft.distance_km().unwrap(), 504.42);
        assert_relative_eq!(state.booking.draft.price_estimate().unwrap(), 1311.04);
    }

    #[test]
    fn invalid_coordinates_are_rejected_without_state_change() {
        let mut state = AppState::new();

        let result = place_point(&mut state, PointRole::Pickup, 91.0, 0.0, None);

        assert!(result.is_err());
        assert!(state.booking.draft.pickup().is_none());
        assert!(state.booking.notifications.is_empty());
    }

    #[test]
    fn replacing_a_point_recomputes_the_quote() {
        let mut state = AppState::new();
        place_point(&mut state, PointRole::Pickup, 52.5200, 13.4050, None).unwrap();
        place_point(&mut state, PointRole::Delivery, 48.1351, 11.5820, None).unwrap();
        let first_price = state.booking.draft.price_estimate().unwrap();

        // Abholort näher an München → günstigerer Preis
        place_point(&mut state, PointRole::Pickup, 49.0, 12.0, None).unwrap();

        let second_price = state.booking.draft.price_estimate().unwrap();
        assert!(second_price < first_price);
    }

    #[test]
    fn every_commit_pushes_a_notification() {
        let mut state = AppState::new();
        place_point(&mut state, PointRole::Pickup, 52.0, 13.0, None).unwrap();
        place_point(&mut state, PointRole::Delivery, 48.0, 11.0, None).unwrap();
        clear_points(&mut state);

        let notes = state.booking.take_notifications();
        assert_eq!(notes.len(), 3);
        assert!(notes[0].pickup.is_some() && notes[0].delivery.is_none());
        assert!(notes[1].pickup.is_some() && notes[1].delivery.is_some());
        assert!(notes[2].pickup.is_none() && notes[2].delivery.is_none());
        assert!(state.booking.notifications.is_empty());
    }

    #[test]
    fn placing_an_armed_role_disarms_the_selection() {
        let mut state = AppState::new();
        select_role(&mut state, PointRole::Delivery);
        assert_eq!(
            state.booking.role_selection.awaiting(),
            Some(PointRole::Delivery)
        );

        place_point(&mut state, PointRole::Delivery, 48.0, 11.0, None).unwrap();

        assert_eq!(state.booking.role_selection, RoleSelection::Idle);
    }

    #[test]
    fn clear_points_also_disarms_the_role_selection() {
        let mut state = AppState::new();
        select_role(&mut state, PointRole::Pickup);

        clear_points(&mut state);

        assert_eq!(state.booking.role_selection, RoleSelection::Idle);
    }

    #[test]
    fn lock_toggle_flips_state() {
        let mut state = AppState::new();
        assert!(!state.booking.lock_markers);

        toggle_lock_markers(&mut state);
        assert!(state.booking.lock_markers);

        toggle_lock_markers(&mut state);
        assert!(!state.booking.lock_markers);
    }
}

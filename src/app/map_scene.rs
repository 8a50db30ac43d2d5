//! Builder für Karten-Szenen aus dem AppState.

use crate::app::state::Page;
use crate::app::AppState;
use crate::core::{PointRole, ROUTE_END, ROUTE_START};
use crate::shared::{MapScene, SceneMarker};

/// Baut eine MapScene aus dem aktuellen AppState.
///
/// Auf der Buchungsseite stammen Marker und Route aus dem Entwurf; die
/// Tracking-Seite zeigt die Demo-Route mit Fahrzeugposition.
pub fn build(state: &AppState) -> MapScene {
    match state.ui.page {
        Page::Booking => build_booking_scene(state),
        Page::Tracking => build_tracking_scene(state),
    }
}

fn build_booking_scene(state: &AppState) -> MapScene {
    let mut markers = Vec::new();
    for role in [PointRole::Pickup, PointRole::Delivery] {
        if let Some(point) = state.booking.draft.point(role) {
            markers.push(SceneMarker {
                coords: point.coords,
                role,
                label: point.label(),
            });
        }
    }

    let route = state
        .booking
        .draft
        .both_points()
        .map(|(p, d)| (p.coords, d.coords));

    MapScene {
        markers,
        route,
        vehicle: None,
        options: state.options.clone(),
    }
}

fn build_tracking_scene(state: &AppState) -> MapScene {
    let markers = vec![
        SceneMarker {
            coords: ROUTE_START,
            role: PointRole::Pickup,
            label: "Abholort".into(),
        },
        SceneMarker {
            coords: ROUTE_END,
            role: PointRole::Delivery,
            label: "Lieferort".into(),
        },
    ];

    MapScene {
        markers,
        route: Some((ROUTE_START, ROUTE_END)),
        vehicle: Some(state.tracking.sim.vehicle_position()),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::Page;
    use crate::app::use_cases::booking;
    use crate::app::AppState;
    use crate::core::PointRole;

    #[test]
    fn booking_scene_reflects_the_draft() {
        let mut state = AppState::new();
        let scene = build(&state);
        assert!(scene.markers.is_empty());
        assert!(scene.route.is_none());

        booking::place_point(&mut state, PointRole::Pickup, 52.52, 13.405, None).unwrap();
        let scene = build(&state);
        assert_eq!(scene.markers.len(), 1);
        assert!(scene.route.is_none());

        booking::place_point(&mut state, PointRole::Delivery, 48.1351, 11.582, None).unwrap();
        let scene = build(&state);
        assert_eq!(scene.markers.len(), 2);
        assert!(scene.route.is_some());
        assert!(scene.vehicle.is_none());
    }

    #[test]
    fn tracking_scene_shows_vehicle_and_route() {
        let mut state = AppState::new();
        state.ui.page = Page::Tracking;

        let scene = build(&state);

        assert_eq!(scene.markers.len(), 2);
        assert!(scene.route.is_some());
        assert!(scene.vehicle.is_some());
    }
}

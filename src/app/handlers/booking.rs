//! Handler für Ortsauswahl und Buchungsentwurf.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointRole;

/// Schaltet eine Rolle für den nächsten Kartenklick scharf bzw. wieder aus.
pub fn select_role(state: &mut AppState, role: PointRole) {
    use_cases::booking::select_role(state, role);
}

/// Setzt einen Ortspunkt und propagiert Validierungsfehler an den Aufrufer.
pub fn place_point(
    state: &mut AppState,
    role: PointRole,
    lat: f64,
    lng: f64,
    address: Option<String>,
) -> anyhow::Result<()> {
    use_cases::booking::place_point(state, role, lat, lng, address)
}

/// Entfernt beide Orte und alle abgeleiteten Werte.
pub fn clear_points(state: &mut AppState) {
    use_cases::booking::clear_points(state);
}

/// Schaltet die Marker-Sperre um.
pub fn toggle_lock_markers(state: &mut AppState) {
    use_cases::booking::toggle_lock_markers(state);
}

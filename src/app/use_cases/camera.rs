//! Use-Case-Funktionen für die Kartensteuerung.

use crate::app::AppState;
use crate::core::Coordinates;
use crate::map::mercator::{DEFAULT_CENTER, DEFAULT_ZOOM};

/// Setzt die Karte auf die Standardansicht (Deutschland-Übersicht) zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.map.set_view(DEFAULT_CENTER, DEFAULT_ZOOM);
}

/// Zoomt die Karte stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.map.zoom_by(
        state.options.camera_zoom_step,
        None,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Karte stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.map.zoom_by(
        1.0 / state.options.camera_zoom_step,
        None,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Karte um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::DVec2) {
    state.view.map.pan_pixels(delta_px);
}

/// Zoomt auf einen optionalen geografischen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus` angegeben ist, bleibt der Punkt unter der Maus nach
/// dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: Option<Coordinates>) {
    state.view.map.zoom_by(
        factor,
        focus,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reset_view_restores_default_center_and_zoom() {
        let mut state = AppState::new();
        state
            .view
            .map
            .set_view(Coordinates { lat: 40.0, lng: 5.0 }, 12.0);

        reset_view(&mut state);

        assert_relative_eq!(state.view.map.zoom(), DEFAULT_ZOOM);
        assert_relative_eq!(state.view.map.center().lat, DEFAULT_CENTER.lat, epsilon = 1e-9);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.map.zoom();

        zoom_in(&mut state);
        assert!(state.view.map.zoom() > original);

        zoom_out(&mut state);
        assert_relative_eq!(state.view.map.zoom(), original, epsilon = 1e-9);
    }

    #[test]
    fn zoom_respects_configured_limits() {
        let mut state = AppState::new();

        for _ in 0..200 {
            zoom_in(&mut state);
        }
        assert_relative_eq!(state.view.map.zoom(), state.options.camera_zoom_max);

        for _ in 0..200 {
            zoom_out(&mut state);
        }
        assert_relative_eq!(state.view.map.zoom(), state.options.camera_zoom_min);
    }

    #[test]
    fn pan_moves_center() {
        let mut state = AppState::new();
        let before = state.view.map.center();

        pan(&mut state, glam::DVec2::new(150.0, 0.0));

        assert!(state.view.map.center().lng > before.lng);
    }
}

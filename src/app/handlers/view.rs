//! Handler für Kamera, Viewport und Seitenwechsel.

use crate::app::state::Page;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Coordinates;

/// Wechselt die aktive Seite.
pub fn set_page(state: &mut AppState, page: Page) {
    use_cases::viewport::set_page(state, page);
}

/// Setzt die Karte auf die Standardansicht zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::DVec2) {
    use_cases::camera::pan(state, delta_px);
}

/// Zoomt mit optionalem geografischen Fokuspunkt.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: Option<Coordinates>) {
    use_cases::camera::zoom_towards(state, factor, focus);
}

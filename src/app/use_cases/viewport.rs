//! Use-Case-Funktionen für Viewport und Seitenwechsel.

use crate::app::state::Page;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Wechselt die aktive Seite.
pub fn set_page(state: &mut AppState, page: Page) {
    state.ui.page = page;
    state.ui.status_message = None;
    log::info!("Seitenwechsel: {:?}", page);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport() {
        let mut state = AppState::new();
        resize(&mut state, [1280.0, 800.0]);
        assert_eq!(state.view.viewport_size, [1280.0, 800.0]);
    }

    #[test]
    fn set_page_clears_status_message() {
        let mut state = AppState::new();
        state.ui.status_message = Some("Buchung bestätigt".into());

        set_page(&mut state, Page::Tracking);

        assert_eq!(state.ui.page, Page::Tracking);
        assert!(state.ui.status_message.is_none());
    }
}

//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::PlannerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Berechnet anschließend den Preisvorschlag neu, da sich die
/// Preisparameter geändert haben können.
pub fn apply_options(state: &mut AppState, options: PlannerOptions) {
    state.options = options;
    use_cases::booking::recompute_quote(state);
    persist_options(state);
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) {
    state.options = PlannerOptions::default();
    use_cases::booking::recompute_quote(state);
    persist_options(state);
}

/// Speichert die aktuellen Optionen; Fehler werden nur geloggt,
/// damit die Anwendung ohne Schreibrechte benutzbar bleibt.
fn persist_options(state: &AppState) {
    let path = PlannerOptions::config_path();
    if let Err(e) = state.options.save_to_file(&path) {
        log::warn!("Optionen konnten nicht gespeichert werden: {}", e);
    }
}

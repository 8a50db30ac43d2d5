//! Handler für die Sendungsverfolgung.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet die Simulation und den Tick-Timer.
pub fn start(state: &mut AppState) {
    use_cases::tracking::start(state);
}

/// Hält die Simulation und den Tick-Timer an.
pub fn stop(state: &mut AppState) {
    use_cases::tracking::stop(state);
}

/// Schreibt die Simulation um einen Tick fort.
pub fn advance(state: &mut AppState) {
    use_cases::tracking::advance(state);
}

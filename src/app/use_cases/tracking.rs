//! Use-Case-Funktionen für die Sendungsverfolgung.

use std::time::Instant;

use crate::app::AppState;

/// Startet Simulation und Tick-Timer.
pub fn start(state: &mut AppState) {
    state.tracking.sim.start();
    state.tracking.last_tick = Some(Instant::now());
    log::info!("Sendungsverfolgung gestartet");
}

/// Hält Simulation und Tick-Timer an.
pub fn stop(state: &mut AppState) {
    state.tracking.sim.stop();
    state.tracking.last_tick = None;
    log::info!("Sendungsverfolgung angehalten");
}

/// Schreibt die Simulation um einen Tick fort und merkt sich den Zeitpunkt.
///
/// No-op bei angehaltener Simulation, damit ein verspäteter Tick den
/// Timer nicht wieder scharf schaltet.
pub fn advance(state: &mut AppState) {
    if !state.tracking.sim.is_running() {
        return;
    }
    state.tracking.sim.tick();
    state.tracking.last_tick = Some(Instant::now());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn start_enables_ticks_stop_disables_them() {
        let mut state = AppState::new();

        start(&mut state);
        advance(&mut state);
        assert_relative_eq!(state.tracking.sim.progress(), 0.5);

        stop(&mut state);
        assert!(state.tracking.last_tick.is_none());

        advance(&mut state);
        // Angehaltene Simulation bewegt sich nicht mehr, Timer bleibt aus
        assert_relative_eq!(state.tracking.sim.progress(), 0.5);
        assert!(state.tracking.last_tick.is_none());
    }
}

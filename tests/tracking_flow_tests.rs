use umzug_buchungsplaner::{
    AppCommand, AppController, AppIntent, AppState, Page, TrackingPhase,
};

#[test]
fn test_switching_to_tracking_page_starts_the_simulation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.tracking.sim.is_running());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PageSelected {
                page: Page::Tracking,
            },
        )
        .expect("Seitenwechsel sollte funktionieren");

    assert_eq!(state.ui.page, Page::Tracking);
    assert!(state.tracking.sim.is_running());
    assert!(
        state.tracking.last_tick.is_some(),
        "Timer sollte mit dem Start scharfgeschaltet sein"
    );

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::StartTracking => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_switching_back_to_booking_stops_the_simulation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PageSelected {
                page: Page::Tracking,
            },
        )
        .expect("Seitenwechsel sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::TrackingTicked)
        .expect("Tick sollte funktionieren");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PageSelected {
                page: Page::Booking,
            },
        )
        .expect("Rückwechsel sollte funktionieren");

    assert_eq!(state.ui.page, Page::Booking);
    assert!(!state.tracking.sim.is_running());
    assert!(state.tracking.last_tick.is_none());
    // Fortschritt bleibt erhalten, nur der Timer steht.
    assert!(state.tracking.sim.progress() > 0.0);
}

#[test]
fn test_ticks_advance_progress_in_fixed_steps() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PageSelected {
                page: Page::Tracking,
            },
        )
        .expect("Seitenwechsel sollte funktionieren");

    for _ in 0..4 {
        controller
            .handle_intent(&mut state, AppIntent::TrackingTicked)
            .expect("Tick sollte funktionieren");
    }

    assert!((state.tracking.sim.progress() - 2.0).abs() < 1e-9);
    assert_eq!(state.tracking.sim.phase(), TrackingPhase::ToPickup);
}

#[test]
fn test_progress_caps_at_one_hundred_percent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PageSelected {
                page: Page::Tracking,
            },
        )
        .expect("Seitenwechsel sollte funktionieren");

    // 250 Ticks à 0.5 % würden 125 % ergeben, gedeckelt bei 100 %.
    for _ in 0..250 {
        controller
            .handle_intent(&mut state, AppIntent::TrackingTicked)
            .expect("Tick sollte funktionieren");
    }

    assert!((state.tracking.sim.progress() - 100.0).abs() < 1e-9);
    assert!(state.tracking.sim.is_complete());
    assert_eq!(state.tracking.sim.phase(), TrackingPhase::Arriving);
    assert!(state.tracking.sim.remaining_km().abs() < 1e-6);
    assert_eq!(state.tracking.sim.eta_min(), 0);
}

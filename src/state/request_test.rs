use super::*;

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn default_is_idle() {
    let state = RequestState::default();
    assert_eq!(state.phase(), RequestPhase::Idle);
    assert!(!state.in_flight());
    assert_eq!(state.completed(), 0);
}

#[test]
fn full_round_trip_returns_to_idle() {
    let mut state = RequestState::default();
    state.begin().expect("idle");
    assert_eq!(state.phase(), RequestPhase::Sending);
    state.response_received();
    assert_eq!(state.phase(), RequestPhase::Rendering);
    state.settle();
    assert_eq!(state.phase(), RequestPhase::Idle);
    assert_eq!(state.completed(), 1);
}

#[test]
fn transport_failure_settles_straight_from_sending() {
    let mut state = RequestState::default();
    state.begin().expect("idle");
    state.settle();
    assert!(!state.in_flight());
    assert_eq!(state.completed(), 1);
}

#[test]
fn response_received_outside_sending_is_noop() {
    let mut state = RequestState::default();
    state.response_received();
    assert_eq!(state.phase(), RequestPhase::Idle);
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn second_begin_while_sending_is_refused() {
    let mut state = RequestState::default();
    state.begin().expect("idle");
    assert_eq!(state.begin(), Err(RequestError::AlreadyInFlight));
    assert_eq!(state.phase(), RequestPhase::Sending);
}

#[test]
fn second_begin_while_rendering_is_refused() {
    let mut state = RequestState::default();
    state.begin().expect("idle");
    state.response_received();
    assert_eq!(state.begin(), Err(RequestError::AlreadyInFlight));
}

#[test]
fn begin_allowed_again_after_settle() {
    let mut state = RequestState::default();
    state.begin().expect("idle");
    state.settle();
    assert!(state.begin().is_ok());
}

#[test]
fn settle_when_idle_does_not_count() {
    let mut state = RequestState::default();
    state.settle();
    assert_eq!(state.completed(), 0);
}

//! Tests for the scroll state machine.

use super::*;

const PERIOD: f64 = 1000.0;
const FRAME: f64 = 1.0 / 60.0;

fn machine() -> ScrollStateMachine {
    ScrollStateMachine::new(PERIOD).expect("valid period")
}

fn machine_at(current: f64, target: f64) -> ScrollStateMachine {
    let mut m = machine();
    m.apply_delta(current).unwrap();
    m.set_target(target).unwrap();
    m
}

// ===== Construction =====

#[test]
fn new_starts_at_zero() {
    let state = machine().state();
    assert_eq!(state.current_offset, 0.0);
    assert_eq!(state.target_offset, 0.0);
    assert_eq!(state.period, PERIOD);
}

#[test]
fn new_rejects_zero_period() {
    assert_eq!(
        ScrollStateMachine::new(0.0),
        Err(InvalidConfigurationError::NonPositivePeriod(0.0))
    );
}

#[test]
fn new_rejects_negative_period() {
    assert!(ScrollStateMachine::new(-10.0).is_err());
}

#[test]
fn new_rejects_nan_period() {
    assert!(ScrollStateMachine::new(f64::NAN).is_err());
}

#[test]
fn new_rejects_infinite_period() {
    assert!(ScrollStateMachine::new(f64::INFINITY).is_err());
}

// ===== apply_delta =====

#[test]
fn apply_delta_moves_both_offsets() {
    let mut m = machine();
    m.apply_delta(250.0).unwrap();
    let state = m.state();
    assert_eq!(state.current_offset, 250.0);
    assert_eq!(state.target_offset, 250.0);
}

#[test]
fn apply_delta_wraps_past_period() {
    let mut m = machine();
    m.apply_delta(1010.0).unwrap();
    let state = m.state();
    assert_eq!(state.current_offset, 10.0);
    assert_eq!(state.target_offset, 10.0);
}

#[test]
fn apply_delta_wraps_below_zero() {
    let mut m = machine();
    m.apply_delta(-5.0).unwrap();
    assert_eq!(m.state().current_offset, 995.0);
    assert_eq!(m.state().target_offset, 995.0);
}

#[test]
fn apply_delta_handles_many_periods_at_once() {
    let mut m = machine();
    m.apply_delta(-1_000_020.0).unwrap();
    assert_eq!(m.state().current_offset, 980.0);
}

#[test]
fn apply_delta_preserves_gap_between_current_and_target() {
    let mut m = machine_at(100.0, 300.0);
    m.apply_delta(800.0).unwrap();
    let state = m.state();
    assert_eq!(state.current_offset, 900.0);
    assert_eq!(state.target_offset, 100.0);
}

#[test]
fn apply_delta_exact_period_returns_to_start() {
    let mut m = machine_at(42.0, 42.0);
    m.apply_delta(PERIOD).unwrap();
    assert_eq!(m.state().current_offset, 42.0);
}

#[test]
fn apply_delta_rejects_nan_without_change() {
    let mut m = machine_at(100.0, 300.0);
    let before = m.state();

    let result = m.apply_delta(f64::NAN);

    assert!(matches!(
        result,
        Err(InvalidInputError::NonFinite {
            operation: "apply_delta",
            ..
        })
    ));
    assert_eq!(m.state(), before);
}

#[test]
fn apply_delta_rejects_infinity_without_change() {
    let mut m = machine_at(100.0, 300.0);
    let before = m.state();
    assert!(m.apply_delta(f64::NEG_INFINITY).is_err());
    assert_eq!(m.state(), before);
}

#[test]
fn apply_delta_accepts_f64_max() {
    let mut m = machine();
    m.apply_delta(f64::MAX).unwrap();
    assert!(m.state().is_canonical());
}

#[test]
fn apply_delta_near_max_period_stays_canonical() {
    let mut m = ScrollStateMachine::new(1.5e308).unwrap();
    m.apply_delta(1e308).unwrap();
    m.apply_delta(1e308).unwrap();

    let state = m.state();
    assert!(state.is_canonical(), "state {:?}", state);
    assert!(state.current_offset.is_finite());
    assert_eq!(state.current_offset, state.target_offset);
}

#[test]
fn tick_near_max_period_stays_canonical() {
    let mut m = ScrollStateMachine::new(f64::MAX).unwrap();
    m.apply_delta(f64::MAX * 0.9).unwrap();
    m.set_target(f64::MAX * 0.1).unwrap();

    m.tick_with(|remaining| remaining / 2.0).unwrap();

    let state = m.state();
    assert!(state.is_canonical(), "state {:?}", state);
}

// ===== set_target =====

#[test]
fn set_target_leaves_current_alone() {
    let mut m = machine_at(100.0, 100.0);
    m.set_target(600.0).unwrap();
    let state = m.state();
    assert_eq!(state.current_offset, 100.0);
    assert_eq!(state.target_offset, 600.0);
}

#[test]
fn set_target_wraps_out_of_range_values() {
    let mut m = machine();
    m.set_target(-20.0).unwrap();
    assert_eq!(m.state().target_offset, 980.0);
    m.set_target(2500.0).unwrap();
    assert_eq!(m.state().target_offset, 500.0);
}

#[test]
fn set_target_rejects_nan_without_change() {
    let mut m = machine_at(100.0, 300.0);
    let before = m.state();
    assert!(matches!(
        m.set_target(f64::NAN),
        Err(InvalidInputError::NonFinite {
            operation: "set_target",
            ..
        })
    ));
    assert_eq!(m.state(), before);
}

// ===== tick_with =====

#[test]
fn tick_with_full_distance_lands_on_target() {
    let mut m = machine_at(100.0, 400.0);
    m.tick_with(|remaining| remaining).unwrap();
    assert!(m.state().is_settled());
}

#[test]
fn tick_with_takes_short_way_across_zero() {
    let mut m = machine_at(990.0, 10.0);
    let mut seen = None;
    m.tick_with(|remaining| {
        seen = Some(remaining);
        remaining / 2.0
    })
    .unwrap();

    assert_eq!(seen, Some(20.0), "should move forward 20, not back 980");
    assert_eq!(m.state().current_offset, 0.0);
}

#[test]
fn tick_with_takes_short_way_backward_across_zero() {
    let mut m = machine_at(10.0, 990.0);
    m.tick_with(|remaining| {
        assert_eq!(remaining, -20.0);
        -15.0
    })
    .unwrap();
    assert_eq!(m.state().current_offset, 995.0);
}

#[test]
fn tick_with_skips_easing_when_settled() {
    let mut m = machine_at(100.0, 100.0);
    m.tick_with(|_| panic!("easing should not run when settled"))
        .unwrap();
}

#[test]
fn tick_with_rejects_non_finite_easing_output() {
    let mut m = machine_at(100.0, 400.0);
    let before = m.state();
    assert!(m.tick_with(|_| f64::NAN).is_err());
    assert_eq!(m.state(), before);
}

#[test]
fn tick_with_leaves_target_untouched() {
    let mut m = machine_at(100.0, 400.0);
    m.tick_with(|remaining| remaining * 0.25).unwrap();
    let state = m.state();
    assert_eq!(state.current_offset, 175.0);
    assert_eq!(state.target_offset, 400.0);
}

// ===== tick =====

#[test]
fn tick_moves_lerp_factor_per_reference_frame() {
    let mut m = machine_at(0.0, 100.0);
    m.tick(FRAME, &Smoothing::default()).unwrap();
    let current = m.state().current_offset;
    assert!((current - 15.0).abs() < 1e-9, "got {}", current);
}

#[test]
fn tick_converges_and_snaps() {
    let mut m = machine_at(0.0, 300.0);
    let smoothing = Smoothing::default();
    for _ in 0..200 {
        m.tick(FRAME, &smoothing).unwrap();
    }
    assert!(m.state().is_settled(), "state: {:?}", m.state());
}

#[test]
fn tick_zero_dt_is_no_movement() {
    let mut m = machine_at(0.0, 300.0);
    m.tick(0.0, &Smoothing::default()).unwrap();
    assert_eq!(m.state().current_offset, 0.0);
}

#[test]
fn tick_rejects_negative_dt() {
    let mut m = machine_at(0.0, 300.0);
    let before = m.state();
    assert_eq!(
        m.tick(-FRAME, &Smoothing::default()),
        Err(InvalidInputError::NegativeDeltaTime(-FRAME))
    );
    assert_eq!(m.state(), before);
}

#[test]
fn tick_rejects_nan_dt() {
    let mut m = machine_at(0.0, 300.0);
    assert!(m.tick(f64::NAN, &Smoothing::default()).is_err());
}

#[test]
fn tick_immediate_smoothing_settles_in_one_frame() {
    let mut m = machine_at(950.0, 30.0);
    m.tick(FRAME, &Smoothing::immediate()).unwrap();
    assert_eq!(m.state().current_offset, 30.0);
}

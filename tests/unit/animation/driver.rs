use super::*;

fn driver() -> AnimationDriver {
    AnimationDriver::new(DriverTiming::default())
}

#[test]
fn fresh_driver_is_at_rest_at_zero() {
    let d = driver();
    assert_eq!(d.sample(Millis(500.0)), AnimationState::default());
    assert!(!d.is_animating(Millis(0.0)));
}

#[test]
fn fill_and_counter_reach_targets_after_duration() {
    let mut d = driver();
    d.set_target_fill(0.5, Millis(0.0));
    d.set_target_counter(50.0, Millis(0.0));
    let s = d.sample(Millis(1000.0));
    assert_eq!(s.fill_percent, 0.5);
    assert_eq!(s.counter_value, 50.0);
    assert!(!d.is_animating(Millis(1000.0)));
}

#[test]
fn retargeting_fill_leaves_counter_untouched() {
    let mut d = driver();
    d.set_target_fill(1.0, Millis(0.0));
    d.set_target_counter(150.0, Millis(0.0));
    let counter_before = *d.counter_tween();

    d.set_target_fill(0.2, Millis(300.0));
    assert_eq!(*d.counter_tween(), counter_before);

    let s = d.sample(Millis(1000.0));
    assert_eq!(s.counter_value, 150.0);
    assert_eq!(d.fill_tween().target(), 0.2);
    assert!(!d.fill_tween().is_finished(Millis(1000.0)));
    assert_eq!(d.sample(Millis(1300.0)).fill_percent, 0.2);
}

#[test]
fn retarget_does_not_jump() {
    let mut d = driver();
    d.set_target_fill(0.8, Millis(0.0));
    d.set_target_counter(80.0, Millis(0.0));
    let now = Millis(650.0);
    let before = d.sample(now);
    d.set_target_fill(0.1, now);
    d.set_target_counter(-5.0, now);
    let after = d.sample(now);
    assert_eq!(before, after);
}

#[test]
fn scroll_runs_independently_of_tweens() {
    let mut d = driver();
    assert!(d.start_scroll(Millis(0.0)));
    assert!(!d.start_scroll(Millis(4000.0)), "second start is a no-op");
    let a = d.sample(Millis(2250.0)).scroll_phase;
    d.set_target_fill(0.9, Millis(2250.0));
    let b = d.sample(Millis(2250.0)).scroll_phase;
    assert_eq!(a, b);
    assert!((a - 0.25).abs() < 1e-12);
    assert!(d.is_animating(Millis(1e7)));
}

#[test]
fn cancel_freezes_state_and_ignores_later_requests() {
    let mut d = driver();
    d.start_scroll(Millis(0.0));
    d.set_target_fill(1.0, Millis(0.0));
    d.set_target_counter(100.0, Millis(0.0));
    let frozen = d.cancel_all(Millis(500.0));
    assert!(d.is_cancelled());
    assert!(!d.is_scrolling());
    assert!(!d.set_target_fill(0.0, Millis(600.0)));
    assert!(!d.set_target_counter(0.0, Millis(600.0)));
    assert!(!d.start_scroll(Millis(600.0)));
    assert_eq!(d.sample(Millis(9_000.0)), frozen);
    assert!(!d.is_animating(Millis(9_000.0)));
    assert_eq!(d.cancel_all(Millis(20_000.0)), frozen);
}

use super::*;

#[test]
fn phase_rises_linearly_within_a_period() {
    let ramp = ScrollRamp::new(Millis(0.0), 9000.0);
    assert_eq!(ramp.phase_at(Millis(0.0)), 0.0);
    assert!((ramp.phase_at(Millis(2250.0)) - 0.25).abs() < 1e-12);
    assert!((ramp.phase_at(Millis(4500.0)) - 0.5).abs() < 1e-12);
    assert!(ramp.phase_at(Millis(8999.0)) < 1.0);
}

#[test]
fn phase_restarts_at_each_cycle_boundary() {
    let ramp = ScrollRamp::new(Millis(0.0), 9000.0);
    assert_eq!(ramp.phase_at(Millis(9000.0)), 0.0);
    assert_eq!(ramp.phase_at(Millis(18000.0)), 0.0);
    assert!(ramp.phase_at(Millis(17999.0)) > 0.99);
}

#[test]
fn phase_is_periodic() {
    let ramp = ScrollRamp::new(Millis(125.0), 9000.0);
    for t in [125.0, 142.0, 1234.5, 4500.0, 8999.5, 30_001.25] {
        let a = ramp.phase_at(Millis(t));
        let b = ramp.phase_at(Millis(t + 9000.0));
        assert!((a - b).abs() < 1e-9, "t={t}: {a} vs {b}");
    }
}

#[test]
fn phase_stays_in_unit_interval() {
    let ramp = ScrollRamp::new(Millis(3.0), 9000.0);
    let mut t = 0.0;
    while t < 40_000.0 {
        let p = ramp.phase_at(Millis(t));
        assert!((0.0..1.0).contains(&p), "t={t} p={p}");
        t += 16.666;
    }
}

#[test]
fn before_start_and_degenerate_period_read_zero() {
    let ramp = ScrollRamp::new(Millis(1000.0), 9000.0);
    assert_eq!(ramp.phase_at(Millis(10.0)), 0.0);
    let flat = ScrollRamp::new(Millis(0.0), 0.0);
    assert_eq!(flat.phase_at(Millis(500.0)), 0.0);
}

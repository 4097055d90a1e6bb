use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_size_derives_expected_radii() {
    let g = DerivedGeometry::build(140.0, &WaveParams::default());
    assert!(approx(g.radius, 70.0));
    assert!(approx(g.ring_thickness, 3.5));
    assert!(approx(g.fill_margin, 7.0));
    assert!(approx(g.fill_radius, 63.0));
    assert!(approx(g.font_size, 35.0));
    assert!(approx(g.wave.wave_length, 126.0));
    assert!(approx(g.wave.wave_clip_width, 252.0));
    assert!(approx(g.wave.wave_height, 6.3));
    assert_eq!(g.wave.wave_count, 1);
    assert_eq!(g.wave.wave_clip_count, 2);
}

#[test]
fn fill_radius_stays_inside_radius_across_sizes() {
    for size in [1.0, 2.5, 48.0, 140.0, 999.0, 4096.0] {
        let g = DerivedGeometry::build(size, &WaveParams::default());
        assert!(g.fill_radius > 0.0, "size={size}");
        assert!(g.fill_radius < g.radius, "size={size}");
    }
}

#[test]
fn wave_count_divides_the_fill_diameter() {
    let params = WaveParams {
        wave_count: 3,
        ..WaveParams::default()
    };
    let g = DerivedGeometry::build(140.0, &params);
    assert!(approx(g.wave.wave_length, 42.0));
    assert_eq!(g.wave.wave_clip_count, 4);
    assert!(approx(g.wave.wave_clip_width, 168.0));
}

#[test]
fn degenerate_sizes_are_clamped() {
    for size in [0.0, -20.0, f64::NAN, f64::INFINITY] {
        let g = DerivedGeometry::build(size, &WaveParams::default());
        assert_eq!(g.size, MIN_SIZE);
        assert!(g.fill_radius > 0.0);
    }
    assert_eq!(sanitize_size(140.0), 140.0);
}

#[test]
fn sub_pixel_sizes_keep_their_proportions() {
    let g = DerivedGeometry::build(0.5, &WaveParams::default());
    assert_eq!(g.size, 0.5);
    assert_eq!(g.radius, 0.25);
    assert!(g.fill_radius > 0.0 && g.fill_radius < g.radius);
    assert_eq!(g.canvas_extent(), 1);
    assert_eq!(sanitize_size(1e-3), 1e-3);
}

#[test]
fn fill_fraction_clamps_to_unit_interval() {
    assert_eq!(fill_fraction(50.0), 0.5);
    assert_eq!(fill_fraction(0.0), 0.0);
    assert_eq!(fill_fraction(100.0), 1.0);
    assert_eq!(fill_fraction(-20.0), 0.0);
    assert_eq!(fill_fraction(150.0), 1.0);
    assert_eq!(fill_fraction(f64::NAN), 0.0);
    assert_eq!(GaugeConfig::new(140.0, 25.0).fill_fraction(), 0.25);
}

#[test]
fn fill_fraction_clamp_is_idempotent() {
    for v in [-1e6, -20.0, 0.0, 33.3, 100.0, 150.0, 1e6] {
        let once = fill_fraction(v);
        let twice = fill_fraction(once * MAX_VALUE);
        assert!(approx(once, twice), "v={v}");
    }
}

#[test]
fn ring_and_fill_circles_are_centered() {
    let g = DerivedGeometry::build(140.0, &WaveParams::default());
    assert_eq!(g.center(), Point::new(70.0, 70.0));
    assert!(approx(g.ring_circle().radius, 68.25));
    assert!(approx(g.fill_circle().radius, 63.0));
    assert_eq!(g.canvas_extent(), 140);
}

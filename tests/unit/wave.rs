use super::*;
use crate::geometry::WaveParams;
use kurbo::{PathEl, Shape};

fn geometry(size: f64) -> DerivedGeometry {
    DerivedGeometry::build(size, &WaveParams::default())
}

#[test]
fn sample_count_is_independent_of_size() {
    for size in [1.0, 40.0, 140.0, 1000.0] {
        let b = WaveBoundary::sample(&geometry(size));
        assert_eq!(b.len(), 81, "size={size}");
        assert_eq!(b.len(), sample_count(2));
    }
}

#[test]
fn sample_count_tracks_wave_clip_count() {
    let params = WaveParams {
        wave_count: 2,
        ..WaveParams::default()
    };
    let g = DerivedGeometry::build(140.0, &params);
    assert_eq!(WaveBoundary::sample(&g).len(), 121);
}

#[test]
fn upper_boundary_spans_clip_width_and_amplitude() {
    let g = geometry(140.0);
    let b = WaveBoundary::sample(&g);
    let first = b.upper()[0];
    let last = *b.upper().last().unwrap();
    assert_eq!(first.x, 0.0);
    assert!((last.x - g.wave.wave_clip_width).abs() < 1e-9);

    // Quarter period: crest at +wave_height.
    let crest = b.upper()[10];
    assert!((crest.y - g.wave.wave_height).abs() < 1e-9);
    // Three quarters: trough.
    let trough = b.upper()[30];
    assert!((trough.y + g.wave.wave_height).abs() < 1e-9);

    for p in b.upper() {
        assert!(p.y.abs() <= g.wave.wave_height + 1e-9);
    }
}

#[test]
fn boundary_repeats_every_period() {
    let g = geometry(140.0);
    let b = WaveBoundary::sample(&g);
    for i in 0..=40 {
        let a = b.upper()[i];
        let c = b.upper()[i + 40];
        assert!((a.y - c.y).abs() < 1e-9, "i={i}");
        assert!((c.x - a.x - g.wave.wave_length).abs() < 1e-9, "i={i}");
    }
}

#[test]
fn lower_edge_sits_below_the_fill_diameter() {
    let g = geometry(140.0);
    let b = WaveBoundary::sample(&g);
    assert!((b.baseline() - (126.0 + 6.3)).abs() < 1e-9);
    assert!(b.lower().all(|p| p.y == b.baseline()));
}

#[test]
fn area_path_is_closed_and_covers_the_strip() {
    let g = geometry(140.0);
    let clip = WaveClip::build(&g);
    let els: Vec<PathEl> = clip.path().elements().to_vec();
    assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));
    // move + 80 upper lines + 81 lower lines + close
    assert_eq!(els.len(), 1 + 80 + 81 + 1);

    let bbox = clip.path().bounding_box();
    assert!((bbox.x0 - 0.0).abs() < 1e-9);
    assert!((bbox.x1 - g.wave.wave_clip_width).abs() < 1e-9);
    assert!((bbox.y0 + g.wave.wave_height).abs() < 1e-9);
    assert!((bbox.y1 - clip.boundary().baseline()).abs() < 1e-9);

    // Region below the wave is inside, above the crest is not.
    assert!(clip.path().contains(kurbo::Point::new(63.0, 100.0)));
    assert!(!clip.path().contains(kurbo::Point::new(63.0, -10.0)));
}

#[test]
fn svg_export_round_trips_through_kurbo() {
    let clip = WaveClip::build(&geometry(140.0));
    let svg = clip.to_svg();
    assert!(svg.starts_with('M'));
    assert!(svg.trim_end().ends_with('Z'));
    let parsed = BezPath::from_svg(&svg).unwrap();
    assert_eq!(parsed.elements().len(), clip.path().elements().len());
}

use super::*;

#[test]
fn oversized_surfaces_are_rejected() {
    let err = CpuSurface::new(70_000, 10, &RenderSettings::default())
        .err()
        .unwrap();
    assert!(err.to_string().contains("width exceeds u16"));
    assert!(CpuSurface::new(0, 10, &RenderSettings::default()).is_err());
}

#[test]
fn clear_color_fills_the_canvas() {
    let settings = RenderSettings {
        clear_rgba: Some(Rgba8::opaque(10, 20, 30)),
    };
    let frame = CpuSurface::new(4, 3, &settings).unwrap().finish();
    assert_eq!(frame.data.len(), 4 * 3 * 4);
    assert!(frame.premultiplied);
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(frame.pixel(x, y), Some([10, 20, 30, 255]));
        }
    }
}

#[test]
fn default_canvas_is_transparent() {
    let frame = CpuSurface::new(2, 2, &RenderSettings::default())
        .unwrap()
        .finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn filled_circle_covers_its_center_only() {
    let mut s = CpuSurface::new(20, 20, &RenderSettings::default()).unwrap();
    s.fill_circle(Circle::new((10.0, 10.0), 5.0), Rgba8::opaque(255, 0, 0))
        .unwrap();
    let frame = s.finish();
    assert_eq!(frame.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn clip_masks_later_draws() {
    let mut s = CpuSurface::new(20, 20, &RenderSettings::default()).unwrap();
    let mut bottom_half = BezPath::new();
    bottom_half.move_to((0.0, 10.0));
    bottom_half.line_to((20.0, 10.0));
    bottom_half.line_to((20.0, 20.0));
    bottom_half.line_to((0.0, 20.0));
    bottom_half.close_path();

    s.push_clip(&bottom_half).unwrap();
    s.fill_circle(Circle::new((10.0, 10.0), 9.0), Rgba8::opaque(0, 0, 255))
        .unwrap();
    s.pop_clip().unwrap();
    let frame = s.finish();

    assert_eq!(frame.pixel(10, 15), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(10, 4), Some([0, 0, 0, 0]));
}

#[test]
fn unmatched_pop_is_an_error() {
    let mut s = CpuSurface::new(4, 4, &RenderSettings::default()).unwrap();
    assert!(s.pop_clip().is_err());
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = CpuSurface::new(8, 8, &RenderSettings::default()).unwrap();
    assert!(!s.has_text());
    s.draw_text(&TextDraw {
        text: "50".to_string(),
        origin: Point::new(1.0, 6.0),
        font_size: 6.0,
        color: Rgba8::opaque(255, 255, 255),
    })
    .unwrap();
    assert!(s.finish().data.iter().all(|&b| b == 0));
}

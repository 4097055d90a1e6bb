use super::*;

#[test]
fn defaults_validate() {
    let s = GaugeSettings::default();
    s.validate().unwrap();
    assert_eq!(s.wave_params(), WaveParams::default());
    assert_eq!(s.timing(), DriverTiming::default());
}

#[test]
fn zero_wave_count_is_rejected() {
    let s = GaugeSettings {
        wave_count: 0,
        ..GaugeSettings::default()
    };
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("wave_count"));
}

#[test]
fn scroll_period_must_be_positive() {
    let s = GaugeSettings {
        scroll_period_ms: 0.0,
        ..GaugeSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn ratios_must_leave_room_for_liquid() {
    let s = GaugeSettings {
        ring_thickness_ratio: 0.6,
        fill_gap_ratio: 0.4,
        ..GaugeSettings::default()
    };
    assert!(s.validate().is_err());

    let s = GaugeSettings {
        wave_height_ratio: f64::NAN,
        ..GaugeSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn partial_json_fills_in_defaults() {
    let s: GaugeSettings =
        serde_json::from_str(r##"{"wave_count": 2, "ring_color": "#FF0000", "easing": "linear"}"##)
            .unwrap();
    assert_eq!(s.wave_count, 2);
    assert_eq!(s.ring_color, Rgba8::opaque(255, 0, 0));
    assert_eq!(s.easing, Ease::Linear);
    assert_eq!(s.scroll_period_ms, 9000.0);
    assert_eq!(s.fill_color_foreground, Rgba8::opaque(0xa4, 0xdb, 0xf8));
}

#[test]
fn settings_serialize_colors_as_hex() {
    let json = serde_json::to_value(GaugeSettings::default()).unwrap();
    assert_eq!(json["ring_color"], "#178BCA");
    assert_eq!(json["fill_color_background"], "#045681");
    assert_eq!(json["easing"], "in_out_quad");
}

//! Per-frame composition: live clip transform, readout placement and the two draw passes.

use crate::animation::driver::AnimationState;
use crate::foundation::core::{Affine, BezPath, Millis, Point, Rgba8};
use crate::foundation::error::GaugeResult;
use crate::geometry::DerivedGeometry;
use crate::render::{Surface, TextDraw};
use crate::settings::GaugeSettings;
use crate::text::TextMetrics;
use crate::wave::WaveClip;

/// Translation that places the static wave strip for the current scroll phase and fill level.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClipTransform {
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ClipTransform {
    pub fn from_state(geometry: &DerivedGeometry, scroll_phase: f64, fill_percent: f64) -> Self {
        let wave = &geometry.wave;
        Self {
            translate_x: geometry.fill_margin - wave.wave_length * scroll_phase,
            translate_y: geometry.fill_margin
                + (1.0 - fill_percent) * geometry.fill_radius * 2.0
                - wave.wave_height,
        }
    }

    pub fn to_affine(self) -> Affine {
        Affine::translate((self.translate_x, self.translate_y))
    }
}

/// The static clip path moved into canvas space for one animation state.
pub fn live_clip_path(
    static_path: &BezPath,
    geometry: &DerivedGeometry,
    scroll_phase: f64,
    fill_percent: f64,
) -> BezPath {
    ClipTransform::from_state(geometry, scroll_phase, fill_percent).to_affine() * static_path.clone()
}

/// Readout string for an animated counter value. Never renders as `-0`.
pub fn display_text(counter_value: f64) -> String {
    // `as` saturates and maps NaN and -0.0 to 0.
    format!("{}", counter_value.round() as i64)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextPlacement {
    pub text: String,
    pub width: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub baseline_y: f64,
    pub font_size: f64,
}

impl TextPlacement {
    /// Center `text` horizontally and sit it in the middle band of the gauge.
    pub fn layout(geometry: &DerivedGeometry, text: String, metrics: &mut dyn TextMetrics) -> Self {
        let font_size = geometry.font_size;
        let width = metrics.text_width(&text, font_size);
        let offset_y = geometry.size * 0.5 - font_size * 0.7;
        Self {
            text,
            width,
            offset_x: geometry.radius - width * 0.5,
            offset_y,
            baseline_y: font_size + offset_y,
            font_size,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.offset_x, self.baseline_y)
    }

    fn draw(&self, color: Rgba8) -> TextDraw {
        TextDraw {
            text: self.text.clone(),
            origin: self.origin(),
            font_size: self.font_size,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Palette {
    pub ring: Rgba8,
    pub liquid: Rgba8,
    pub text_background: Rgba8,
    pub text_foreground: Rgba8,
}

impl From<&GaugeSettings> for Palette {
    fn from(s: &GaugeSettings) -> Self {
        Self {
            ring: s.ring_color,
            liquid: s.liquid_color,
            text_background: s.fill_color_background,
            text_foreground: s.fill_color_foreground,
        }
    }
}

/// Everything needed to draw one frame. Derived fresh on every tick.
#[derive(Clone, Debug, serde::Serialize)]
pub struct GaugeFrame {
    pub time_ms: f64,
    pub geometry: DerivedGeometry,
    pub state: AnimationState,
    pub clip_transform: ClipTransform,
    pub display_text: String,
    /// `None` when no font is available; the readout is then not drawn.
    pub text: Option<TextPlacement>,
    #[serde(serialize_with = "serialize_path_svg")]
    pub clip_path: BezPath,
    pub palette: Palette,
}

impl GaugeFrame {
    pub fn draw(&self, surface: &mut dyn Surface) -> GaugeResult<()> {
        self.draw_background(surface)?;
        self.draw_foreground(surface)
    }

    /// Ring and readout over the empty gauge, unclipped.
    pub fn draw_background(&self, surface: &mut dyn Surface) -> GaugeResult<()> {
        let g = &self.geometry;
        surface.stroke_circle(g.ring_circle(), g.ring_thickness, self.palette.ring)?;
        if let Some(text) = &self.text {
            surface.draw_text(&text.draw(self.palette.text_background))?;
        }
        Ok(())
    }

    /// Liquid body and readout, masked by the live wave clip.
    pub fn draw_foreground(&self, surface: &mut dyn Surface) -> GaugeResult<()> {
        surface.push_clip(&self.clip_path)?;
        surface.fill_circle(self.geometry.fill_circle(), self.palette.liquid)?;
        if let Some(text) = &self.text {
            surface.draw_text(&text.draw(self.palette.text_foreground))?;
        }
        surface.pop_clip()
    }
}

fn serialize_path_svg<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_svg())
}

pub fn compose_frame(
    geometry: &DerivedGeometry,
    clip: &WaveClip,
    state: AnimationState,
    palette: Palette,
    metrics: &mut dyn TextMetrics,
    now: Millis,
) -> GaugeFrame {
    let clip_transform = ClipTransform::from_state(geometry, state.scroll_phase, state.fill_percent);
    let display_text = display_text(state.counter_value);
    let text = if metrics.is_available() {
        Some(TextPlacement::layout(geometry, display_text.clone(), metrics))
    } else {
        None
    };

    GaugeFrame {
        time_ms: now.0,
        geometry: *geometry,
        state,
        clip_transform,
        display_text,
        text,
        clip_path: live_clip_path(clip.path(), geometry, state.scroll_phase, state.fill_percent),
        palette,
    }
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;

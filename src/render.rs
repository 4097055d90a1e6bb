//! Draw surfaces the gauge paints onto, and the raster frame they produce.

use std::path::Path;

use crate::foundation::core::{BezPath, Circle, Point, Rgba8};
use crate::foundation::error::{GaugeError, GaugeResult};

pub(crate) mod cpu;
pub(crate) mod recording;

/// Rendered pixels, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Pixel data with alpha divided back out.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            if a == 255 {
                continue;
            }
            let a16 = u16::from(a);
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a16 / 2) / a16).min(255) as u8;
            }
        }
        out
    }

    pub fn write_png(&self, path: &Path) -> GaugeResult<()> {
        let straight = self.to_straight_rgba8();
        image::save_buffer_with_format(
            path,
            &straight,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| GaugeError::render(format!("write png '{}': {e}", path.display())))
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Painted under everything at frame begin. `None` leaves the canvas transparent.
    pub clear_rgba: Option<Rgba8>,
}

/// One line of readout text, positioned by its left baseline point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub origin: Point,
    pub font_size: f64,
    pub color: Rgba8,
}

/// The drawing primitives a gauge frame needs.
///
/// Clips nest: every `push_clip` is matched by a `pop_clip`, and draws in between are masked
/// by the intersection of the pushed paths.
pub trait Surface {
    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Rgba8) -> GaugeResult<()>;

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) -> GaugeResult<()>;

    /// Surfaces without a usable font skip the draw and return `Ok`.
    fn draw_text(&mut self, text: &TextDraw) -> GaugeResult<()>;

    fn push_clip(&mut self, path: &BezPath) -> GaugeResult<()>;

    fn pop_clip(&mut self) -> GaugeResult<()>;
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;

use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Circle, Point, Rgba8};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::render::{FrameRGBA, RenderSettings, Surface, TextDraw};
use crate::text::{FontAsset, TextBrushRgba8, TextLayoutEngine};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Software raster surface backed by `vello_cpu`.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    glyphs: Option<GlyphSource>,
    clip_depth: usize,
}

struct GlyphSource {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32, settings: &RenderSettings) -> GaugeResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| GaugeError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| GaugeError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(GaugeError::render("surface must be at least 1x1"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        if let Some(c) = settings.clear_rgba {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(cpu_color(c));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width_u16),
                f64::from(height_u16),
            ));
        }

        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx,
            glyphs: None,
            clip_depth: 0,
        })
    }

    /// Enable text drawing with `font`. Unusable fonts leave text disabled.
    pub fn with_font(mut self, font: &FontAsset) -> Self {
        match TextLayoutEngine::with_font(font) {
            Ok(engine) => {
                let data = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font.bytes().as_ref().clone()),
                    0,
                );
                self.glyphs = Some(GlyphSource { engine, font: data });
            }
            Err(err) => tracing::warn!(%err, "cpu surface text disabled"),
        }
        self
    }

    pub fn has_text(&self) -> bool {
        self.glyphs.is_some()
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        if self.clip_depth > 0 {
            tracing::warn!(depth = self.clip_depth, "unbalanced clip layers closed at finish");
            while self.clip_depth > 0 {
                self.ctx.pop_layer();
                self.clip_depth -= 1;
            }
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl Surface for CpuSurface {
    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Rgba8) -> GaugeResult<()> {
        if !(width.is_finite() && width > 0.0) {
            return Ok(());
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(cpu_color(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx
            .stroke_path(&bezpath_to_cpu(&circle.to_path(CIRCLE_TOLERANCE)));
        Ok(())
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) -> GaugeResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(cpu_color(color));
        self.ctx
            .fill_path(&bezpath_to_cpu(&circle.to_path(CIRCLE_TOLERANCE)));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextDraw) -> GaugeResult<()> {
        let Some(glyphs) = self.glyphs.as_mut() else {
            return Ok(());
        };
        let brush = TextBrushRgba8::from(text.color);
        let Some(layout) = glyphs
            .engine
            .layout_line(&text.text, text.font_size as f32, brush)
        else {
            return Ok(());
        };

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Glyph positions are layout-relative; shift so the run baseline lands on origin.
                let shift = Affine::translate((
                    text.origin.x,
                    text.origin.y - f64::from(run.baseline()),
                ));
                self.ctx.set_transform(affine_to_cpu(shift));

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let positioned = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&glyphs.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(positioned);
            }
        }
        Ok(())
    }

    fn push_clip(&mut self, path: &BezPath) -> GaugeResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_clip_layer(&bezpath_to_cpu(path));
        self.clip_depth += 1;
        Ok(())
    }

    fn pop_clip(&mut self) -> GaugeResult<()> {
        if self.clip_depth == 0 {
            return Err(GaugeError::render("pop_clip without matching push_clip"));
        }
        self.ctx.pop_layer();
        self.clip_depth -= 1;
        Ok(())
    }
}

fn cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

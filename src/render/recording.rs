use crate::foundation::core::{BezPath, Circle, Rgba8};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::render::{Surface, TextDraw};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    StrokeCircle {
        circle: Circle,
        width: f64,
        color: Rgba8,
    },
    FillCircle {
        circle: Circle,
        color: Rgba8,
    },
    Text(TextDraw),
    PushClip(BezPath),
    PopClip,
}

/// Surface that keeps every call instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clip_depth(&self) -> usize {
        self.depth
    }
}

impl Surface for RecordingSurface {
    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Rgba8) -> GaugeResult<()> {
        self.calls.push(DrawCall::StrokeCircle {
            circle,
            width,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) -> GaugeResult<()> {
        self.calls.push(DrawCall::FillCircle { circle, color });
        Ok(())
    }

    fn draw_text(&mut self, text: &TextDraw) -> GaugeResult<()> {
        self.calls.push(DrawCall::Text(text.clone()));
        Ok(())
    }

    fn push_clip(&mut self, path: &BezPath) -> GaugeResult<()> {
        self.depth += 1;
        self.calls.push(DrawCall::PushClip(path.clone()));
        Ok(())
    }

    fn pop_clip(&mut self) -> GaugeResult<()> {
        if self.depth == 0 {
            return Err(GaugeError::render("pop_clip without matching push_clip"));
        }
        self.depth -= 1;
        self.calls.push(DrawCall::PopClip);
        Ok(())
    }
}

//! Readout font loading and text measurement.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaugeError, GaugeResult};

/// Width of laid-out text, used to center the readout.
pub trait TextMetrics {
    fn text_width(&mut self, text: &str, font_size: f64) -> f64;

    /// Whether text measured here can also be drawn.
    fn is_available(&self) -> bool {
        true
    }
}

/// Metrics used when no font is available: every string is zero wide.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFont;

impl TextMetrics for NoFont {
    fn text_width(&mut self, _text: &str, _font_size: f64) -> f64 {
        0.0
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Raw font file contents shared between the metrics engine and render surfaces.
#[derive(Clone)]
pub struct FontAsset {
    bytes: Arc<Vec<u8>>,
    source: Option<PathBuf>,
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("len", &self.bytes.len())
            .field("source", &self.source)
            .finish()
    }
}

impl FontAsset {
    pub fn from_bytes(bytes: Vec<u8>) -> GaugeResult<Self> {
        if bytes.is_empty() {
            return Err(GaugeError::font("font data is empty"));
        }
        Ok(Self {
            bytes: Arc::new(bytes),
            source: None,
        })
    }

    pub fn load(path: &Path) -> GaugeResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| GaugeError::font(format!("read '{}': {e}", path.display())))?;
        let mut font = Self::from_bytes(bytes)?;
        font.source = Some(path.to_path_buf());
        Ok(font)
    }

    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Single-line Parley layout over one registered font family.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font` and resolve its primary family.
    pub fn with_font(font: &FontAsset) -> GaugeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes().as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| GaugeError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GaugeError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` on one unbroken line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> Option<parley::Layout<TextBrushRgba8>> {
        if text.is_empty() || !size_px.is_finite() || size_px <= 0.0 {
            return None;
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Some(layout)
    }
}

impl TextMetrics for TextLayoutEngine {
    fn text_width(&mut self, text: &str, font_size: f64) -> f64 {
        self.layout_line(text, font_size as f32, TextBrushRgba8::default())
            .map_or(0.0, |layout| f64::from(layout.width()))
    }
}

/// Build metrics for an optional font, falling back to [`NoFont`] when it cannot be used.
pub fn metrics_for(font: Option<&FontAsset>) -> Box<dyn TextMetrics> {
    let Some(font) = font else {
        return Box::new(NoFont);
    };
    match TextLayoutEngine::with_font(font) {
        Ok(engine) => Box::new(engine),
        Err(err) => {
            tracing::warn!(%err, "readout font unusable; text measures as zero width");
            Box::new(NoFont)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/text.rs"]
mod tests;

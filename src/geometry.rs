//! Static gauge geometry derived from the gauge size.

use crate::foundation::core::{Circle, Point};

/// Diameter substituted for non-positive or non-finite sizes.
pub const MIN_SIZE: f64 = 1.0;
/// Lower end of the value scale mapped to an empty gauge.
pub const MIN_VALUE: f64 = 0.0;
/// Upper end of the value scale mapped to a full gauge.
pub const MAX_VALUE: f64 = 100.0;
/// Wave boundary samples per wave period.
pub const SAMPLES_PER_PERIOD: usize = 40;

/// Inputs supplied by the host for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GaugeConfig {
    /// Gauge diameter in canvas units.
    pub size: f64,
    /// Raw progress value; not clamped.
    pub value: f64,
}

impl GaugeConfig {
    pub fn new(size: f64, value: f64) -> Self {
        Self { size, value }
    }

    pub fn fill_fraction(&self) -> f64 {
        fill_fraction(self.value)
    }
}

/// `clamp(value, 0, 100) / 100`. NaN reads as an empty gauge.
pub fn fill_fraction(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value.clamp(MIN_VALUE, MAX_VALUE) - MIN_VALUE) / (MAX_VALUE - MIN_VALUE)
}

/// Replace a size that cannot lay out with [`MIN_SIZE`]. Any finite positive size is kept.
pub fn sanitize_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        return size;
    }
    tracing::warn!(size, min = MIN_SIZE, "gauge size clamped");
    MIN_SIZE
}

/// Ratios and counts controlling the wave and ring proportions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub wave_count: u32,
    pub ring_thickness_ratio: f64,
    pub fill_gap_ratio: f64,
    pub wave_height_ratio: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_count: 1,
            ring_thickness_ratio: 0.05,
            fill_gap_ratio: 0.05,
            wave_height_ratio: 0.1,
        }
    }
}

impl WaveParams {
    /// One extra period is sampled so a scroll of up to one wavelength never exposes an edge.
    pub fn wave_clip_count(&self) -> u32 {
        self.wave_count.max(1) + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WaveMetrics {
    pub wave_count: u32,
    pub wave_clip_count: u32,
    /// Width of one period at the fill diameter.
    pub wave_length: f64,
    /// Width of the sampled strip (`wave_length * wave_clip_count`).
    pub wave_clip_width: f64,
    /// Wave amplitude.
    pub wave_height: f64,
}

/// Radii and margins for one gauge size. Rebuilt, never patched, when the size changes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DerivedGeometry {
    pub size: f64,
    pub radius: f64,
    pub ring_thickness: f64,
    pub fill_margin: f64,
    pub fill_radius: f64,
    pub font_size: f64,
    pub wave: WaveMetrics,
}

impl DerivedGeometry {
    pub fn build(size: f64, params: &WaveParams) -> Self {
        let size = sanitize_size(size);
        let radius = size * 0.5;
        let ring_thickness = radius * params.ring_thickness_ratio;
        let fill_gap = radius * params.fill_gap_ratio;
        let fill_margin = ring_thickness + fill_gap;
        let fill_radius = radius - fill_margin;

        let wave_count = params.wave_count.max(1);
        let wave_clip_count = params.wave_clip_count();
        let wave_length = fill_radius * 2.0 / f64::from(wave_count);

        Self {
            size,
            radius,
            ring_thickness,
            fill_margin,
            fill_radius,
            font_size: radius * 0.5,
            wave: WaveMetrics {
                wave_count,
                wave_clip_count,
                wave_length,
                wave_clip_width: wave_length * f64::from(wave_clip_count),
                wave_height: fill_radius * params.wave_height_ratio,
            },
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }

    /// Centerline of the outline ring; stroking it at `ring_thickness` touches the canvas edge.
    pub fn ring_circle(&self) -> Circle {
        Circle::new(self.center(), self.radius - self.ring_thickness * 0.5)
    }

    pub fn fill_circle(&self) -> Circle {
        Circle::new(self.center(), self.fill_radius)
    }

    /// Pixel extent of a square canvas that holds the whole gauge.
    pub fn canvas_extent(&self) -> u32 {
        self.size.ceil().max(1.0) as u32
    }
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;

//! Gauge appearance and timing settings.

use std::path::PathBuf;

use crate::animation::driver::DriverTiming;
use crate::animation::ease::Ease;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::geometry::WaveParams;

/// Everything about a gauge that is not its size or value.
///
/// Every field has a default, so partial JSON objects deserialize cleanly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GaugeSettings {
    /// Wave periods across the fill diameter.
    pub wave_count: u32,
    pub ring_color: Rgba8,
    /// Color of the liquid body inside the clip.
    pub liquid_color: Rgba8,
    /// Readout color where it sits over the empty part of the gauge.
    pub fill_color_background: Rgba8,
    /// Readout color where it sits over the liquid.
    pub fill_color_foreground: Rgba8,
    /// Font file for the readout. Without one the readout is measured as zero width and skipped.
    pub font: Option<PathBuf>,
    pub fill_duration_ms: f64,
    pub scroll_period_ms: f64,
    pub ring_thickness_ratio: f64,
    pub fill_gap_ratio: f64,
    pub wave_height_ratio: f64,
    pub easing: Ease,
}

impl Default for GaugeSettings {
    fn default() -> Self {
        Self {
            wave_count: 1,
            ring_color: Rgba8::opaque(0x17, 0x8b, 0xca),
            liquid_color: Rgba8::opaque(0x17, 0x8b, 0xca),
            fill_color_background: Rgba8::opaque(0x04, 0x56, 0x81),
            fill_color_foreground: Rgba8::opaque(0xa4, 0xdb, 0xf8),
            font: None,
            fill_duration_ms: 1000.0,
            scroll_period_ms: 9000.0,
            ring_thickness_ratio: 0.05,
            fill_gap_ratio: 0.05,
            wave_height_ratio: 0.1,
            easing: Ease::InOutQuad,
        }
    }
}

impl GaugeSettings {
    pub fn validate(&self) -> GaugeResult<()> {
        if self.wave_count == 0 {
            return Err(GaugeError::validation("wave_count must be >= 1"));
        }
        if !(self.fill_duration_ms.is_finite() && self.fill_duration_ms >= 0.0) {
            return Err(GaugeError::validation(
                "fill_duration_ms must be finite and >= 0",
            ));
        }
        if !(self.scroll_period_ms.is_finite() && self.scroll_period_ms > 0.0) {
            return Err(GaugeError::validation(
                "scroll_period_ms must be finite and > 0",
            ));
        }
        for (name, ratio) in [
            ("ring_thickness_ratio", self.ring_thickness_ratio),
            ("fill_gap_ratio", self.fill_gap_ratio),
            ("wave_height_ratio", self.wave_height_ratio),
        ] {
            if !(ratio.is_finite() && ratio >= 0.0) {
                return Err(GaugeError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.ring_thickness_ratio + self.fill_gap_ratio >= 1.0 {
            return Err(GaugeError::validation(
                "ring_thickness_ratio + fill_gap_ratio must be < 1 to leave room for the liquid",
            ));
        }
        Ok(())
    }

    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            wave_count: self.wave_count,
            ring_thickness_ratio: self.ring_thickness_ratio,
            fill_gap_ratio: self.fill_gap_ratio,
            wave_height_ratio: self.wave_height_ratio,
        }
    }

    pub fn timing(&self) -> DriverTiming {
        DriverTiming {
            fill_duration_ms: self.fill_duration_ms,
            scroll_period_ms: self.scroll_period_ms,
            ease: self.easing,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;

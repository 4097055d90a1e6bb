//! Offline rendering: a frame clock driving a gauge through a range of frames.

use std::str::FromStr;

use crate::compose::GaugeFrame;
use crate::foundation::core::{FrameIndex, FrameRange, Fps, Millis};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::gauge::LiquidGauge;
use crate::geometry::GaugeConfig;
use crate::render::cpu::CpuSurface;
use crate::render::{FrameRGBA, RenderSettings};
use crate::settings::GaugeSettings;

/// Maps frame numbers to animation timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    fps: Fps,
    origin: Millis,
}

impl FrameClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            origin: Millis::ZERO,
        }
    }

    pub fn with_origin(fps: Fps, origin: Millis) -> Self {
        Self { fps, origin }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn origin(&self) -> Millis {
        self.origin
    }

    pub fn time_of(&self, frame: FrameIndex) -> Millis {
        self.origin
            .offset(frame.0 as f64 * 1000.0 * f64::from(self.fps.den) / f64::from(self.fps.num))
    }

    /// Last frame whose timestamp is at or before `t`. Times before the origin map to frame 0.
    pub fn frame_at(&self, t: Millis) -> FrameIndex {
        let frames = t.since(self.origin) / self.fps.frame_duration_ms();
        if !frames.is_finite() || frames <= 0.0 {
            return FrameIndex(0);
        }
        // Absorb float error so `frame_at(time_of(f)) == f`.
        FrameIndex((frames + 1e-9).floor() as u64)
    }
}

/// A new input value taking effect at a given frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueChange {
    pub at: FrameIndex,
    pub value: f64,
}

impl FromStr for ValueChange {
    type Err = GaugeError;

    /// Parses `FRAME:VALUE`, e.g. `45:80`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, value) = s
            .split_once(':')
            .ok_or_else(|| GaugeError::validation(format!("expected FRAME:VALUE, got '{s}'")))?;
        let at = frame
            .trim()
            .parse::<u64>()
            .map_err(|e| GaugeError::validation(format!("bad frame in '{s}': {e}")))?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|e| GaugeError::validation(format!("bad value in '{s}': {e}")))?;
        Ok(Self {
            at: FrameIndex(at),
            value,
        })
    }
}

#[derive(Clone, Debug)]
pub struct SequenceOpts {
    pub settings: GaugeSettings,
    pub size: f64,
    /// Value at mount time.
    pub value: f64,
    pub fps: Fps,
    pub range: FrameRange,
    pub changes: Vec<ValueChange>,
    pub render: RenderSettings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStats {
    pub frames_rendered: u64,
    pub changes_applied: usize,
}

fn surface_for(gauge: &LiquidGauge, render: &RenderSettings) -> GaugeResult<CpuSurface> {
    let extent = gauge.geometry().canvas_extent();
    let surface = CpuSurface::new(extent, extent, render)?;
    Ok(match gauge.font() {
        Some(font) => surface.with_font(font),
        None => surface,
    })
}

/// Mount a gauge at time zero and rasterize the frame at `at`.
#[tracing::instrument(level = "debug", skip(settings, render))]
pub fn render_frame(
    settings: &GaugeSettings,
    config: GaugeConfig,
    at: Millis,
    render: &RenderSettings,
) -> GaugeResult<(GaugeFrame, FrameRGBA)> {
    let mut gauge = LiquidGauge::mount(settings.clone(), config, Millis::ZERO)?;
    let mut surface = surface_for(&gauge, render)?;
    let frame = gauge.render(config.size, config.value, at, &mut surface)?;
    Ok((frame, surface.finish()))
}

/// Render every frame in `opts.range`, applying value changes at their own frame times.
///
/// The gauge is mounted at the clock origin, so a range that starts late still shows the
/// animations as they would have progressed from frame 0.
#[tracing::instrument(level = "debug", skip_all, fields(start = opts.range.start.0, end = opts.range.end.0))]
pub fn render_sequence<F>(opts: &SequenceOpts, mut on_frame: F) -> GaugeResult<SequenceStats>
where
    F: FnMut(FrameIndex, &GaugeFrame, FrameRGBA) -> GaugeResult<()>,
{
    let clock = FrameClock::new(opts.fps);
    let mut changes = opts.changes.clone();
    changes.sort_by_key(|c| c.at);

    let mut gauge = LiquidGauge::mount(
        opts.settings.clone(),
        GaugeConfig::new(opts.size, opts.value),
        clock.origin(),
    )?;
    let mut value = opts.value;
    let mut pending = changes.into_iter().peekable();
    let mut stats = SequenceStats::default();

    for f in opts.range.iter() {
        while let Some(change) = pending.next_if(|c| c.at <= f) {
            value = change.value;
            gauge.update(GaugeConfig::new(opts.size, value), clock.time_of(change.at));
            stats.changes_applied += 1;
            tracing::debug!(frame = change.at.0, value, "value change applied");
        }

        let mut surface = surface_for(&gauge, &opts.render)?;
        let frame = gauge.render(opts.size, value, clock.time_of(f), &mut surface)?;
        on_frame(f, &frame, surface.finish())?;
        stats.frames_rendered += 1;
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;

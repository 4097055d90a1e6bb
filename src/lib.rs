//! Liquid Gauge renders an animated circular progress gauge: a container of liquid whose
//! sinusoidal surface scrolls sideways while the level eases toward the target value, with a
//! numeric readout counting alongside.
//!
//! # Pipeline overview
//!
//! 1. **Geometry**: `size -> DerivedGeometry` (radii, margins, wave sizing)
//! 2. **Clip path**: `DerivedGeometry -> WaveClip` (sampled wave strip, built once per size)
//! 3. **Animate**: `AnimationDriver` samples scroll phase, fill level and counter at a timestamp
//! 4. **Compose**: static clip + live state -> `GaugeFrame` (translated clip, readout placement)
//! 5. **Draw**: `GaugeFrame -> Surface` (`CpuSurface` rasterizes to `FrameRGBA`)
//!
//! Rendering never fails because of the size, the value or a missing font: sizes are clamped,
//! values are clamped for the fill only, and the readout is dropped when no font can be used.
#![forbid(unsafe_code)]

mod animation;
mod compose;
mod foundation;
mod gauge;
mod geometry;
mod pipeline;
mod render;
mod settings;
mod text;
mod wave;

pub use animation::driver::{AnimationDriver, AnimationState, DriverTiming};
pub use animation::ease::Ease;
pub use animation::ramp::ScrollRamp;
pub use animation::tween::Tween;
pub use compose::{
    ClipTransform, GaugeFrame, Palette, TextPlacement, compose_frame, display_text,
    live_clip_path,
};
pub use foundation::core::{
    Affine, BezPath, Circle, Fps, FrameIndex, FrameRange, Millis, Point, Rgba8,
};
pub use foundation::error::{GaugeError, GaugeResult};
pub use gauge::{Effect, LiquidGauge, UpdateOutcome};
pub use geometry::{
    DerivedGeometry, GaugeConfig, MAX_VALUE, MIN_SIZE, MIN_VALUE, SAMPLES_PER_PERIOD,
    WaveMetrics, WaveParams, fill_fraction, sanitize_size,
};
pub use pipeline::{
    FrameClock, SequenceOpts, SequenceStats, ValueChange, render_frame, render_sequence,
};
pub use render::cpu::CpuSurface;
pub use render::recording::{DrawCall, RecordingSurface};
pub use render::{FrameRGBA, RenderSettings, Surface, TextDraw};
pub use settings::GaugeSettings;
pub use text::{FontAsset, NoFont, TextBrushRgba8, TextLayoutEngine, TextMetrics, metrics_for};
pub use wave::{WaveBoundary, WaveClip, sample_count};

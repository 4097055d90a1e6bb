//! Wave boundary sampling and the static clip path built from it.

use std::f64::consts::TAU;

use crate::foundation::core::{BezPath, Point};
use crate::geometry::{DerivedGeometry, SAMPLES_PER_PERIOD};

/// Number of boundary samples for `wave_clip_count` periods (inclusive of both ends).
pub fn sample_count(wave_clip_count: u32) -> usize {
    SAMPLES_PER_PERIOD * wave_clip_count as usize + 1
}

/// Sampled surface of the liquid in clip-local coordinates.
///
/// `upper` runs left to right over `[0, wave_clip_width]`, with `y = sin(2π·cycle) * wave_height`.
/// The lower edge is flat at `baseline` for every sample.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveBoundary {
    upper: Vec<Point>,
    baseline: f64,
}

impl WaveBoundary {
    pub fn sample(geometry: &DerivedGeometry) -> Self {
        let wave = &geometry.wave;
        let steps = SAMPLES_PER_PERIOD * wave.wave_clip_count as usize;
        let upper = (0..=steps)
            .map(|i| {
                let frac = i as f64 / steps as f64;
                let cycle = i as f64 / SAMPLES_PER_PERIOD as f64;
                Point::new(
                    frac * wave.wave_clip_width,
                    (cycle * TAU).sin() * wave.wave_height,
                )
            })
            .collect();

        Self {
            upper,
            baseline: geometry.fill_radius * 2.0 + wave.wave_height,
        }
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    pub fn upper(&self) -> &[Point] {
        &self.upper
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn lower(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.upper.iter().map(|p| Point::new(p.x, self.baseline))
    }

    /// Closed area between the wave and the baseline: forward along the wave, back along the
    /// baseline, then close.
    pub fn to_area_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut upper = self.upper.iter().copied();
        let Some(first) = upper.next() else {
            return path;
        };
        path.move_to(first);
        for p in upper {
            path.line_to(p);
        }
        for p in self.lower().rev() {
            path.line_to(p);
        }
        path.close_path();
        path
    }
}

/// The static clip mask for one geometry: built once per size, transformed every frame.
#[derive(Clone, Debug)]
pub struct WaveClip {
    boundary: WaveBoundary,
    path: BezPath,
}

impl WaveClip {
    #[tracing::instrument(level = "debug", skip_all, fields(size = geometry.size))]
    pub fn build(geometry: &DerivedGeometry) -> Self {
        let boundary = WaveBoundary::sample(geometry);
        let path = boundary.to_area_path();
        tracing::debug!(samples = boundary.len(), "wave clip synthesized");
        Self { boundary, path }
    }

    pub fn boundary(&self) -> &WaveBoundary {
        &self.boundary
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}

#[cfg(test)]
#[path = "../tests/unit/wave.rs"]
mod tests;

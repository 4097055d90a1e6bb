use crate::animation::ease::Ease;
use crate::animation::ramp::ScrollRamp;
use crate::animation::tween::Tween;
use crate::foundation::core::Millis;

/// Snapshot of the three animated scalars at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    /// Horizontal wave scroll, `[0, 1)`.
    pub scroll_phase: f64,
    /// Animated fill fraction, heading toward the clamped value / 100.
    pub fill_percent: f64,
    /// Animated readout value, heading toward the raw (unclamped) value.
    pub counter_value: f64,
}

/// Durations and easing shared by the driver's animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverTiming {
    pub fill_duration_ms: f64,
    pub scroll_period_ms: f64,
    pub ease: Ease,
}

impl Default for DriverTiming {
    fn default() -> Self {
        Self {
            fill_duration_ms: 1000.0,
            scroll_period_ms: 9000.0,
            ease: Ease::InOutQuad,
        }
    }
}

/// Owns the fill tween, the counter tween and the scroll ramp.
///
/// The three never read each other: retargeting one leaves the others' progress untouched.
/// After [`AnimationDriver::cancel_all`] the driver is frozen and ignores every later request.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    timing: DriverTiming,
    fill: Tween,
    counter: Tween,
    scroll: Option<ScrollRamp>,
    frozen: Option<AnimationState>,
}

impl AnimationDriver {
    pub fn new(timing: DriverTiming) -> Self {
        Self {
            timing,
            fill: Tween::settled(0.0),
            counter: Tween::settled(0.0),
            scroll: None,
            frozen: None,
        }
    }

    pub fn timing(&self) -> DriverTiming {
        self.timing
    }

    /// Begin or retarget the fill tween. Returns `false` once cancelled.
    pub fn set_target_fill(&mut self, fraction: f64, now: Millis) -> bool {
        if self.frozen.is_some() {
            tracing::debug!(fraction, "fill retarget ignored after teardown");
            return false;
        }
        self.fill.retarget(
            fraction,
            now,
            self.timing.fill_duration_ms,
            self.timing.ease,
        );
        tracing::debug!(from = self.fill.from_value(), to = fraction, "fill retargeted");
        true
    }

    /// Begin or retarget the counter tween. Returns `false` once cancelled.
    pub fn set_target_counter(&mut self, value: f64, now: Millis) -> bool {
        if self.frozen.is_some() {
            tracing::debug!(value, "counter retarget ignored after teardown");
            return false;
        }
        self.counter.retarget(
            value,
            now,
            self.timing.fill_duration_ms,
            self.timing.ease,
        );
        tracing::debug!(from = self.counter.from_value(), to = value, "counter retargeted");
        true
    }

    /// Start the endless scroll ramp. A running ramp is left alone so its phase stays continuous.
    pub fn start_scroll(&mut self, now: Millis) -> bool {
        if self.frozen.is_some() || self.scroll.is_some() {
            return false;
        }
        self.scroll = Some(ScrollRamp::new(now, self.timing.scroll_period_ms));
        true
    }

    pub fn is_scrolling(&self) -> bool {
        self.frozen.is_none() && self.scroll.is_some()
    }

    pub fn fill_tween(&self) -> &Tween {
        &self.fill
    }

    pub fn counter_tween(&self) -> &Tween {
        &self.counter
    }

    pub fn sample(&self, now: Millis) -> AnimationState {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        AnimationState {
            scroll_phase: self.scroll.map_or(0.0, |r| r.phase_at(now)),
            fill_percent: self.fill.value_at(now),
            counter_value: self.counter.value_at(now),
        }
    }

    /// Whether any scalar still changes after `now`.
    pub fn is_animating(&self, now: Millis) -> bool {
        self.is_scrolling() || !self.fill.is_finished(now) || !self.counter.is_finished(now)
    }

    /// Stop the ramp and every in-flight tween, freezing the state sampled at `now`.
    pub fn cancel_all(&mut self, now: Millis) -> AnimationState {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        let state = self.sample(now);
        self.scroll = None;
        self.fill = Tween::settled(state.fill_percent);
        self.counter = Tween::settled(state.counter_value);
        self.frozen = Some(state);
        tracing::debug!(?state, "animations cancelled");
        state
    }

    pub fn is_cancelled(&self) -> bool {
        self.frozen.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;

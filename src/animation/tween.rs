use crate::animation::ease::Ease;
use crate::foundation::core::Millis;

/// A time-bounded eased interpolation of one scalar.
///
/// Tweens are plain values sampled against the clock; nothing advances between samples.
/// Retargeting starts the replacement tween from the value sampled at the retarget instant, so
/// a target change never produces a jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    started_at: Millis,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    /// A tween that has already arrived at `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Millis::ZERO,
            duration_ms: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn new(from: f64, to: f64, started_at: Millis, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            started_at,
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    pub fn from_value(&self) -> f64 {
        self.from
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// Linear progress in `[0, 1]` before easing.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (now.since(self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Millis) -> f64 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        let t = self.ease.apply(p);
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        self.progress(now) >= 1.0
    }

    /// Replace this tween with one heading to `to`, starting from the current value at `now`.
    pub fn retarget(&mut self, to: f64, now: Millis, duration_ms: f64, ease: Ease) {
        let current = self.value_at(now);
        *self = Self::new(current, to, now, duration_ms, ease);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;

use crate::foundation::core::Millis;

/// Unbounded linear ramp from 0 to 1 that restarts at 0 every `period_ms`.
///
/// The phase is computed straight from elapsed time, so there is no repeat bookkeeping to
/// cancel or resynchronize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRamp {
    started_at: Millis,
    period_ms: f64,
}

impl ScrollRamp {
    pub fn new(started_at: Millis, period_ms: f64) -> Self {
        Self {
            started_at,
            period_ms,
        }
    }

    /// Phase in `[0, 1)` at `now`. Times before the start sample as phase 0.
    pub fn phase_at(&self, now: Millis) -> f64 {
        if !(self.period_ms > 0.0) {
            return 0.0;
        }
        let elapsed = now.since(self.started_at).max(0.0);
        let phase = elapsed.rem_euclid(self.period_ms) / self.period_ms;
        if phase >= 1.0 { 0.0 } else { phase }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ramp.rs"]
mod tests;

//! The mounted gauge: keyed input effects feeding the animation driver and the frame composer.

use crate::animation::driver::{AnimationDriver, AnimationState};
use crate::compose::{GaugeFrame, Palette, compose_frame};
use crate::foundation::core::Millis;
use crate::foundation::error::GaugeResult;
use crate::geometry::{DerivedGeometry, GaugeConfig, WaveParams, fill_fraction};
use crate::render::Surface;
use crate::settings::GaugeSettings;
use crate::text::{FontAsset, TextMetrics, metrics_for};
use crate::wave::WaveClip;

/// Runs its body only when the tracked key differs from the last one seen.
#[derive(Clone, Debug, Default)]
pub struct Effect<K> {
    last: Option<K>,
}

impl<K: PartialEq> Effect<K> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `key`; returns `true` when it changed (or on first use).
    pub fn track(&mut self, key: K) -> bool {
        if self.last.as_ref() == Some(&key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}

/// Identity key for a float input. `NaN == NaN` and `0.0 != -0.0`.
fn float_key(v: f64) -> u64 {
    v.to_bits()
}

/// Which effects re-ran during one [`LiquidGauge::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub geometry_rebuilt: bool,
    pub fill_retargeted: bool,
    pub counter_retargeted: bool,
}

impl UpdateOutcome {
    pub fn any(self) -> bool {
        self.geometry_rebuilt || self.fill_retargeted || self.counter_retargeted
    }
}

pub struct LiquidGauge {
    settings: GaugeSettings,
    params: WaveParams,
    palette: Palette,
    font: Option<FontAsset>,
    metrics: Box<dyn TextMetrics>,
    config: GaugeConfig,
    geometry: DerivedGeometry,
    clip: WaveClip,
    driver: AnimationDriver,
    size_effect: Effect<u64>,
    fill_effect: Effect<u64>,
    value_effect: Effect<u64>,
}

impl std::fmt::Debug for LiquidGauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidGauge")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("font", &self.font)
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}

impl LiquidGauge {
    /// Mount with the font named in `settings`, if any. An unreadable font is logged and the
    /// gauge renders without its readout.
    pub fn mount(settings: GaugeSettings, config: GaugeConfig, now: Millis) -> GaugeResult<Self> {
        let font = match settings.font.as_deref() {
            Some(path) => match FontAsset::load(path) {
                Ok(font) => Some(font),
                Err(err) => {
                    tracing::warn!(%err, "readout font not loaded");
                    None
                }
            },
            None => None,
        };
        Self::mount_inner(settings, config, font, now)
    }

    pub fn mount_with_font(
        settings: GaugeSettings,
        config: GaugeConfig,
        font: FontAsset,
        now: Millis,
    ) -> GaugeResult<Self> {
        Self::mount_inner(settings, config, Some(font), now)
    }

    #[tracing::instrument(level = "debug", skip(settings, font), fields(size = config.size, value = config.value))]
    fn mount_inner(
        settings: GaugeSettings,
        config: GaugeConfig,
        font: Option<FontAsset>,
        now: Millis,
    ) -> GaugeResult<Self> {
        settings.validate()?;
        let params = settings.wave_params();
        let geometry = DerivedGeometry::build(config.size, &params);
        let clip = WaveClip::build(&geometry);

        let mut gauge = Self {
            palette: Palette::from(&settings),
            metrics: metrics_for(font.as_ref()),
            driver: AnimationDriver::new(settings.timing()),
            settings,
            params,
            font,
            config,
            geometry,
            clip,
            size_effect: Effect::new(),
            fill_effect: Effect::new(),
            value_effect: Effect::new(),
        };
        // Geometry is already built for this size.
        gauge.size_effect.track(float_key(config.size));
        gauge.update(config, now);
        gauge.driver.start_scroll(now);
        Ok(gauge)
    }

    /// Replace the readout metrics, e.g. with a host-provided text measurer.
    pub fn set_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
    }

    /// Feed new inputs. Each effect re-runs only when its own key changed.
    pub fn update(&mut self, config: GaugeConfig, now: Millis) -> UpdateOutcome {
        self.config = config;
        let mut out = UpdateOutcome::default();

        if self.size_effect.track(float_key(config.size)) {
            self.geometry = DerivedGeometry::build(config.size, &self.params);
            self.clip = WaveClip::build(&self.geometry);
            tracing::debug!(size = self.geometry.size, "geometry rebuilt");
            out.geometry_rebuilt = true;
        }

        let fraction = fill_fraction(config.value);
        if self.fill_effect.track(float_key(fraction)) {
            out.fill_retargeted = self.driver.set_target_fill(fraction, now);
        }

        if self.value_effect.track(float_key(config.value)) {
            out.counter_retargeted = self.driver.set_target_counter(config.value, now);
        }
        if out.any() {
            tracing::debug!(?out, "gauge inputs changed");
        }
        out
    }

    /// Compose the frame for `now` from the current inputs.
    pub fn frame(&mut self, now: Millis) -> GaugeFrame {
        let state = self.driver.sample(now);
        compose_frame(
            &self.geometry,
            &self.clip,
            state,
            self.palette,
            self.metrics.as_mut(),
            now,
        )
    }

    /// Update inputs, compose the frame at `now` and draw it onto `surface`.
    #[tracing::instrument(level = "debug", skip(self, surface))]
    pub fn render(
        &mut self,
        size: f64,
        value: f64,
        now: Millis,
        surface: &mut dyn Surface,
    ) -> GaugeResult<GaugeFrame> {
        self.update(GaugeConfig::new(size, value), now);
        let frame = self.frame(now);
        frame.draw(surface)?;
        Ok(frame)
    }

    pub fn settings(&self) -> &GaugeSettings {
        &self.settings
    }

    pub fn config(&self) -> GaugeConfig {
        self.config
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    pub fn clip(&self) -> &WaveClip {
        &self.clip
    }

    pub fn font(&self) -> Option<&FontAsset> {
        self.font.as_ref()
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn state(&self, now: Millis) -> AnimationState {
        self.driver.sample(now)
    }

    pub fn is_animating(&self, now: Millis) -> bool {
        self.driver.is_animating(now)
    }

    /// Tear down: cancel the scroll and both tweens, returning the state they froze at.
    pub fn unmount(mut self, now: Millis) -> AnimationState {
        let state = self.driver.cancel_all(now);
        tracing::debug!(?state, "gauge unmounted");
        state
    }
}

#[cfg(test)]
#[path = "../tests/unit/gauge.rs"]
mod tests;

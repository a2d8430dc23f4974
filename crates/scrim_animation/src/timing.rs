//! Timed transitions
//!
//! A `TimingAnimation` moves a scalar from one value to another over a fixed
//! duration, shaped by an easing curve. It is advanced explicitly with
//! `tick(dt_ms)`; the scheduler owns the clock.

use crate::easing::Easing;
use crate::values::Interpolate;

/// Parameters for a timed transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing applied to linear progress
    pub easing: Easing,
    /// Whether the host may run this transition on its native/compositor driver
    pub use_native_driver: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::EaseInOut,
            use_native_driver: false,
        }
    }
}

impl TimingConfig {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn native_driver(mut self, enabled: bool) -> Self {
        self.use_native_driver = enabled;
        self
    }
}

/// A single from/to transition
#[derive(Clone, Debug)]
pub struct TimingAnimation {
    from: f32,
    to: f32,
    config: TimingConfig,
    /// Elapsed time in milliseconds
    elapsed_ms: f32,
    finished: bool,
}

impl TimingAnimation {
    pub fn new(from: f32, to: f32, config: TimingConfig) -> Self {
        Self {
            from,
            to,
            config,
            elapsed_ms: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn uses_native_driver(&self) -> bool {
        self.config.use_native_driver
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear progress (0.0 to 1.0)
    ///
    /// A zero-duration transition reports 0 until its first tick and 1 after.
    pub fn progress(&self) -> f32 {
        if self.config.duration_ms == 0 {
            return if self.finished { 1.0 } else { 0.0 };
        }
        (self.elapsed_ms / self.config.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        if self.finished {
            return self.to;
        }
        let eased = self.config.easing.apply(self.progress());
        self.from.lerp(&self.to, eased)
    }

    /// Advance by `dt_ms` milliseconds
    ///
    /// Returns true exactly once: on the tick that completes the transition.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.config.duration_ms as f32 {
            self.elapsed_ms = self.config.duration_ms as f32;
            self.finished = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_timing() {
        let mut anim = TimingAnimation::new(0.0, 100.0, TimingConfig::new(1000).easing(Easing::Linear));
        assert_eq!(anim.value(), 0.0);

        assert!(!anim.tick(500.0));
        assert!((anim.value() - 50.0).abs() < 1e-4);

        assert!(anim.tick(500.0));
        assert_eq!(anim.value(), 100.0);
        assert!(anim.is_finished());

        // Completion is reported once
        assert!(!anim.tick(16.0));
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let mut anim = TimingAnimation::new(1.0, 0.0, TimingConfig::new(0));
        assert_eq!(anim.value(), 1.0);
        assert_eq!(anim.progress(), 0.0);

        assert!(anim.tick(0.0));
        assert_eq!(anim.value(), 0.0);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_eased_value_stays_between_endpoints() {
        let mut anim =
            TimingAnimation::new(1.0, 0.0, TimingConfig::new(300).easing(Easing::EaseInOutCubic));
        let mut prev = anim.value();
        while !anim.is_finished() {
            anim.tick(16.0);
            let v = anim.value();
            assert!((0.0..=1.0).contains(&v));
            assert!(v <= prev + 1e-6);
            prev = v;
        }
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut anim = TimingAnimation::new(0.0, 1.0, TimingConfig::new(100));
        anim.tick(-50.0);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn test_config_defaults() {
        let config = TimingConfig::default();
        assert_eq!(config.duration_ms, 300);
        assert!(!config.use_native_driver);
        assert!(TimingConfig::new(10).native_driver(true).use_native_driver);
    }
}

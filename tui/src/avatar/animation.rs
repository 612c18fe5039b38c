//! Animation Engine
//!
//! Tracks elapsed time for a group of animations and samples the core's
//! animation tokens against it. The app keeps one engine for ambient loops
//! (breathing, pulses, shimmer) and restarts dedicated engines for entrance
//! effects when a view or the celebration overlay opens.

use std::time::Duration;

use shine_core::{AnimationSpec, AnimationToken};

/// Elapsed-time clock for token-driven animations
#[derive(Clone, Debug, Default)]
pub struct AnimationEngine {
    /// Time since the last restart
    elapsed: Duration,
}

impl AnimationEngine {
    /// Create an engine at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock (call every frame)
    pub fn update(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Rewind to time zero
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Time since the last restart
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Eased value of `token` at the current time
    pub fn sample(&self, token: AnimationToken) -> f32 {
        token.spec().sample(self.elapsed)
    }

    /// Eased value of `token` with the clock shifted by `delay`
    ///
    /// Returns `None` until the delay has passed.
    pub fn sample_delayed(&self, spec: &AnimationSpec, delay: Duration) -> Option<f32> {
        self.elapsed
            .checked_sub(delay)
            .map(|local| spec.sample(local))
    }

    /// Whether a one-shot `token` has completed
    pub fn is_finished(&self, token: AnimationToken) -> bool {
        token.spec().is_finished(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_and_restart() {
        let mut engine = AnimationEngine::new();
        engine.update(Duration::from_millis(250));
        engine.update(Duration::from_millis(250));
        assert_eq!(engine.elapsed(), Duration::from_millis(500));
        assert!(engine.is_finished(AnimationToken::FadeInUp));

        engine.restart();
        assert!(!engine.is_finished(AnimationToken::FadeInUp));
    }

    #[test]
    fn test_breathe_peaks_half_way() {
        let mut engine = AnimationEngine::new();
        engine.update(Duration::from_millis(1500));
        assert!(engine.sample(AnimationToken::AvatarBreathe) > 0.99);
    }

    #[test]
    fn test_delayed_sample() {
        let mut engine = AnimationEngine::new();
        let spec = AnimationToken::CelebrationBurst.spec();
        engine.update(Duration::from_millis(100));
        assert_eq!(engine.sample_delayed(&spec, Duration::from_millis(200)), None);
        engine.update(Duration::from_secs(1));
        let value = engine.sample_delayed(&spec, Duration::from_millis(200));
        assert!(value.is_some_and(|v| (v - 1.0).abs() < 0.001));
    }
}

//! Damped velocity estimation.
//!
//! Raw per-sample velocity is noisy at high input rates, so each new sample is
//! blended into the running estimate with a first order low-pass filter whose
//! cutoff is 10 Hz. The faster samples arrive, the smaller each one's weight.

use crate::constants::{COLD_START_VELOCITY, SCROLL_VELOCITY_DAMPENING_RC};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityEstimator {
    velocity: f32,
    last_timestamp_ms: Option<i64>,
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current damped velocity in px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Zero the estimate and take `timestamp_ms` as the previous sample time.
    pub fn reset(&mut self, timestamp_ms: i64) {
        self.velocity = 0.0;
        self.last_timestamp_ms = Some(timestamp_ms);
    }

    /// Feed a displacement `delta` observed at `now_ms` and return the damped velocity.
    ///
    /// Without a previous timestamp, or when time did not advance, the sample
    /// velocity is zero.
    pub fn compute(&mut self, delta: f32, now_ms: i64) -> f32 {
        let elapsed = match self.last_timestamp_ms {
            Some(previous) => (now_ms - previous) as f32,
            None => 0.0,
        };
        self.last_timestamp_ms = Some(now_ms);

        let sample = if elapsed > 0.0 { delta / elapsed } else { 0.0 };
        if self.velocity.abs() < COLD_START_VELOCITY {
            self.velocity = sample;
        } else {
            let alpha = dampening_factor(elapsed.max(0.0));
            self.velocity = interpolate(self.velocity, sample, alpha);
        }
        self.velocity
    }
}

fn dampening_factor(elapsed_ms: f32) -> f32 {
    elapsed_ms / (SCROLL_VELOCITY_DAMPENING_RC + elapsed_ms)
}

fn interpolate(from: f32, to: f32, alpha: f32) -> f32 {
    (1.0 - alpha) * from + alpha * to
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_takes_sample_velocity() {
        let mut estimator = VelocityEstimator::new();
        estimator.reset(0);

        let velocity = estimator.compute(32.0, 16);

        assert!((velocity - 2.0).abs() < 1e-6);
    }

    #[test]
    fn first_sample_without_timestamp_is_zero() {
        let mut estimator = VelocityEstimator::new();
        assert_eq!(estimator.compute(50.0, 1_000), 0.0);
    }

    #[test]
    fn zero_elapsed_time_keeps_estimate() {
        let mut estimator = VelocityEstimator::new();
        estimator.reset(0);
        estimator.compute(16.0, 16);

        let velocity = estimator.compute(100.0, 16);

        assert!((velocity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn damping_converges_monotonically() {
        let mut estimator = VelocityEstimator::new();
        estimator.reset(0);
        // Cold start at 0.5 px/ms, then a steady 3 px/ms.
        estimator.compute(8.0, 16);

        let mut time = 16;
        let mut previous = estimator.velocity();
        for _ in 0..40 {
            time += 16;
            let velocity = estimator.compute(48.0, time);
            assert!(velocity > previous, "{velocity} should exceed {previous}");
            assert!(velocity <= 3.0 + 1e-4);
            previous = velocity;
        }
        assert!((previous - 3.0).abs() < 0.01);
    }

    #[test]
    fn blend_weight_matches_filter_constant() {
        let mut estimator = VelocityEstimator::new();
        estimator.reset(0);
        estimator.compute(16.0, 16);

        let velocity = estimator.compute(0.0, 32);

        let alpha = 16.0 / (SCROLL_VELOCITY_DAMPENING_RC + 16.0);
        assert!((velocity - (1.0 - alpha)).abs() < 1e-6);
    }
}

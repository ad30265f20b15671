use crate::constants::{
    BASE_DURATION_MS, MIN_DURATION_MS, MIN_TRAVEL_FRACTION, MIN_VELOCITY_DIVISOR,
};

/// Settle duration in ms for a release at `velocity` px/ms that still has to
/// cover `progress_needed` of the full range.
///
/// Faster releases settle faster. The divisor floor caps the duration for
/// near-zero velocities, the travel floor keeps short settles perceptible, and
/// the result never drops below [`MIN_DURATION_MS`].
pub fn calculate_duration(velocity: f32, progress_needed: f32) -> i64 {
    let velocity_divisor = (0.5 * velocity).abs().max(MIN_VELOCITY_DIVISOR);
    let travel_distance = progress_needed.max(MIN_TRAVEL_FRACTION);
    let duration = (BASE_DURATION_MS / velocity_divisor * travel_distance).max(MIN_DURATION_MS) as i64;
    log::trace!("calculate_duration={duration} v={velocity} d={progress_needed}");
    duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_full_range_takes_half_base_duration() {
        assert_eq!(calculate_duration(0.0, 1.0), 600);
    }

    #[test]
    fn short_fast_settle_hits_the_floor() {
        assert_eq!(calculate_duration(10.0, 0.05), 100);
    }

    #[test]
    fn faster_release_is_shorter() {
        let slow = calculate_duration(5.0, 0.8);
        let fast = calculate_duration(-8.0, 0.8);
        assert_eq!(slow, 384);
        assert_eq!(fast, 240);
    }

    #[test]
    fn direction_of_velocity_does_not_matter() {
        assert_eq!(calculate_duration(6.0, 0.5), calculate_duration(-6.0, 0.5));
    }

    #[test]
    fn travel_floor_applies_to_tiny_distances() {
        assert_eq!(calculate_duration(0.0, 0.0), calculate_duration(0.0, 0.2));
        assert_eq!(calculate_duration(0.0, 0.2), 120);
    }
}

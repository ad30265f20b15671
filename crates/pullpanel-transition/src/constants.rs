//! Transition tuning constants.

/// Full-range settle duration, in ms, at the slowest release velocity.
pub const BASE_DURATION_MS: f32 = 1200.0;

/// Shortest settle animation, in ms.
pub const MIN_DURATION_MS: f32 = 100.0;

/// Remaining travel below this fraction of the range is timed as if it were this long.
pub const MIN_TRAVEL_FRACTION: f32 = 0.2;

/// Velocity divisor floor; bounds the longest settle duration.
pub const MIN_VELOCITY_DIVISOR: f32 = 2.0;

/// Fraction of progress near each endpoint where a settling panel cannot be
/// re-caught in both directions.
pub const RECATCH_REJECTION_FRACTION: f32 = 0.0875;

/// Frame interval used to predict the next frame of a released drag.
pub const SINGLE_FRAME_MS: f32 = 16.0;

/// Workspace translation relative to the panel.
pub const PARALLAX_COEFFICIENT: f32 = 0.125;

/// Shift range used until the layout reports a real one.
pub const DEFAULT_SHIFT_RANGE: f32 = 10.0;

/// Settle duration, in ms, for programmatic transitions.
pub const DEFAULT_DURATION_MS: i64 = 300;

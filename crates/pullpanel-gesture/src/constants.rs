//! Shared gesture constants for swipe recognition.
//!
//! Distances are in logical pixels and velocities in pixels per millisecond,
//! the unit the recognizer reports to its listener.

/// Touch slop in logical pixels.
///
/// A pointer has to travel further than this along the swipe axis (and further
/// than it wandered along the cross axis) before a drag is recognised.
pub const TOUCH_SLOP: f32 = 8.0;

/// Minimum release velocity, in px/ms, that counts as a fling.
///
/// The comparison is strict: a release at exactly this speed is not a fling.
pub const RELEASE_VELOCITY_PX_MS: f32 = 1.0;

/// Time constant of the low-pass filter applied to scroll velocity.
///
/// Cutoff frequency is 10 Hz, so `RC = 1000 / (2π · 10)` milliseconds.
pub const SCROLL_VELOCITY_DAMPENING_RC: f32 = 1000.0 / (2.0 * std::f32::consts::PI * 10.0);

/// Below this magnitude the damped velocity is treated as "at rest" and the
/// next sample replaces it outright instead of being blended in.
pub const COLD_START_VELOCITY: f32 = 0.001;

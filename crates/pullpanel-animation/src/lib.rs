//! Animation primitives for Pullpanel.
//!
//! Provides easing curves and frame-driven tweens with cancellable handles.

pub mod easing;
pub mod tween;

pub use easing::{Easing, FAST_FLING_PX_MS};
pub use tween::{AnimationHandle, AnimationResult, ProgressTween, TweenFrame, TweenSpec};

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

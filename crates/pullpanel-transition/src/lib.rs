//! Progress-driven panel transition for Pullpanel.
//!
//! [`TransitionController`] owns a [`SwipeDetector`](pullpanel_gesture::SwipeDetector)
//! and maps its drags onto a single progress value between the revealed
//! (0) and hidden (1) endpoints, then settles to one of them on release.

pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod duration;
pub mod error;
pub mod host;
pub mod visuals;

pub use clock::{Clock, MonotonicClock};
pub use config::TransitionConfig;
pub use controller::{Settle, SettleStart, TransitionController};
pub use duration::calculate_duration;
pub use error::TransitionError;
pub use host::{Endpoint, TransitionHost};
pub use visuals::ProgressVisuals;

pub mod prelude {
    pub use super::config::TransitionConfig;
    pub use super::controller::{SettleStart, TransitionController};
    pub use super::host::{Endpoint, TransitionHost};
    pub use super::visuals::ProgressVisuals;
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

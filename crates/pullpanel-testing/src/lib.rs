//! Testing utilities and harness for Pullpanel

pub mod assertions;
pub mod clock;
pub mod frames;
pub mod host;
pub mod listener;
pub mod script;

pub use assertions::{assert_approx_eq, assert_monotonic};
pub use clock::ManualClock;
pub use frames::{FrameDriver, FRAME_INTERVAL_NANOS};
pub use host::RecordingHost;
pub use listener::RecordingListener;
pub use script::GestureScript;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::clock::ManualClock;
    pub use crate::frames::FrameDriver;
    pub use crate::host::RecordingHost;
    pub use crate::listener::RecordingListener;
    pub use crate::script::GestureScript;
}

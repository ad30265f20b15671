//! Swipe recognition for Pullpanel.
//!
//! [`SwipeDetector`] turns raw pointer samples into drag callbacks along a
//! single axis, with slop detection, damped velocity and re-catch of settling
//! content.

pub mod axis;
pub mod conditions;
pub mod constants;
pub mod detector;
pub mod types;
pub mod velocity;

pub use axis::Axis;
pub use conditions::ScrollConditions;
pub use detector::{
    DragEvent, DragEventQueue, DragListener, SwipeConfig, SwipeDetector, SwipeState,
};
pub use types::{Point, PointerAction, PointerId, PointerSample};
pub use velocity::VelocityEstimator;

pub mod prelude {
    pub use super::axis::Axis;
    pub use super::conditions::ScrollConditions;
    pub use super::detector::{DragEvent, DragListener, SwipeDetector, SwipeState};
    pub use super::types::{PointerAction, PointerSample};
}

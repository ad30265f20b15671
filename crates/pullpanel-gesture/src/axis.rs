use crate::types::Point;

/// Selects which coordinate a [`SwipeDetector`](crate::SwipeDetector) measures
/// displacement along.
///
/// The other coordinate becomes the slop axis: wandering along it raises the
/// distance a pointer has to travel before a drag is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Displacement is measured along y, slop along x.
    #[default]
    Vertical,

    /// Displacement is measured along x, slop along y.
    Horizontal,
}

impl Axis {
    /// Signed distance from `reference` to `position` along this axis.
    #[inline]
    pub fn displacement(self, position: Point, reference: Point) -> f32 {
        match self {
            Axis::Vertical => position.y - reference.y,
            Axis::Horizontal => position.x - reference.x,
        }
    }

    /// Unsigned distance from `down` to `position` along the cross axis.
    #[inline]
    pub fn active_touch_slop(self, position: Point, down: Point) -> f32 {
        match self {
            Axis::Vertical => (position.x - down.x).abs(),
            Axis::Horizontal => (position.y - down.y).abs(),
        }
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// Identifier of a pointer (finger, stylus or mouse) as assigned by the platform.
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// First pointer of a gesture went down.
    Down,
    /// A secondary pointer went down while another one is already pressed.
    PointerDown,
    Move,
    /// A secondary pointer was lifted while at least one other stays down.
    PointerUp,
    /// Last pointer was lifted.
    Up,
    Cancel,
}

/// A single raw pointer sample.
///
/// Samples are produced by the platform layer and consumed one at a time by
/// [`SwipeDetector`](crate::SwipeDetector); nothing keeps them past the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: i64,
    pub pointer_id: PointerId,
    pub action: PointerAction,
}

impl PointerSample {
    pub fn new(action: PointerAction, x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            pointer_id: 0,
            action,
        }
    }

    /// Set the pointer this sample belongs to.
    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

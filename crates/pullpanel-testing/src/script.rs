//! Scripted pointer input.
//!
//! Builds the sample stream a platform would deliver for a gesture, with
//! timestamps advancing by a fixed step per event.

use pullpanel_gesture::{Point, PointerAction, PointerId, PointerSample};

/// Default spacing between generated samples, in ms.
pub const DEFAULT_STEP_MS: i64 = 10;

#[derive(Debug, Clone)]
pub struct GestureScript {
    samples: Vec<PointerSample>,
    pointers: Vec<(PointerId, Point)>,
    active: PointerId,
    time_ms: i64,
    step_ms: i64,
}

impl Default for GestureScript {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureScript {
    pub fn new() -> Self {
        Self::starting_at_time(0)
    }

    pub fn starting_at_time(time_ms: i64) -> Self {
        Self {
            samples: Vec::new(),
            pointers: Vec::new(),
            active: 0,
            time_ms,
            step_ms: DEFAULT_STEP_MS,
        }
    }

    /// Time between subsequent samples.
    pub fn step(mut self, step_ms: i64) -> Self {
        self.step_ms = step_ms;
        self
    }

    /// Let time pass without input.
    pub fn wait(mut self, ms: i64) -> Self {
        self.time_ms += ms;
        self
    }

    /// First pointer down at the current time.
    pub fn down(mut self, x: f32, y: f32) -> Self {
        self.pointers.clear();
        self.active = 0;
        self.pointers.push((0, Point::new(x, y)));
        self.push(PointerAction::Down, 0, Point::new(x, y));
        self
    }

    /// Move the active pointer by `(dx, dy)`.
    pub fn move_by(self, dx: f32, dy: f32) -> Self {
        let current = self.position_of(self.active);
        self.move_to(current.x + dx, current.y + dy)
    }

    /// Move the active pointer to `(x, y)`.
    pub fn move_to(self, x: f32, y: f32) -> Self {
        let active = self.active;
        self.move_pointer(active, x, y)
    }

    pub fn move_pointer(mut self, pointer: PointerId, x: f32, y: f32) -> Self {
        self.time_ms += self.step_ms;
        let position = Point::new(x, y);
        self.set_position(pointer, position);
        self.push(PointerAction::Move, pointer, position);
        self
    }

    /// Secondary pointer down.
    pub fn pointer_down(mut self, pointer: PointerId, x: f32, y: f32) -> Self {
        self.time_ms += self.step_ms;
        let position = Point::new(x, y);
        self.set_position(pointer, position);
        self.push(PointerAction::PointerDown, pointer, position);
        self
    }

    /// Secondary pointer up; tracking moves to the first remaining pointer.
    pub fn pointer_up(mut self, pointer: PointerId) -> Self {
        self.time_ms += self.step_ms;
        let position = self.position_of(pointer);
        self.pointers.retain(|(id, _)| *id != pointer);
        if self.active == pointer {
            if let Some((next, _)) = self.pointers.first() {
                self.active = *next;
            }
        }
        self.push(PointerAction::PointerUp, pointer, position);
        self
    }

    /// Lift the last pointer.
    pub fn up(mut self) -> Self {
        self.finish(PointerAction::Up);
        self
    }

    pub fn cancel(mut self) -> Self {
        self.finish(PointerAction::Cancel);
        self
    }

    pub fn samples(&self) -> &[PointerSample] {
        &self.samples
    }

    pub fn build(self) -> Vec<PointerSample> {
        self.samples
    }

    /// Timestamp of the last generated sample.
    pub fn now_ms(&self) -> i64 {
        self.time_ms
    }

    fn finish(&mut self, action: PointerAction) {
        self.time_ms += self.step_ms;
        let active = self.active;
        let position = self.position_of(active);
        self.pointers.clear();
        self.push(action, active, position);
    }

    fn push(&mut self, action: PointerAction, pointer: PointerId, position: Point) {
        self.samples.push(
            PointerSample::new(action, position.x, position.y, self.time_ms).with_pointer(pointer),
        );
    }

    fn position_of(&self, pointer: PointerId) -> Point {
        self.pointers
            .iter()
            .find(|(id, _)| *id == pointer)
            .map(|(_, position)| *position)
            .or_else(|| self.samples.last().map(PointerSample::position))
            .unwrap_or(Point::ZERO)
    }

    fn set_position(&mut self, pointer: PointerId, position: Point) {
        match self.pointers.iter_mut().find(|(id, _)| *id == pointer) {
            Some(entry) => entry.1 = position,
            None => self.pointers.push((pointer, position)),
        }
    }
}

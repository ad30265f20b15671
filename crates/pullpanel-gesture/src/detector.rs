//! One dimensional swipe recognizer.
//!
//! Besides recognising the drag itself, the detector keeps tracking while the
//! dragged content settles, so a new touch during the settle animation can
//! re-catch it.
//!
//! ```text
//! Idle         --(slop + direction gate)--> Dragging      on_drag_start(true)
//! Idle         --(fast downward motion)---> DraggingDown  on_drag_start_down(true)
//! Settling     --(down, ignore slop)------> Dragging      on_drag_start(false)
//! Settling     --(mirrored gate)----------> DraggingDown  on_drag_start_down(false)
//! Dragging     --(up / cancel)------------> Settling      on_drag_end
//! DraggingDown --(up / cancel)------------> Settling      on_drag_end_down
//! Settling     --(finished_scrolling)-----> Idle
//! ```

use smallvec::SmallVec;

use crate::axis::Axis;
use crate::conditions::ScrollConditions;
use crate::constants::{RELEASE_VELOCITY_PX_MS, TOUCH_SLOP};
use crate::types::{Point, PointerAction, PointerId, PointerSample};
use crate::velocity::VelocityEstimator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipeState {
    /// No touch and no animation.
    #[default]
    Idle,
    /// Reporting `on_drag`.
    Dragging,
    /// Reporting `on_drag_down`.
    DraggingDown,
    /// Released; the owner is animating towards an endpoint.
    Settling,
}

/// Receives the recognizer's callbacks.
///
/// `is_new_drag` is false when the drag re-catches content that was settling.
pub trait DragListener {
    fn on_drag_start(&mut self, is_new_drag: bool);
    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool;
    fn on_drag_end(&mut self, velocity: f32, is_fling: bool);

    fn on_drag_start_down(&mut self, is_new_drag: bool);
    fn on_drag_down(&mut self, displacement: f32, velocity: f32) -> bool;
    fn on_drag_end_down(&mut self, velocity: f32, is_fling: bool);
}

/// A recorded [`DragListener`] callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    DragStart { is_new_drag: bool },
    Drag { displacement: f32, velocity: f32 },
    DragEnd { velocity: f32, is_fling: bool },
    DragStartDown { is_new_drag: bool },
    DragDown { displacement: f32, velocity: f32 },
    DragEndDown { velocity: f32, is_fling: bool },
}

impl DragEvent {
    /// Replay this event on `listener`, returning what the listener returned
    /// (`true` for callbacks without a result).
    pub fn dispatch<L: DragListener + ?Sized>(self, listener: &mut L) -> bool {
        match self {
            DragEvent::DragStart { is_new_drag } => {
                listener.on_drag_start(is_new_drag);
                true
            }
            DragEvent::Drag {
                displacement,
                velocity,
            } => listener.on_drag(displacement, velocity),
            DragEvent::DragEnd { velocity, is_fling } => {
                listener.on_drag_end(velocity, is_fling);
                true
            }
            DragEvent::DragStartDown { is_new_drag } => {
                listener.on_drag_start_down(is_new_drag);
                true
            }
            DragEvent::DragDown {
                displacement,
                velocity,
            } => listener.on_drag_down(displacement, velocity),
            DragEvent::DragEndDown { velocity, is_fling } => {
                listener.on_drag_end_down(velocity, is_fling);
                true
            }
        }
    }
}

/// Listener that buffers callbacks instead of reacting to them.
///
/// An owner that also holds the detector cannot be borrowed as its listener
/// during [`SwipeDetector::on_pointer_event`]; it feeds the detector a queue
/// and dispatches the drained events afterwards. Buffered `on_drag` calls
/// report `true`.
#[derive(Debug, Default)]
pub struct DragEventQueue {
    events: SmallVec<[DragEvent; 4]>,
}

impl DragEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DragEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = DragEvent> + '_ {
        self.events.drain(..)
    }
}

impl DragListener for DragEventQueue {
    fn on_drag_start(&mut self, is_new_drag: bool) {
        self.events.push(DragEvent::DragStart { is_new_drag });
    }

    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool {
        self.events.push(DragEvent::Drag {
            displacement,
            velocity,
        });
        true
    }

    fn on_drag_end(&mut self, velocity: f32, is_fling: bool) {
        self.events.push(DragEvent::DragEnd { velocity, is_fling });
    }

    fn on_drag_start_down(&mut self, is_new_drag: bool) {
        self.events.push(DragEvent::DragStartDown { is_new_drag });
    }

    fn on_drag_down(&mut self, displacement: f32, velocity: f32) -> bool {
        self.events.push(DragEvent::DragDown {
            displacement,
            velocity,
        });
        true
    }

    fn on_drag_end_down(&mut self, velocity: f32, is_fling: bool) {
        self.events.push(DragEvent::DragEndDown { velocity, is_fling });
    }
}

/// Tunables for a [`SwipeDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub axis: Axis,
    /// Minimum travel, in px, before a drag is recognised.
    pub touch_slop: f32,
    /// Release speed, in px/ms, that must be exceeded for a fling.
    pub release_velocity: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            touch_slop: TOUCH_SLOP,
            release_velocity: RELEASE_VELOCITY_PX_MS,
        }
    }
}

impl SwipeConfig {
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }
}

pub struct SwipeDetector {
    config: SwipeConfig,
    state: SwipeState,
    scroll_conditions: ScrollConditions,
    ignore_slop_when_settling: bool,
    two_direction: bool,
    active_pointer: Option<PointerId>,
    /// Last known position of every pressed pointer, for hand-off on pointer up.
    pointers: SmallVec<[(PointerId, Point); 4]>,
    down_pos: Point,
    last_pos: Point,
    velocity: VelocityEstimator,
    displacement: f32,
    last_displacement: f32,
    /// Dead zone consumed by slop detection, removed from reported displacement.
    subtract_displacement: f32,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: SwipeState::Idle,
            scroll_conditions: ScrollConditions::NONE,
            ignore_slop_when_settling: false,
            two_direction: false,
            active_pointer: None,
            pointers: SmallVec::new(),
            down_pos: Point::ZERO,
            last_pos: Point::ZERO,
            velocity: VelocityEstimator::new(),
            displacement: 0.0,
            last_displacement: 0.0,
            subtract_displacement: 0.0,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Enable the [`SwipeState::DraggingDown`] state reached through the mirrored gate.
    pub fn set_two_direction(&mut self, two_direction: bool) {
        self.two_direction = two_direction;
    }

    pub fn set_scroll_conditions(
        &mut self,
        conditions: ScrollConditions,
        ignore_slop_when_settling: bool,
    ) {
        self.scroll_conditions = conditions;
        self.ignore_slop_when_settling = ignore_slop_when_settling;
    }

    pub fn scroll_conditions(&self) -> ScrollConditions {
        self.scroll_conditions
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SwipeState::Idle
    }

    pub fn is_settling(&self) -> bool {
        self.state == SwipeState::Settling
    }

    pub fn is_dragging(&self) -> bool {
        self.state == SwipeState::Dragging
    }

    pub fn is_dragging_down(&self) -> bool {
        self.state == SwipeState::DraggingDown
    }

    pub fn is_dragging_or_settling(&self) -> bool {
        matches!(self.state, SwipeState::Dragging | SwipeState::Settling)
    }

    /// Raw displacement of the active pointer from the down reference.
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Damped velocity in px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity.velocity()
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    /// Return to [`SwipeState::Idle`] once the settle animation is over.
    pub fn finished_scrolling(&mut self) {
        if self.state != SwipeState::Idle {
            log::debug!("swipe state {:?} -> Idle", self.state);
            self.state = SwipeState::Idle;
        }
    }

    /// Process one pointer sample. Always reports the sample as handled.
    pub fn on_pointer_event<L: DragListener + ?Sized>(
        &mut self,
        sample: &PointerSample,
        listener: &mut L,
    ) -> bool {
        match sample.action {
            PointerAction::Down => self.on_down(sample, listener),
            PointerAction::PointerDown => self.track(sample.pointer_id, sample.position()),
            PointerAction::PointerUp => self.on_pointer_up(sample),
            PointerAction::Move => self.on_move(sample, listener),
            PointerAction::Up | PointerAction::Cancel => {
                self.pointers.clear();
                if matches!(
                    self.state,
                    SwipeState::Dragging | SwipeState::DraggingDown
                ) {
                    self.set_state(SwipeState::Settling, listener);
                }
            }
        }
        true
    }

    fn on_down<L: DragListener + ?Sized>(&mut self, sample: &PointerSample, listener: &mut L) {
        let position = sample.position();
        self.active_pointer = Some(sample.pointer_id);
        self.pointers.clear();
        self.pointers.push((sample.pointer_id, position));
        self.down_pos = position;
        self.last_pos = position;
        self.last_displacement = 0.0;
        self.displacement = 0.0;
        self.velocity.reset(sample.timestamp_ms);

        if self.state == SwipeState::Settling && self.ignore_slop_when_settling {
            self.set_state(SwipeState::Dragging, listener);
        }
    }

    fn on_pointer_up(&mut self, sample: &PointerSample) {
        let lifted = sample.pointer_id;
        self.pointers.retain(|(id, _)| *id != lifted);
        if self.active_pointer != Some(lifted) {
            return;
        }

        match self.pointers.first().copied() {
            Some((next_id, next_pos)) => {
                // Shift the reference so displacement continues without a jump.
                self.down_pos = next_pos - (self.last_pos - self.down_pos);
                self.last_pos = next_pos;
                self.active_pointer = Some(next_id);
                log::debug!("swipe tracking moved from pointer {lifted} to {next_id}");
            }
            None => {
                log::warn!("pointer {lifted} lifted with no other pointer to track");
                self.active_pointer = None;
            }
        }
    }

    fn on_move<L: DragListener + ?Sized>(&mut self, sample: &PointerSample, listener: &mut L) {
        let position = sample.position();
        if self.active_pointer != Some(sample.pointer_id) {
            if !self.track_existing(sample.pointer_id, position) {
                log::trace!("ignoring move for untracked pointer {}", sample.pointer_id);
            }
            return;
        }
        self.track(sample.pointer_id, position);

        let axis = self.config.axis;
        self.displacement = axis.displacement(position, self.down_pos);
        let velocity = self
            .velocity
            .compute(axis.displacement(position, self.last_pos), sample.timestamp_ms);
        let slop = axis.active_touch_slop(position, self.down_pos);

        let can_start = self.state != SwipeState::Dragging
            && (self.state != SwipeState::DraggingDown || !self.two_direction);
        let can_start_down = !matches!(
            self.state,
            SwipeState::Dragging | SwipeState::DraggingDown
        ) && self.two_direction;

        if can_start && self.should_scroll_start(slop) {
            self.set_state(SwipeState::Dragging, listener);
        } else if can_start_down && self.should_scroll_start_down(slop) {
            self.set_state(SwipeState::DraggingDown, listener);
        } else if !self.two_direction
            && self.state == SwipeState::Idle
            && velocity > self.config.release_velocity
        {
            // Fast downward motion opens the downward drag without waiting for slop.
            self.set_state(SwipeState::DraggingDown, listener);
        }

        match self.state {
            SwipeState::Dragging => {
                self.report_dragging(listener);
            }
            SwipeState::DraggingDown if self.two_direction => {
                self.report_dragging_down(listener);
            }
            _ => {}
        }

        self.last_pos = position;
    }

    fn track(&mut self, pointer: PointerId, position: Point) {
        if !self.track_existing(pointer, position) {
            self.pointers.push((pointer, position));
        }
    }

    fn track_existing(&mut self, pointer: PointerId, position: Point) -> bool {
        match self.pointers.iter_mut().find(|(id, _)| *id == pointer) {
            Some(entry) => {
                entry.1 = position;
                true
            }
            None => false,
        }
    }

    fn passes_slop(&self, cross_axis_slop: f32) -> bool {
        cross_axis_slop.max(self.config.touch_slop) < self.displacement.abs()
    }

    fn should_scroll_start(&self, cross_axis_slop: f32) -> bool {
        self.passes_slop(cross_axis_slop) && self.scroll_conditions.admits(self.displacement)
    }

    fn should_scroll_start_down(&self, cross_axis_slop: f32) -> bool {
        self.passes_slop(cross_axis_slop) && self.scroll_conditions.admits_down(self.displacement)
    }

    fn set_state<L: DragListener + ?Sized>(&mut self, new_state: SwipeState, listener: &mut L) {
        let previous = self.state;
        if previous == new_state {
            return;
        }
        log::debug!("swipe state {previous:?} -> {new_state:?}");

        match new_state {
            SwipeState::Dragging => {
                self.initialize_dragging(previous);
                self.state = new_state;
                match previous {
                    SwipeState::Idle | SwipeState::DraggingDown => listener.on_drag_start(true),
                    SwipeState::Settling => listener.on_drag_start(false),
                    SwipeState::Dragging => {}
                }
            }
            SwipeState::DraggingDown => {
                self.initialize_dragging(previous);
                self.state = new_state;
                match previous {
                    SwipeState::Idle => listener.on_drag_start_down(true),
                    SwipeState::Settling => listener.on_drag_start_down(false),
                    SwipeState::Dragging | SwipeState::DraggingDown => {}
                }
            }
            SwipeState::Settling => {
                self.state = new_state;
                let velocity = self.velocity.velocity();
                let is_fling = velocity.abs() > self.config.release_velocity;
                log::trace!(
                    "swipe released disp={:.1} velocity={velocity:.3} fling={is_fling}",
                    self.displacement
                );
                match previous {
                    SwipeState::Dragging => listener.on_drag_end(velocity, is_fling),
                    SwipeState::DraggingDown => listener.on_drag_end_down(velocity, is_fling),
                    SwipeState::Idle | SwipeState::Settling => {}
                }
            }
            SwipeState::Idle => {
                self.state = new_state;
            }
        }
    }

    fn initialize_dragging(&mut self, previous: SwipeState) {
        self.subtract_displacement =
            if previous == SwipeState::Settling && self.ignore_slop_when_settling {
                // Re-caught on touch down: no slop was consumed.
                0.0
            } else if self.displacement > 0.0 {
                self.config.touch_slop
            } else {
                -self.config.touch_slop
            };
    }

    fn report_dragging<L: DragListener + ?Sized>(&mut self, listener: &mut L) -> bool {
        if self.displacement == self.last_displacement {
            return true;
        }
        log::trace!(
            "on_drag disp={:.1} velocity={:.3}",
            self.displacement,
            self.velocity.velocity()
        );
        self.last_displacement = self.displacement;
        listener.on_drag(
            self.displacement - self.subtract_displacement,
            self.velocity.velocity(),
        )
    }

    fn report_dragging_down<L: DragListener + ?Sized>(&mut self, listener: &mut L) -> bool {
        if self.displacement == self.last_displacement {
            return true;
        }
        log::trace!(
            "on_drag_down disp={:.1} velocity={:.3}",
            self.displacement,
            self.velocity.velocity()
        );
        self.last_displacement = self.displacement;
        listener.on_drag_down(
            self.displacement - self.subtract_displacement,
            self.velocity.velocity(),
        )
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/detector_tests.rs"]
mod tests;

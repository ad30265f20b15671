//! Frame-driven progress tweens.
//!
//! A [`ProgressTween`] does not own a clock: whoever drives frames calls
//! [`ProgressTween::on_frame`] with the frame time and applies the returned
//! value. The start time is captured on the first frame.

use std::cell::Cell;
use std::rc::Rc;

use crate::easing::Easing;

/// Tween duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::new(duration_millis, Easing::Linear)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(300, Easing::FastOutSlowIn)
    }
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationResult {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Finished(AnimationResult),
}

/// Shared handle to a running animation.
///
/// Clones observe the same animation. Cancelling is idempotent and has no
/// effect once the animation finished.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    status: Rc<Cell<Status>>,
}

impl AnimationHandle {
    fn new() -> Self {
        Self {
            status: Rc::new(Cell::new(Status::Running)),
        }
    }

    pub fn cancel(&self) {
        if self.status.get() == Status::Running {
            self.status.set(Status::Finished(AnimationResult::Cancelled));
        }
    }

    pub fn is_running(&self) -> bool {
        self.status.get() == Status::Running
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.get() == Status::Finished(AnimationResult::Cancelled)
    }

    /// `None` while running.
    pub fn result(&self) -> Option<AnimationResult> {
        match self.status.get() {
            Status::Running => None,
            Status::Finished(result) => Some(result),
        }
    }

    fn complete(&self) {
        if self.status.get() == Status::Running {
            self.status.set(Status::Finished(AnimationResult::Completed));
        }
    }
}

/// Outcome of advancing a tween by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenFrame {
    Running(f32),
    Finished { value: f32, result: AnimationResult },
}

/// Animates a single `f32` from `from` to `to`.
#[derive(Debug)]
pub struct ProgressTween {
    from: f32,
    to: f32,
    current: f32,
    spec: TweenSpec,
    start_time_nanos: Option<u64>,
    handle: AnimationHandle,
}

impl ProgressTween {
    pub fn new(from: f32, to: f32, spec: TweenSpec) -> Self {
        Self {
            from,
            to,
            current: from,
            spec,
            start_time_nanos: None,
            handle: AnimationHandle::new(),
        }
    }

    pub fn handle(&self) -> AnimationHandle {
        self.handle.clone()
    }

    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn on_frame(&mut self, frame_time_nanos: u64) -> TweenFrame {
        if let Some(result) = self.handle.result() {
            return TweenFrame::Finished {
                value: self.current,
                result,
            };
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self.spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 || self.spec.duration_millis == 0 {
            self.current = self.to;
            self.handle.complete();
            log::trace!("tween to {} completed", self.to);
            return TweenFrame::Finished {
                value: self.to,
                result: AnimationResult::Completed,
            };
        }

        let eased = self.spec.easing.transform(linear_progress);
        self.current = self.from + (self.to - self.from) * eased;
        TweenFrame::Running(self.current)
    }
}

//! Panel transition driven by a single progress value.
//!
//! Progress 0 shows the panel fully revealed and 1 fully hidden; the panel's
//! translation is `progress * shift_range`. While a finger drags, progress
//! follows the finger. On release the controller snaps to an endpoint:
//!
//! - a fling snaps in the direction of the release velocity,
//! - a slow release snaps to the endpoint closer to the current shift.

use pullpanel_animation::{
    AnimationHandle, AnimationResult, Easing, ProgressTween, TweenFrame, TweenSpec,
};
use pullpanel_gesture::{
    DragEventQueue, DragListener, PointerAction, PointerSample, ScrollConditions, SwipeDetector,
    VelocityEstimator,
};

use crate::clock::{Clock, MonotonicClock};
use crate::config::TransitionConfig;
use crate::constants::{DEFAULT_SHIFT_RANGE, RECATCH_REJECTION_FRACTION, SINGLE_FRAME_MS};
use crate::duration::calculate_duration;
use crate::error::{validate_shift_range, TransitionError};
use crate::host::{Endpoint, TransitionHost};
use crate::visuals::ProgressVisuals;

/// How a settle animation starts relative to the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleStart {
    /// Started from rest; the host may post it to the next frame.
    Deferred,
    /// Continues a released drag; already advanced by one predicted frame and
    /// should run right away.
    Immediate,
}

/// A settle animation that was just started.
#[derive(Clone, Debug)]
pub struct Settle {
    pub handle: AnimationHandle,
    pub start: SettleStart,
    pub target: Endpoint,
}

struct SettleAnimation {
    tween: ProgressTween,
    target: Endpoint,
}

pub struct TransitionController<H: TransitionHost> {
    host: H,
    config: TransitionConfig,
    detector: SwipeDetector,
    clock: Box<dyn Clock>,
    attached: bool,
    panel_open: bool,
    no_intercept: bool,

    // Shift of the panel is `progress * shift_range`.
    progress: f32,
    shift_start: f32,
    shift_range: f32,

    /// Velocity of the panel in px/ms.
    container_velocity: f32,
    progress_velocity: VelocityEstimator,
    animation_duration: i64,
    current_animation: Option<SettleAnimation>,
}

impl<H: TransitionHost> TransitionController<H> {
    /// Create a detached controller with the panel hidden.
    pub fn new(host: H, config: TransitionConfig) -> Self {
        let mut detector = SwipeDetector::new(config.swipe);
        detector.set_two_direction(false);
        Self {
            host,
            config,
            detector,
            clock: Box::new(MonotonicClock::new()),
            attached: false,
            panel_open: false,
            no_intercept: false,
            progress: 1.0,
            shift_start: 0.0,
            shift_range: DEFAULT_SHIFT_RANGE,
            container_velocity: 0.0,
            progress_velocity: VelocityEstimator::new(),
            animation_duration: config.default_duration_ms,
            current_animation: None,
        }
    }

    /// Replace the time source used for progress-driven velocity.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Attach to a laid out panel with the given shift range.
    pub fn attach(&mut self, shift_range: f32) -> Result<(), TransitionError> {
        self.shift_range = validate_shift_range(shift_range)?;
        self.attached = true;
        log::debug!("transition attached, shift range {shift_range}");
        self.set_progress(self.progress);
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn detector(&self) -> &SwipeDetector {
        &self.detector
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn shift(&self) -> f32 {
        self.progress * self.shift_range
    }

    pub fn shift_range(&self) -> f32 {
        self.shift_range
    }

    pub fn container_velocity(&self) -> f32 {
        self.container_velocity
    }

    /// Duration, in ms, of the most recent settle.
    pub fn animation_duration(&self) -> i64 {
        self.animation_duration
    }

    /// Whether the panel last settled revealed.
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_transitioning(&self) -> bool {
        self.detector.is_dragging_or_settling()
    }

    pub fn is_animating(&self) -> bool {
        self.current_animation.is_some()
    }

    fn is_in_disallow_recatch_top_zone(&self) -> bool {
        self.progress < RECATCH_REJECTION_FRACTION
    }

    fn is_in_disallow_recatch_bottom_zone(&self) -> bool {
        self.progress > 1.0 - RECATCH_REJECTION_FRACTION
    }

    /// Decide whether this controller takes over the gesture starting or
    /// continuing with `sample`.
    pub fn on_intercept_touch_event(&mut self, sample: &PointerSample) -> bool {
        if sample.action == PointerAction::Down {
            self.no_intercept = !self.host.allows_intercept(sample, self.panel_open);
            if !self.no_intercept {
                let (conditions, ignore_slop) = self.scroll_conditions();
                self.detector.set_scroll_conditions(conditions, ignore_slop);
            }
        }

        if self.no_intercept {
            return false;
        }

        self.dispatch_pointer_event(sample);
        if self.detector.is_settling()
            && (self.is_in_disallow_recatch_bottom_zone() || self.is_in_disallow_recatch_top_zone())
        {
            return false;
        }
        self.detector.is_dragging_or_settling()
    }

    /// Handle a sample of a gesture this controller intercepted.
    pub fn on_touch_event(&mut self, sample: &PointerSample) -> bool {
        self.dispatch_pointer_event(sample)
    }

    fn scroll_conditions(&self) -> (ScrollConditions, bool) {
        if self.detector.is_idle() {
            let conditions = if self.panel_open {
                ScrollConditions::NEGATIVE
            } else {
                ScrollConditions::POSITIVE
            };
            (conditions, false)
        } else if self.is_in_disallow_recatch_bottom_zone() {
            (ScrollConditions::POSITIVE, false)
        } else if self.is_in_disallow_recatch_top_zone() {
            (ScrollConditions::NEGATIVE, false)
        } else {
            (ScrollConditions::BOTH, true)
        }
    }

    fn dispatch_pointer_event(&mut self, sample: &PointerSample) -> bool {
        let mut queue = DragEventQueue::new();
        let handled = self.detector.on_pointer_event(sample, &mut queue);
        for event in queue.drain() {
            event.dispatch(self);
        }
        handled
    }

    /// Move the transition to `progress`, clamped to [0, 1], and push the
    /// derived visuals to the host.
    pub fn set_progress(&mut self, progress: f32) {
        if !progress.is_finite() {
            log::warn!("ignoring non-finite progress {progress}");
            return;
        }
        let shift_previous = self.shift();
        self.progress = progress.clamp(0.0, 1.0);
        let shift_current = self.shift();

        let visuals = ProgressVisuals::compute(self.progress, self.shift_range, &self.config);
        self.host.apply_visuals(&visuals);

        let dragging = self.detector.is_dragging();
        if !dragging {
            self.container_velocity = self
                .progress_velocity
                .compute(shift_current - shift_previous, self.clock.now_millis());
        }

        self.host
            .update_caret(self.progress, self.container_velocity, dragging);
        self.update_light_status_bar(shift_current);
    }

    /// The layout changed the distance between the endpoints.
    pub fn on_scroll_range_changed(&mut self, shift_range: f32) -> Result<(), TransitionError> {
        self.shift_range = validate_shift_range(shift_range)?;
        self.set_progress(self.progress);
        Ok(())
    }

    fn update_light_status_bar(&mut self, shift: f32) {
        if !self.config.gradient_background && self.config.vertical_bar_layout {
            return;
        }

        // Light system UI once the panel covers at least half the status bar.
        let light = if self.config.gradient_background {
            shift <= self.shift_range / 4.0
        } else {
            shift <= self.config.status_bar_height / 2.0
        };
        self.host.set_light_status_bar(light);
    }

    fn prepare_pull(&mut self, new_drag: bool) {
        if new_drag {
            self.host.prepare_pull();
        }
    }

    fn update_duration(&mut self, velocity: f32, distance: f32) {
        self.animation_duration = calculate_duration(velocity, distance / self.shift_range);
    }

    /// Settle to the revealed endpoint.
    pub fn animate_to_open(&mut self, duration_ms: i64) -> Settle {
        self.animate_to(Endpoint::Open, duration_ms)
    }

    /// Settle to the hidden endpoint.
    pub fn animate_to_closed(&mut self, duration_ms: i64) -> Settle {
        self.animate_to(Endpoint::Closed, duration_ms)
    }

    fn animate_to(&mut self, target: Endpoint, duration_ms: i64) -> Settle {
        self.cancel_animation();

        let (easing, start) = if self.detector.is_idle() {
            self.prepare_pull(true);
            self.animation_duration = duration_ms;
            self.shift_start = self.shift();
            (Easing::FastOutSlowIn, SettleStart::Deferred)
        } else {
            // Keep the released drag moving: skip ahead one frame at the
            // current velocity, never past the endpoints.
            let next_frame_progress =
                self.progress + self.container_velocity * SINGLE_FRAME_MS / self.shift_range;
            self.progress = next_frame_progress.clamp(0.0, 1.0);
            (
                Easing::scroll_for_velocity(self.container_velocity.abs()),
                SettleStart::Immediate,
            )
        };

        let spec = TweenSpec::new(self.animation_duration.max(0) as u64, easing);
        let tween = ProgressTween::new(self.progress, target.progress(), spec);
        let handle = tween.handle();
        log::debug!(
            "settling to {target:?} from {:.3} over {}ms ({start:?})",
            self.progress,
            self.animation_duration
        );
        self.current_animation = Some(SettleAnimation { tween, target });
        self.host.request_frame();

        Settle {
            handle,
            start,
            target,
        }
    }

    /// Advance the running settle animation to `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        let Some(animation) = self.current_animation.as_mut() else {
            return;
        };
        let target = animation.target;
        match animation.tween.on_frame(frame_time_nanos) {
            TweenFrame::Running(value) => {
                self.set_progress(value);
                self.host.request_frame();
            }
            TweenFrame::Finished { result, .. } => {
                self.current_animation = None;
                self.on_animation_end(target, result);
            }
        }
    }

    fn on_animation_end(&mut self, target: Endpoint, result: AnimationResult) {
        match result {
            AnimationResult::Completed => {
                match target {
                    Endpoint::Open => self.finish_pull_up(),
                    Endpoint::Closed => self.finish_pull_down(),
                }
                self.detector.finished_scrolling();
                self.host.on_settled(target);
            }
            AnimationResult::Cancelled => {
                log::debug!("settle to {target:?} cancelled at {:.3}", self.progress);
            }
        }
    }

    /// Jump to the revealed endpoint.
    pub fn finish_pull_up(&mut self) {
        self.panel_open = true;
        self.set_progress(0.0);
    }

    /// Jump to the hidden endpoint.
    pub fn finish_pull_down(&mut self) {
        self.panel_open = false;
        self.set_progress(1.0);
    }

    /// Stop the running settle animation, if any. Progress stays where it is.
    pub fn cancel_animation(&mut self) {
        if let Some(animation) = self.current_animation.take() {
            animation.tween.handle().cancel();
            self.on_animation_end(animation.target, AnimationResult::Cancelled);
        }
    }
}

impl<H: TransitionHost> DragListener for TransitionController<H> {
    fn on_drag_start(&mut self, is_new_drag: bool) {
        self.cancel_animation();
        self.shift_start = self.shift();
        self.prepare_pull(is_new_drag);
    }

    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool {
        if !self.attached {
            return false;
        }

        self.container_velocity = velocity;
        let shift = (self.shift_start + displacement).clamp(0.0, self.shift_range);
        self.set_progress(shift / self.shift_range);
        true
    }

    fn on_drag_end(&mut self, velocity: f32, is_fling: bool) {
        if !self.attached {
            // Nothing will animate, so nothing would end the settle.
            self.detector.finished_scrolling();
            return;
        }

        let shift = self.shift();
        let target = if is_fling {
            if velocity < 0.0 {
                Endpoint::Open
            } else {
                Endpoint::Closed
            }
        } else if shift > self.shift_range / 2.0 {
            Endpoint::Closed
        } else {
            Endpoint::Open
        };

        let remaining = match target {
            Endpoint::Open => shift.abs(),
            Endpoint::Closed => (self.shift_range - shift).abs(),
        };
        self.update_duration(velocity, remaining);
        log::debug!("drag released v={velocity:.3} fling={is_fling} -> {target:?}");

        let duration = self.config.default_duration_ms;
        self.animate_to(target, duration);
    }

    fn on_drag_start_down(&mut self, is_new_drag: bool) {
        log::debug!("downward drag start, new={is_new_drag}");
        self.host.expand_system_panel();
    }

    fn on_drag_down(&mut self, _displacement: f32, _velocity: f32) -> bool {
        self.attached
    }

    fn on_drag_end_down(&mut self, _velocity: f32, _is_fling: bool) {
        self.detector.finished_scrolling();
    }
}

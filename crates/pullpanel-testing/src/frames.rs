use pullpanel_transition::{TransitionController, TransitionHost};

/// 60 Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Delivers frame callbacks to a controller at a fixed rate.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    time_nanos: u64,
    interval_nanos: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL_NANOS)
    }

    pub fn with_interval(interval_nanos: u64) -> Self {
        Self {
            time_nanos: 0,
            interval_nanos,
        }
    }

    pub fn time_nanos(&self) -> u64 {
        self.time_nanos
    }

    /// Deliver one frame and advance the frame time.
    pub fn step<H: TransitionHost>(&mut self, controller: &mut TransitionController<H>) {
        controller.on_frame(self.time_nanos);
        self.time_nanos += self.interval_nanos;
    }

    /// Deliver frames until the settle animation ends or `max_frames` were
    /// delivered. Returns the number of frames delivered.
    pub fn run_until_idle<H: TransitionHost>(
        &mut self,
        controller: &mut TransitionController<H>,
        max_frames: usize,
    ) -> usize {
        let mut frames = 0;
        while controller.is_animating() && frames < max_frames {
            self.step(controller);
            frames += 1;
        }
        log::trace!("delivered {frames} frames");
        frames
    }
}

use pullpanel_gesture::PointerSample;

use crate::visuals::ProgressVisuals;

/// The two stable states of the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Panel fully revealed, progress 0.
    Open,
    /// Panel fully hidden, progress 1.
    Closed,
}

impl Endpoint {
    pub fn progress(self) -> f32 {
        match self {
            Endpoint::Open => 0.0,
            Endpoint::Closed => 1.0,
        }
    }
}

/// UI collaborators driven by a [`TransitionController`](crate::TransitionController).
///
/// Only the visual setters are required; everything else defaults to a no-op.
pub trait TransitionHost {
    /// Apply translations and alphas derived from the current progress.
    fn apply_visuals(&mut self, visuals: &ProgressVisuals);

    /// Toggle the light status bar used while the panel covers it.
    fn set_light_status_bar(&mut self, light: bool);

    fn update_caret(&mut self, _progress: f32, _velocity: f32, _dragging: bool) {}

    /// A new pull is about to start. Not called when re-catching a settle.
    fn prepare_pull(&mut self) {}

    /// A fast downward swipe asks for the system notification panel.
    fn expand_system_panel(&mut self) {}

    /// Veto interception of a gesture starting with `sample`.
    fn allows_intercept(&self, _sample: &PointerSample, _panel_open: bool) -> bool {
        true
    }

    /// A settle animation is running and wants another frame.
    fn request_frame(&mut self) {}

    fn on_settled(&mut self, _endpoint: Endpoint) {}
}

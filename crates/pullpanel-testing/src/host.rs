use pullpanel_gesture::PointerSample;
use pullpanel_transition::{Endpoint, ProgressVisuals, TransitionHost};

/// A [`TransitionHost`] that remembers everything it was asked to do.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub visuals: Vec<ProgressVisuals>,
    pub light_status_bar: Option<bool>,
    /// `(progress, velocity, dragging)` per caret update.
    pub carets: Vec<(f32, f32, bool)>,
    pub prepared_pulls: usize,
    pub system_panel_expansions: usize,
    pub frame_requests: usize,
    pub settled: Vec<Endpoint>,
    /// Answer for [`TransitionHost::allows_intercept`].
    pub intercept_allowed: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            visuals: Vec::new(),
            light_status_bar: None,
            carets: Vec::new(),
            prepared_pulls: 0,
            system_panel_expansions: 0,
            frame_requests: 0,
            settled: Vec::new(),
            intercept_allowed: true,
        }
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_visuals(&self) -> Option<&ProgressVisuals> {
        self.visuals.last()
    }

    /// Panel translations in the order they were applied.
    pub fn translations(&self) -> Vec<f32> {
        self.visuals.iter().map(|v| v.panel_translation).collect()
    }
}

impl TransitionHost for RecordingHost {
    fn apply_visuals(&mut self, visuals: &ProgressVisuals) {
        self.visuals.push(*visuals);
    }

    fn set_light_status_bar(&mut self, light: bool) {
        self.light_status_bar = Some(light);
    }

    fn update_caret(&mut self, progress: f32, velocity: f32, dragging: bool) {
        self.carets.push((progress, velocity, dragging));
    }

    fn prepare_pull(&mut self) {
        self.prepared_pulls += 1;
    }

    fn expand_system_panel(&mut self) {
        self.system_panel_expansions += 1;
    }

    fn allows_intercept(&self, _sample: &PointerSample, _panel_open: bool) -> bool {
        self.intercept_allowed
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn on_settled(&mut self, endpoint: Endpoint) {
        self.settled.push(endpoint);
    }
}

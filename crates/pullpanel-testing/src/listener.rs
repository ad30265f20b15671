use pullpanel_gesture::{DragEvent, DragListener};

/// Records every callback it receives, in order.
#[derive(Debug, Clone)]
pub struct RecordingListener {
    pub events: Vec<DragEvent>,
    /// Returned from `on_drag` and `on_drag_down`.
    pub accept_drags: bool,
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            accept_drags: true,
        }
    }
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Displacements reported through `on_drag`.
    pub fn drag_displacements(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DragEvent::Drag { displacement, .. } => Some(*displacement),
                _ => None,
            })
            .collect()
    }

    /// `is_new_drag` of every `on_drag_start`.
    pub fn drag_starts(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DragEvent::DragStart { is_new_drag } => Some(*is_new_drag),
                _ => None,
            })
            .collect()
    }

    /// The last `on_drag_end`, as `(velocity, is_fling)`.
    pub fn last_drag_end(&self) -> Option<(f32, bool)> {
        self.events.iter().rev().find_map(|event| match event {
            DragEvent::DragEnd { velocity, is_fling } => Some((*velocity, *is_fling)),
            _ => None,
        })
    }

    pub fn count_down_events(&self) -> usize {
        self.events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    DragEvent::DragStartDown { .. }
                        | DragEvent::DragDown { .. }
                        | DragEvent::DragEndDown { .. }
                )
            })
            .count()
    }
}

impl DragListener for RecordingListener {
    fn on_drag_start(&mut self, is_new_drag: bool) {
        self.events.push(DragEvent::DragStart { is_new_drag });
    }

    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool {
        self.events.push(DragEvent::Drag {
            displacement,
            velocity,
        });
        self.accept_drags
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
        self.accept_drags
    }

    fn on_drag_end_down(&mut self, velocity: f32, is_fling: bool) {
        self.events.push(DragEvent::DragEndDown { velocity, is_fling });
    }
}

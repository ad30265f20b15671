use pullpanel_gesture::SwipeConfig;

use crate::constants::DEFAULT_DURATION_MS;

/// Tunables for a [`TransitionController`](crate::TransitionController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    pub swipe: SwipeConfig,
    /// Duration, in ms, of settles started while the recognizer is idle.
    pub default_duration_ms: i64,
    /// Landscape layouts with a side bar: the hotseat moves with parallax and
    /// the status bar is left alone unless a gradient background is used.
    pub vertical_bar_layout: bool,
    /// Height, in px, of the status bar inset.
    pub status_bar_height: f32,
    /// Whether the panel draws a full bleed gradient background.
    pub gradient_background: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            swipe: SwipeConfig::default(),
            default_duration_ms: DEFAULT_DURATION_MS,
            vertical_bar_layout: false,
            status_bar_height: 0.0,
            gradient_background: true,
        }
    }
}

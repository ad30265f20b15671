//! Visual state derived from transition progress.

use pullpanel_animation::Easing;

use crate::config::TransitionConfig;
use crate::constants::PARALLAX_COEFFICIENT;

const WORKSPACE_EASING: Easing = Easing::Accelerate(2.0);
const HOTSEAT_EASING: Easing = Easing::Accelerate(1.5);
const BACKGROUND_EASING: Easing = Easing::Decelerate(3.0);

/// Everything the host needs to draw one frame of the transition.
///
/// Translations are in px along the swipe axis; alphas and the background
/// blend fraction are in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressVisuals {
    pub panel_translation: f32,
    pub content_alpha: f32,
    /// Fraction from the hotseat background color towards the panel color.
    pub background_blend: f32,
    /// Opacity of the blended background.
    pub scrim_alpha: f32,
    pub hotseat_translation: f32,
    pub hotseat_alpha: f32,
    pub workspace_translation: f32,
    pub workspace_alpha: f32,
}

impl ProgressVisuals {
    pub fn compute(progress: f32, shift_range: f32, config: &TransitionConfig) -> Self {
        let shift = progress * shift_range;
        let bounded = progress.clamp(0.0, 1.0);
        let alpha = 1.0 - bounded;
        let offset = shift - shift_range;

        let hotseat_translation = if config.vertical_bar_layout {
            PARALLAX_COEFFICIENT * offset
        } else {
            offset
        };

        Self {
            panel_translation: shift,
            content_alpha: alpha,
            background_blend: BACKGROUND_EASING.transform(alpha),
            scrim_alpha: alpha,
            hotseat_translation,
            hotseat_alpha: HOTSEAT_EASING.transform(bounded),
            workspace_translation: PARALLAX_COEFFICIENT * offset,
            workspace_alpha: WORKSPACE_EASING.transform(bounded),
        }
    }
}

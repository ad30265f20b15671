//! Easing curves used by panel settle animations and derived visuals.

/// Release velocity, in px/ms, above which the scroll curve gets a steeper start.
pub const FAST_FLING_PX_MS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Material "standard" curve, cubic bezier (0.4, 0.0, 0.2, 1.0).
    FastOutSlowIn,
    /// `t^(2·factor)`: starts slow, ends fast.
    Accelerate(f32),
    /// `1 - (1-t)^(2·factor)`: starts fast, ends slow.
    Decelerate(f32),
    /// Continues a released drag: `(t-1)^3 + 1`, or `(t-1)^5 + 1` when `steeper`
    /// so the initial slope matches a fast fling.
    Scroll { steeper: bool },
}

impl Easing {
    /// Scroll curve matching the container velocity (px/ms) at the moment of release.
    pub fn scroll_for_velocity(velocity_at_zero: f32) -> Self {
        Easing::Scroll {
            steeper: velocity_at_zero > FAST_FLING_PX_MS,
        }
    }

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => FAST_OUT_SLOW_IN.solve(fraction),
            Easing::Accelerate(factor) => {
                if factor == 1.0 {
                    fraction * fraction
                } else {
                    fraction.powf(2.0 * factor)
                }
            }
            Easing::Decelerate(factor) => {
                if factor == 1.0 {
                    1.0 - (1.0 - fraction) * (1.0 - fraction)
                } else {
                    1.0 - (1.0 - fraction).powf(2.0 * factor)
                }
            }
            Easing::Scroll { steeper } => {
                let t = fraction - 1.0;
                let mut output = t * t * t;
                if steeper {
                    output *= t * t;
                }
                output + 1.0
            }
        }
    }
}

/// A cubic bezier from (0, 0) to (1, 1) with two inner control points.
///
/// Both control x coordinates lie in [0, 1], so x grows monotonically with the
/// curve parameter and can be inverted by bisection.
#[derive(Debug, Clone, Copy)]
struct UnitBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

const FAST_OUT_SLOW_IN: UnitBezier = UnitBezier {
    x1: 0.4,
    y1: 0.0,
    x2: 0.2,
    y2: 1.0,
};

/// Halvings of the parameter interval; leaves an error below 1e-7.
const BISECTION_STEPS: usize = 24;

impl UnitBezier {
    fn component(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    /// Value of the curve at horizontal position `fraction`.
    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        for _ in 0..BISECTION_STEPS {
            let mid = 0.5 * (low + high);
            if Self::component(mid, self.x1, self.x2) < fraction {
                low = mid;
            } else {
                high = mid;
            }
        }
        Self::component(0.5 * (low + high), self.y1, self.y2)
    }
}

use std::ops::BitOr;

/// Directions in which a swipe is allowed to start.
///
/// The flags follow an inverted coordinate convention: `NEGATIVE` admits a
/// positive displacement and `POSITIVE` a negative one when promoting to
/// [`SwipeState::Dragging`](crate::SwipeState::Dragging). The mirrored test
/// used for [`SwipeState::DraggingDown`](crate::SwipeState::DraggingDown)
/// pairs each flag with its own sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollConditions(u8);

impl ScrollConditions {
    pub const NONE: Self = Self(0);
    pub const POSITIVE: Self = Self(1 << 0);
    pub const NEGATIVE: Self = Self(1 << 1);
    pub const BOTH: Self = Self(Self::POSITIVE.0 | Self::NEGATIVE.0);

    pub fn insert(&mut self, other: ScrollConditions) {
        self.0 |= other.0;
    }

    pub fn contains(&self, other: ScrollConditions) -> bool {
        other.0 != 0 && (self.0 & other.0) == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether a drag with this signed displacement may start.
    pub(crate) fn admits(&self, displacement: f32) -> bool {
        (self.contains(Self::NEGATIVE) && displacement > 0.0)
            || (self.contains(Self::POSITIVE) && displacement < 0.0)
    }

    /// Mirror of [`admits`](Self::admits) used for the downward drag state.
    pub(crate) fn admits_down(&self, displacement: f32) -> bool {
        (self.contains(Self::NEGATIVE) && displacement < 0.0)
            || (self.contains(Self::POSITIVE) && displacement > 0.0)
    }
}

impl BitOr for ScrollConditions {
    type Output = ScrollConditions;

    fn bitor(self, rhs: ScrollConditions) -> ScrollConditions {
        ScrollConditions(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_contains_each_direction() {
        assert!(ScrollConditions::BOTH.contains(ScrollConditions::POSITIVE));
        assert!(ScrollConditions::BOTH.contains(ScrollConditions::NEGATIVE));
        assert!(!ScrollConditions::NONE.contains(ScrollConditions::NONE));
        assert_eq!(
            ScrollConditions::POSITIVE | ScrollConditions::NEGATIVE,
            ScrollConditions::BOTH
        );
    }

    #[test]
    fn admits_uses_inverted_sign() {
        assert!(ScrollConditions::NEGATIVE.admits(12.0));
        assert!(!ScrollConditions::NEGATIVE.admits(-12.0));
        assert!(ScrollConditions::POSITIVE.admits(-12.0));
        assert!(!ScrollConditions::POSITIVE.admits(12.0));
        assert!(!ScrollConditions::NONE.admits(12.0));
    }

    #[test]
    fn admits_down_mirrors_admits() {
        assert!(ScrollConditions::NEGATIVE.admits_down(-12.0));
        assert!(ScrollConditions::POSITIVE.admits_down(12.0));
        assert!(!ScrollConditions::POSITIVE.admits_down(-12.0));
    }
}

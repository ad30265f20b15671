use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionError {
    /// The shift range must be finite and strictly positive.
    InvalidShiftRange(f32),
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::InvalidShiftRange(range) => {
                write!(f, "shift range must be positive and finite, got {range}")
            }
        }
    }
}

impl std::error::Error for TransitionError {}

pub(crate) fn validate_shift_range(range: f32) -> Result<f32, TransitionError> {
    if range.is_finite() && range > 0.0 {
        Ok(range)
    } else {
        log::warn!("rejecting shift range {range}");
        Err(TransitionError::InvalidShiftRange(range))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::errors::{NeuroError, NeuroResult};

/// A profile score clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score(f64);

impl Score {
    pub const MIN: Score = Score(0.0);
    pub const MAX: Score = Score(1.0);
    /// The uninformed prior used for seeded fields.
    pub const NEUTRAL: Score = Score(0.5);

    /// Create a new Score, clamping to [0.0, 1.0].
    ///
    /// NaN does not clamp; use [`Score::try_new`] when the input may be non-finite.
    pub fn new(value: f64) -> Self {
        // `+ 0.0` folds -0.0 into 0.0 so equal scores compare equal under total_cmp.
        Self(value.clamp(0.0, 1.0) + 0.0)
    }

    /// Clamp `value` and fail if the result is still not a valid score.
    pub fn try_new(field: &str, value: f64) -> NeuroResult<Self> {
        let score = Self::new(value);
        if score.is_valid() {
            Ok(score)
        } else {
            Err(NeuroError::InvalidScore {
                field: field.to_string(),
                value,
            })
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the score is finite and within [0.0, 1.0].
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (0.0..=1.0).contains(&self.0)
    }

    /// Check an already-constructed score (e.g. one that was deserialized).
    pub fn ensure_valid(self, field: &str) -> NeuroResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(NeuroError::InvalidScore {
                field: field.to_string(),
                value: self.0,
            })
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Score::new(1.7).value(), 1.0);
        assert_eq!(Score::new(-0.2).value(), 0.0);
        assert_eq!(Score::new(0.25).value(), 0.25);
    }

    #[test]
    fn try_new_rejects_nan() {
        let err = Score::try_new("visual", f64::NAN).unwrap_err();
        assert!(matches!(err, NeuroError::InvalidScore { .. }));
    }

    #[test]
    fn try_new_clamps_infinity() {
        assert_eq!(Score::try_new("x", f64::INFINITY).unwrap().value(), 1.0);
    }
}

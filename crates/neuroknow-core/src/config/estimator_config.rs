use serde::{Deserialize, Serialize};

use super::defaults;

/// Estimator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Uninformed prior for recovery speed and transfer capacity.
    pub prior_score: f64,
    /// Mean resolution gap (minutes) that maps to a recovery speed of 0.5.
    pub recovery_half_gap_minutes: f64,
    /// Size of the recent-error window kept on a `LearningState`.
    pub recent_error_window: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            prior_score: defaults::DEFAULT_PRIOR_SCORE,
            recovery_half_gap_minutes: defaults::DEFAULT_RECOVERY_HALF_GAP_MINUTES,
            recent_error_window: defaults::DEFAULT_RECENT_ERROR_WINDOW,
        }
    }
}

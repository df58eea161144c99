use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for classifying sustained-focus duration.
///
/// Sprinter is `(-inf, sprinter_below)`, marathon is `(marathon_above, inf)`,
/// and cyclical is the closed interval in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionConfig {
    /// Mean focus (minutes) below which a learner is a sprinter.
    pub sprinter_below_minutes: f64,
    /// Mean focus (minutes) above which a learner is a marathoner.
    pub marathon_above_minutes: f64,
    /// Mean assumed when no focus durations were observed.
    pub default_focus_minutes: f64,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            sprinter_below_minutes: defaults::DEFAULT_SPRINTER_BELOW_MINUTES,
            marathon_above_minutes: defaults::DEFAULT_MARATHON_ABOVE_MINUTES,
            default_focus_minutes: defaults::DEFAULT_FOCUS_MINUTES,
        }
    }
}

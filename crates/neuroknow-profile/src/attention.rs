//! Attention-pattern classification from observed focus spans.

use neuroknow_core::config::AttentionConfig;
use neuroknow_core::profile::AttentionPattern;

/// Arithmetic mean of the focus spans, or `default_minutes` when there are none.
pub fn mean_focus_minutes(durations: &[f64], default_minutes: f64) -> f64 {
    if durations.is_empty() {
        return default_minutes;
    }
    durations.iter().sum::<f64>() / durations.len() as f64
}

/// Classify using the default thresholds: below 15 minutes is a sprinter,
/// above 40 a marathoner, anything in [15, 40] cyclical.
pub fn classify_attention_pattern(durations: &[f64]) -> AttentionPattern {
    classify_with(durations, &AttentionConfig::default())
}

/// Classify against configured thresholds. Both boundaries are cyclical.
pub fn classify_with(durations: &[f64], config: &AttentionConfig) -> AttentionPattern {
    let mean = mean_focus_minutes(durations, config.default_focus_minutes);
    if mean < config.sprinter_below_minutes {
        AttentionPattern::Sprinter
    } else if mean > config.marathon_above_minutes {
        AttentionPattern::Marathon
    } else {
        AttentionPattern::Cyclical
    }
}

//! Configuration, loaded from TOML with compiled defaults for every field.

mod attention_config;
pub mod defaults;
mod estimator_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use attention_config::AttentionConfig;
pub use estimator_config::EstimatorConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{NeuroError, NeuroResult};

/// Environment variable overriding `observability.log_level`.
pub const LOG_LEVEL_ENV_VAR: &str = "NEUROKNOW_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuroConfig {
    pub attention: AttentionConfig,
    pub estimator: EstimatorConfig,
    pub observability: ObservabilityConfig,
}

impl NeuroConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> NeuroResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| NeuroError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> NeuroResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            NeuroError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml(&raw)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `NEUROKNOW_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV_VAR) {
            if !level.trim().is_empty() {
                self.observability.log_level = level.trim().to_string();
            }
        }
    }

    /// Reject combinations that would break classification or scoring.
    pub fn validate(&self) -> NeuroResult<()> {
        let attention = &self.attention;
        for (field, value) in [
            ("attention.sprinter_below_minutes", attention.sprinter_below_minutes),
            ("attention.marathon_above_minutes", attention.marathon_above_minutes),
            ("attention.default_focus_minutes", attention.default_focus_minutes),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(NeuroError::ConfigError(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }
        if attention.sprinter_below_minutes >= attention.marathon_above_minutes {
            return Err(NeuroError::ConfigError(format!(
                "attention.sprinter_below_minutes ({}) must be below attention.marathon_above_minutes ({})",
                attention.sprinter_below_minutes, attention.marathon_above_minutes
            )));
        }

        let estimator = &self.estimator;
        if !(0.0..=1.0).contains(&estimator.prior_score) {
            return Err(NeuroError::ConfigError(format!(
                "estimator.prior_score must be between 0.0 and 1.0, got {}",
                estimator.prior_score
            )));
        }
        if !estimator.recovery_half_gap_minutes.is_finite()
            || estimator.recovery_half_gap_minutes <= 0.0
        {
            return Err(NeuroError::ConfigError(format!(
                "estimator.recovery_half_gap_minutes must be positive, got {}",
                estimator.recovery_half_gap_minutes
            )));
        }
        if estimator.recent_error_window == 0 {
            return Err(NeuroError::ConfigError(
                "estimator.recent_error_window must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

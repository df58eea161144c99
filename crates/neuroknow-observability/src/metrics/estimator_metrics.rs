//! Profiles created, updates applied, rejections, error-type distribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Estimator-level counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorMetrics {
    pub profiles_created: u64,
    pub profiles_reset: u64,
    /// Non-empty error batches applied.
    pub updates_applied: u64,
    /// Provisional → calibrated transitions.
    pub calibrations: u64,
    pub duplicate_rejections: u64,
    pub unknown_user_rejections: u64,
    pub invalid_input_rejections: u64,
    pub invariant_violations: u64,
    /// Error type tag → number of logs absorbed.
    pub error_type_distribution: BTreeMap<String, u64>,
}

impl EstimatorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created(&mut self) {
        self.profiles_created += 1;
    }

    pub fn record_reset(&mut self) {
        self.profiles_reset += 1;
    }

    /// Record an applied batch and whether it calibrated the profile.
    pub fn record_update(&mut self, calibrated_now: bool) {
        self.updates_applied += 1;
        if calibrated_now {
            self.calibrations += 1;
        }
    }

    /// Record `count` absorbed logs of one error type.
    pub fn record_error_type(&mut self, error_type: &str, count: u64) {
        *self
            .error_type_distribution
            .entry(error_type.to_string())
            .or_default() += count;
    }

    pub fn record_duplicate(&mut self) {
        self.duplicate_rejections += 1;
    }

    pub fn record_unknown_user(&mut self) {
        self.unknown_user_rejections += 1;
    }

    pub fn record_invalid_input(&mut self) {
        self.invalid_input_rejections += 1;
    }

    pub fn record_invariant_violation(&mut self) {
        self.invariant_violations += 1;
    }

    /// Total error logs absorbed across all updates.
    pub fn errors_absorbed(&self) -> u64 {
        self.error_type_distribution.values().sum()
    }

    /// Fraction of created profiles that reached calibration (0.0–1.0).
    pub fn calibration_rate(&self) -> f64 {
        if self.profiles_created == 0 {
            return 0.0;
        }
        (self.calibrations as f64 / self.profiles_created as f64).min(1.0)
    }
}

//! ProfileEstimator: builds profiles from diagnostics and refines them from errors.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use neuroknow_core::config::NeuroConfig;
use neuroknow_core::errors::{NeuroError, NeuroResult};
use neuroknow_core::models::{DiagnosticData, ErrorLog};
use neuroknow_core::profile::{
    AttentionPattern, CognitiveProfile, Modality, ModalityStrengths, Score,
};
use neuroknow_core::traits::IProfileStore;
use neuroknow_observability::tracing_setup::events;
use neuroknow_observability::EstimatorMetrics;
use tracing::debug;

use crate::attention;
use crate::modality;
use crate::recovery::{self, ErrorEvidence};
use crate::store::InMemoryProfileStore;

/// The cognitive profile estimator.
///
/// Owns nothing but configuration and counters; profiles live in the injected
/// store. Share it across threads behind an `Arc`.
pub struct ProfileEstimator {
    store: Arc<dyn IProfileStore>,
    config: NeuroConfig,
    metrics: Mutex<EstimatorMetrics>,
}

impl ProfileEstimator {
    /// Create an estimator over `store` with default configuration.
    pub fn new(store: Arc<dyn IProfileStore>) -> Self {
        Self {
            store,
            config: NeuroConfig::default(),
            metrics: Mutex::new(EstimatorMetrics::new()),
        }
    }

    /// Create an estimator with explicit configuration, validated up front.
    pub fn with_config(store: Arc<dyn IProfileStore>, config: NeuroConfig) -> NeuroResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            metrics: Mutex::new(EstimatorMetrics::new()),
        })
    }

    /// Estimator backed by a fresh [`InMemoryProfileStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProfileStore::new()))
    }

    pub fn config(&self) -> &NeuroConfig {
        &self.config
    }

    /// Snapshot of the estimator counters.
    pub fn metrics(&self) -> EstimatorMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, f: impl FnOnce(&mut EstimatorMetrics)) {
        let mut metrics = self.metrics.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut metrics);
    }

    // --- Diagnosis ---

    /// Construct and register a profile for a user seen for the first time.
    ///
    /// Fails with `DuplicateUser` if the user already has a profile; the
    /// stored profile is left untouched. Re-diagnosis goes through
    /// [`ProfileEstimator::reset_profile`].
    pub fn create_profile(
        &self,
        user_id: &str,
        diagnostic: &DiagnosticData,
    ) -> NeuroResult<CognitiveProfile> {
        let profile = self.diagnose(user_id, diagnostic).inspect_err(|err| {
            self.note_rejection(user_id, "create_profile", err);
        })?;

        if let Err(err) = self.store.insert_new(profile.clone()) {
            self.note_rejection(user_id, "create_profile", &err);
            return Err(err);
        }

        self.record(EstimatorMetrics::record_created);
        events::profile_created(
            user_id,
            profile.attention_pattern.as_str(),
            profile.abstraction_preference.as_str(),
        );
        Ok(profile)
    }

    /// [`ProfileEstimator::create_profile`] from a raw JSON mapping.
    pub fn create_profile_from_value(
        &self,
        user_id: &str,
        diagnostic: serde_json::Value,
    ) -> NeuroResult<CognitiveProfile> {
        let diagnostic = DiagnosticData::from_value(diagnostic).inspect_err(|err| {
            self.note_rejection(user_id, "create_profile", err);
        })?;
        self.create_profile(user_id, &diagnostic)
    }

    /// Classify mean focus duration against the configured thresholds.
    pub fn classify_attention_pattern(&self, focus_durations: &[f64]) -> AttentionPattern {
        attention::classify_with(focus_durations, &self.config.attention)
    }

    /// Per-modality strengths from the diagnostic responses.
    pub fn estimate_modality_strengths(&self, diagnostic: &DiagnosticData) -> ModalityStrengths {
        modality::estimate_modality_strengths(diagnostic)
    }

    /// Modalities ordered strongest first, ties in canonical order.
    pub fn get_optimal_modality_mix(&self, profile: &CognitiveProfile) -> Vec<Modality> {
        modality::optimal_modality_mix(&profile.modality_strengths)
    }

    /// Explicit re-diagnosis: replace an existing profile with a fresh
    /// provisional one. `created_at` is preserved.
    pub fn reset_profile(
        &self,
        user_id: &str,
        diagnostic: &DiagnosticData,
    ) -> NeuroResult<CognitiveProfile> {
        let fresh = self.diagnose(user_id, diagnostic).inspect_err(|err| {
            self.note_rejection(user_id, "reset_profile", err);
        })?;

        let result = self.store.update_with(user_id, &mut |profile: &mut CognitiveProfile| {
            let created_at = profile.created_at;
            *profile = fresh.clone();
            profile.created_at = created_at;
            Ok(())
        });
        let profile = result.inspect_err(|err| self.note_rejection(user_id, "reset_profile", err))?;

        self.record(EstimatorMetrics::record_reset);
        events::profile_reset(user_id);
        Ok(profile)
    }

    // --- Calibration ---

    /// Refine a profile from a batch of error logs.
    ///
    /// Recovery speed, per-modality strengths and transfer capacity are each
    /// recomputed only when the batch carries evidence for them. An empty
    /// batch returns the stored profile unchanged. The first non-empty batch
    /// moves the profile from provisional to calibrated.
    pub fn update_from_errors(
        &self,
        user_id: &str,
        error_logs: &[ErrorLog],
    ) -> NeuroResult<CognitiveProfile> {
        if !self.store.contains(user_id) {
            let err = NeuroError::UnknownUser {
                user_id: user_id.to_string(),
            };
            self.note_rejection(user_id, "update_from_errors", &err);
            return Err(err);
        }
        if error_logs.is_empty() {
            return self.get_profile(user_id);
        }

        let evidence =
            recovery::analyze_errors(error_logs, self.config.estimator.recovery_half_gap_minutes)
                .inspect_err(|err| self.note_rejection(user_id, "update_from_errors", err))?;

        let mut calibrated_now = false;
        let result = self.store.update_with(user_id, &mut |profile: &mut CognitiveProfile| {
            calibrated_now = !profile.is_calibrated();
            apply_evidence(profile, &evidence)
        });
        let profile =
            result.inspect_err(|err| self.note_rejection(user_id, "update_from_errors", err))?;

        self.record(|m| {
            m.record_update(calibrated_now);
            for (error_type, count) in &evidence.error_counts {
                m.record_error_type(error_type.as_str(), *count);
            }
        });
        if calibrated_now {
            events::profile_calibrated(user_id);
        }
        events::profile_updated(
            user_id,
            evidence.logs_analyzed,
            profile.error_recovery_speed.value(),
            evidence.modality_strengths.len(),
        );
        Ok(profile)
    }

    // --- Registry queries ---

    /// Snapshot of a user's profile.
    pub fn get_profile(&self, user_id: &str) -> NeuroResult<CognitiveProfile> {
        self.store
            .get(user_id)
            .ok_or_else(|| NeuroError::UnknownUser {
                user_id: user_id.to_string(),
            })
    }

    /// Drop a user's profile, returning it.
    pub fn remove_profile(&self, user_id: &str) -> NeuroResult<CognitiveProfile> {
        self.store
            .remove(user_id)
            .ok_or_else(|| NeuroError::UnknownUser {
                user_id: user_id.to_string(),
            })
    }

    pub fn profile_count(&self) -> usize {
        self.store.len()
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.store.user_ids()
    }

    // --- Internals ---

    fn diagnose(&self, user_id: &str, diagnostic: &DiagnosticData) -> NeuroResult<CognitiveProfile> {
        if user_id.trim().is_empty() {
            return Err(NeuroError::InvalidDiagnostic {
                field: "user_id".to_string(),
                reason: "user_id is empty".to_string(),
            });
        }
        diagnostic.validate()?;

        let attention_pattern = self.classify_attention_pattern(diagnostic.focus_durations());
        let abstraction_preference = modality::estimate_abstraction_preference(diagnostic);
        let modality_strengths = self.estimate_modality_strengths(diagnostic);
        debug!(
            user_id = %user_id,
            attention_pattern = %attention_pattern,
            abstraction_preference = %abstraction_preference,
            responses = diagnostic.modality_responses.len(),
            "diagnostic classified"
        );

        let prior = Score::try_new("prior_score", self.config.estimator.prior_score)?;
        let profile = CognitiveProfile::provisional(
            user_id,
            attention_pattern,
            abstraction_preference,
            modality_strengths,
            prior,
        );
        profile.check_invariants()?;
        Ok(profile)
    }

    fn note_rejection(&self, user_id: &str, operation: &str, err: &NeuroError) {
        match err {
            NeuroError::DuplicateUser { .. } => {
                self.record(EstimatorMetrics::record_duplicate);
                events::request_rejected(user_id, operation, &err.to_string());
            }
            NeuroError::UnknownUser { .. } => {
                self.record(EstimatorMetrics::record_unknown_user);
                events::request_rejected(user_id, operation, &err.to_string());
            }
            NeuroError::InvalidScore { .. } | NeuroError::InvariantViolation { .. } => {
                self.record(EstimatorMetrics::record_invariant_violation);
                events::invariant_violation(user_id, operation, &err.to_string());
            }
            _ => {
                self.record(EstimatorMetrics::record_invalid_input);
                events::request_rejected(user_id, operation, &err.to_string());
            }
        }
    }
}

/// Apply batch evidence to a profile draft. Fields without evidence keep their value.
fn apply_evidence(profile: &mut CognitiveProfile, evidence: &ErrorEvidence) -> NeuroResult<()> {
    if let Some(speed) = evidence.recovery_speed {
        profile.error_recovery_speed = speed;
    }
    for (modality, strength) in &evidence.modality_strengths {
        profile.modality_strengths.set(*modality, *strength);
    }
    if let Some(capacity) = evidence.transfer_capacity {
        profile.transfer_capacity = capacity;
    }
    profile.error_events_observed += evidence.logs_analyzed as u64;
    profile.mark_calibrated();
    profile.updated_at = Utc::now();
    profile.check_invariants()
}

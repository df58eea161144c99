use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{AbstractionPreference, AttentionPattern, ModalityStrengths, Score};
use crate::errors::{NeuroError, NeuroResult};

/// Lifecycle of a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProfileState {
    /// Only diagnostic evidence and seeded priors.
    #[default]
    Provisional,
    /// At least one error-driven update has been applied.
    Calibrated,
}

/// A student's cognitive profile: the learning-style parameters used to
/// personalize instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitiveProfile {
    pub user_id: String,
    pub attention_pattern: AttentionPattern,
    pub abstraction_preference: AbstractionPreference,
    pub modality_strengths: ModalityStrengths,
    pub error_recovery_speed: Score,
    pub transfer_capacity: Score,
    #[serde(default)]
    pub state: ProfileState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of error logs absorbed across all updates.
    #[serde(default)]
    pub error_events_observed: u64,
}

impl CognitiveProfile {
    /// A freshly diagnosed profile with recovery speed and transfer capacity
    /// seeded at `prior`.
    pub fn provisional(
        user_id: impl Into<String>,
        attention_pattern: AttentionPattern,
        abstraction_preference: AbstractionPreference,
        modality_strengths: ModalityStrengths,
        prior: Score,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            attention_pattern,
            abstraction_preference,
            modality_strengths,
            error_recovery_speed: prior,
            transfer_capacity: prior,
            state: ProfileState::Provisional,
            created_at: now,
            updated_at: now,
            error_events_observed: 0,
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.state == ProfileState::Calibrated
    }

    /// Mark the profile as calibrated. There is no way back short of a reset.
    pub fn mark_calibrated(&mut self) {
        self.state = ProfileState::Calibrated;
    }

    /// Verify every score is within [0, 1] and every modality is present.
    pub fn check_invariants(&self) -> NeuroResult<()> {
        if self.modality_strengths.len() != super::Modality::COUNT {
            return Err(NeuroError::InvariantViolation {
                field: "modality_strengths".to_string(),
                reason: format!(
                    "expected {} modalities, found {}",
                    super::Modality::COUNT,
                    self.modality_strengths.len()
                ),
            });
        }
        self.modality_strengths.ensure_valid()?;
        self.error_recovery_speed.ensure_valid("error_recovery_speed")?;
        self.transfer_capacity.ensure_valid("transfer_capacity")?;
        Ok(())
    }

    /// Serialize to a compact JSON document with stable field names.
    pub fn to_json(&self) -> NeuroResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON, for reports.
    pub fn to_json_pretty(&self) -> NeuroResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a profile previously produced by [`CognitiveProfile::to_json`],
    /// rejecting documents that break the score invariants.
    pub fn from_json(json: &str) -> NeuroResult<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.check_invariants()?;
        Ok(profile)
    }
}

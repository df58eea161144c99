use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{NeuroError, NeuroResult};
use crate::profile::{AbstractionPreference, Modality};

/// A single diagnostic item delivered through one modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalityResponse {
    pub modality: Modality,
    pub correct: bool,
}

/// A diagnostic item that presented either the example or the rule first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractionTrial {
    pub presentation: AbstractionPreference,
    pub correct: bool,
}

/// Diagnostic observations gathered before a profile exists.
///
/// Fields this crate does not interpret are kept in `extra`; their schema
/// belongs to the diagnostic collector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticData {
    /// Observed focus spans, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_durations: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modality_responses: Vec<ModalityResponse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abstraction_trials: Vec<AbstractionTrial>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DiagnosticData {
    /// Parse from a JSON mapping such as `{"focus_durations": [10, 8, 12]}`.
    pub fn from_value(value: serde_json::Value) -> NeuroResult<Self> {
        let data: Self = serde_json::from_value(value)?;
        data.validate()?;
        Ok(data)
    }

    pub fn with_focus_durations(mut self, durations: Vec<f64>) -> Self {
        self.focus_durations = Some(durations);
        self
    }

    pub fn with_response(mut self, modality: Modality, correct: bool) -> Self {
        self.modality_responses.push(ModalityResponse { modality, correct });
        self
    }

    pub fn with_trial(mut self, presentation: AbstractionPreference, correct: bool) -> Self {
        self.abstraction_trials.push(AbstractionTrial {
            presentation,
            correct,
        });
        self
    }

    /// Focus durations, or an empty slice when none were recorded.
    pub fn focus_durations(&self) -> &[f64] {
        self.focus_durations.as_deref().unwrap_or(&[])
    }

    /// Focus durations must be finite positive minutes.
    pub fn validate(&self) -> NeuroResult<()> {
        for (i, minutes) in self.focus_durations().iter().enumerate() {
            if !minutes.is_finite() || *minutes <= 0.0 {
                return Err(NeuroError::InvalidDiagnostic {
                    field: format!("focus_durations[{i}]"),
                    reason: format!("expected a positive number of minutes, got {minutes}"),
                });
            }
        }
        Ok(())
    }
}

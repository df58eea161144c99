use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{NeuroError, NeuroResult};
use crate::profile::Modality;

/// Category of a learner's mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Missing or wrong mental model of the concept.
    ConceptualGap,
    /// Right idea, wrong execution of the steps.
    ProceduralError,
    /// Slip caused by loss of focus.
    AttentionLapse,
    /// Could not apply a known concept in a new context.
    TransferFailure,
}

impl ErrorType {
    pub const ALL: [ErrorType; 4] = [
        Self::ConceptualGap,
        Self::ProceduralError,
        Self::AttentionLapse,
        Self::TransferFailure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConceptualGap => "conceptual_gap",
            Self::ProceduralError => "procedural_error",
            Self::AttentionLapse => "attention_lapse",
            Self::TransferFailure => "transfer_failure",
        }
    }
}

/// One recorded mistake, as reported by the session tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorLog {
    pub timestamp: DateTime<Utc>,
    pub concept_id: String,
    pub error_type: ErrorType,
    /// Free-text description of what the student tried.
    pub attempted_approach: String,
    /// When the student next answered the same concept correctly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Modality of the instruction given between the error and the resolution attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_modality: Option<Modality>,
}

impl ErrorLog {
    pub fn new(
        timestamp: DateTime<Utc>,
        concept_id: impl Into<String>,
        error_type: ErrorType,
        attempted_approach: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            concept_id: concept_id.into(),
            error_type,
            attempted_approach: attempted_approach.into(),
            resolved_at: None,
            instruction_modality: None,
        }
    }

    /// Attach the modality of the remedial instruction.
    pub fn with_instruction(mut self, modality: Modality) -> Self {
        self.instruction_modality = Some(modality);
        self
    }

    /// Attach the time of the next correct attempt.
    pub fn resolved(mut self, at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(at);
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }

    /// Time from the error to its resolution, if resolved.
    pub fn resolution_gap(&self) -> Option<Duration> {
        self.resolved_at.map(|at| at - self.timestamp)
    }

    /// Reject malformed logs. `index` is the position in the submitted batch.
    pub fn validate(&self, index: usize) -> NeuroResult<()> {
        if self.concept_id.trim().is_empty() {
            return Err(NeuroError::InvalidErrorLog {
                index,
                reason: "concept_id is empty".to_string(),
            });
        }
        if let Some(resolved_at) = self.resolved_at {
            if resolved_at < self.timestamp {
                return Err(NeuroError::InvalidErrorLog {
                    index,
                    reason: format!(
                        "resolved_at {resolved_at} precedes timestamp {}",
                        self.timestamp
                    ),
                });
            }
        }
        Ok(())
    }
}

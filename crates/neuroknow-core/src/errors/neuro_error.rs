/// Top-level error type for every NeuroKnow operation.
#[derive(Debug, thiserror::Error)]
pub enum NeuroError {
    #[error("profile already exists for user {user_id}")]
    DuplicateUser { user_id: String },

    #[error("no profile exists for user {user_id}")]
    UnknownUser { user_id: String },

    /// A computed score escaped [0.0, 1.0]. Internal invariant violation.
    #[error("invalid score for {field}: {value}")]
    InvalidScore { field: String, value: f64 },

    /// A structural invariant of a profile was broken.
    #[error("invariant violated for {field}: {reason}")]
    InvariantViolation { field: String, reason: String },

    #[error("invalid diagnostic field {field}: {reason}")]
    InvalidDiagnostic { field: String, reason: String },

    #[error("invalid error log at index {index}: {reason}")]
    InvalidErrorLog { index: usize, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NeuroError {
    /// Whether the caller can recover by issuing a different request
    /// (create instead of update, reset instead of create, fix the input).
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::InvalidScore { .. } | Self::InvariantViolation { .. }
        )
    }
}

pub type NeuroResult<T> = Result<T, NeuroError>;

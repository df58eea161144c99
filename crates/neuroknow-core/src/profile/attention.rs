use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse classification of sustained-focus duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AttentionPattern {
    /// Short bursts of focus.
    Sprinter,
    /// Long uninterrupted focus.
    Marathon,
    /// Moderate focus alternating with breaks.
    Cyclical,
}

impl AttentionPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sprinter => "sprinter",
            Self::Marathon => "marathon",
            Self::Cyclical => "cyclical",
        }
    }
}

impl fmt::Display for AttentionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a learner does better seeing examples or the general rule first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AbstractionPreference {
    #[default]
    ConcreteFirst,
    AbstractFirst,
}

impl AbstractionPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConcreteFirst => "concrete_first",
            Self::AbstractFirst => "abstract_first",
        }
    }
}

impl fmt::Display for AbstractionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Score;
use crate::errors::{NeuroError, NeuroResult};

/// Channel through which instruction is delivered.
///
/// Declaration order is the canonical tie-break order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Visual,
    Kinesthetic,
    Auditory,
    Logical,
}

impl Modality {
    /// Total number of modalities.
    pub const COUNT: usize = 4;

    /// All variants in canonical order.
    pub const ALL: [Modality; 4] = [
        Self::Visual,
        Self::Kinesthetic,
        Self::Auditory,
        Self::Logical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Kinesthetic => "kinesthetic",
            Self::Auditory => "auditory",
            Self::Logical => "logical",
        }
    }

    /// Position in the canonical order.
    pub fn canonical_rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent per-modality strengths. Always holds exactly one entry per modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "BTreeMap<Modality, Score>")]
pub struct ModalityStrengths(BTreeMap<Modality, Score>);

impl ModalityStrengths {
    /// Every modality at the same score.
    pub fn uniform(score: Score) -> Self {
        Self::from_fn(|_| score)
    }

    /// Build by evaluating `f` once per modality, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Modality) -> Score) -> Self {
        Self(Modality::ALL.iter().map(|&m| (m, f(m))).collect())
    }

    pub fn get(&self, modality: Modality) -> Score {
        self.0.get(&modality).copied().unwrap_or_default()
    }

    /// Overwrite one modality's strength.
    pub fn set(&mut self, modality: Modality, score: Score) {
        self.0.insert(modality, score);
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Modality, Score)> + '_ {
        self.0.iter().map(|(m, s)| (*m, *s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check every stored score is a valid [0, 1] value.
    pub fn ensure_valid(&self) -> NeuroResult<()> {
        for (modality, score) in self.iter() {
            score.ensure_valid(&format!("modality_strengths.{modality}"))?;
        }
        Ok(())
    }
}

impl Default for ModalityStrengths {
    fn default() -> Self {
        Self::uniform(Score::NEUTRAL)
    }
}

impl TryFrom<BTreeMap<Modality, Score>> for ModalityStrengths {
    type Error = NeuroError;

    fn try_from(map: BTreeMap<Modality, Score>) -> Result<Self, Self::Error> {
        if let Some(missing) = Modality::ALL.iter().find(|m| !map.contains_key(m)) {
            return Err(NeuroError::InvariantViolation {
                field: "modality_strengths".to_string(),
                reason: format!("missing entry for {missing}"),
            });
        }
        let strengths = Self(map);
        strengths.ensure_valid()?;
        Ok(strengths)
    }
}

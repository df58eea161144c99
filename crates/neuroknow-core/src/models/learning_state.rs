use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ErrorLog;
use crate::profile::Score;

/// Point-in-time snapshot of a learner's session, produced by the session tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LearningState {
    pub mastered_concepts: BTreeSet<String>,
    /// Concepts the learner is stuck on; the first is the primary struggle.
    pub active_struggles: Vec<String>,
    pub cognitive_load: Score,
    pub engagement_level: Score,
    /// Most recent errors, oldest first.
    pub recent_errors: Vec<ErrorLog>,
}

impl LearningState {
    pub fn primary_struggle(&self) -> Option<&str> {
        self.active_struggles.first().map(String::as_str)
    }

    /// Add a struggle if it is not already tracked and not mastered.
    pub fn add_struggle(&mut self, concept: impl Into<String>) {
        let concept = concept.into();
        if !self.mastered_concepts.contains(&concept) && !self.active_struggles.contains(&concept) {
            self.active_struggles.push(concept);
        }
    }

    /// Record mastery, dropping the concept from the active struggles.
    pub fn mark_mastered(&mut self, concept: impl Into<String>) {
        let concept = concept.into();
        self.active_struggles.retain(|c| *c != concept);
        self.mastered_concepts.insert(concept);
    }

    /// Append an error in chronological position, keeping at most `window` entries.
    pub fn record_error(&mut self, log: ErrorLog, window: usize) {
        let pos = self
            .recent_errors
            .partition_point(|existing| existing.timestamp <= log.timestamp);
        self.recent_errors.insert(pos, log);
        if self.recent_errors.len() > window {
            let excess = self.recent_errors.len() - window;
            self.recent_errors.drain(..excess);
        }
    }
}

//! InMemoryProfileStore — concurrent per-user access via DashMap.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use neuroknow_core::errors::{NeuroError, NeuroResult};
use neuroknow_core::profile::CognitiveProfile;
use neuroknow_core::traits::IProfileStore;

/// Thread-safe profile registry using `DashMap` for concurrent access.
///
/// `update_with` holds the shard write lock for the user while the closure
/// runs, so read-modify-write sequences on one user never interleave. The
/// closure must not call back into the store.
#[derive(Clone)]
pub struct InMemoryProfileStore {
    profiles: Arc<DashMap<String, CognitiveProfile>>,
}

impl InMemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IProfileStore for InMemoryProfileStore {
    fn insert_new(&self, profile: CognitiveProfile) -> NeuroResult<()> {
        match self.profiles.entry(profile.user_id.clone()) {
            Entry::Occupied(existing) => Err(NeuroError::DuplicateUser {
                user_id: existing.key().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(profile);
                Ok(())
            }
        }
    }

    fn get(&self, user_id: &str) -> Option<CognitiveProfile> {
        self.profiles.get(user_id).map(|r| r.value().clone())
    }

    fn update_with(
        &self,
        user_id: &str,
        apply: &mut dyn FnMut(&mut CognitiveProfile) -> NeuroResult<()>,
    ) -> NeuroResult<CognitiveProfile> {
        let mut entry = self
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| NeuroError::UnknownUser {
                user_id: user_id.to_string(),
            })?;
        let mut draft = entry.value().clone();
        apply(&mut draft)?;
        *entry.value_mut() = draft.clone();
        Ok(draft)
    }

    fn remove(&self, user_id: &str) -> Option<CognitiveProfile> {
        self.profiles.remove(user_id).map(|(_, v)| v)
    }

    fn contains(&self, user_id: &str) -> bool {
        self.profiles.contains_key(user_id)
    }

    fn len(&self) -> usize {
        self.profiles.len()
    }

    /// All user IDs, sorted.
    fn user_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.profiles.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }
}

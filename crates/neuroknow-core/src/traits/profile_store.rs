use crate::errors::NeuroResult;
use crate::profile::CognitiveProfile;

/// Owner of the user_id → profile registry.
///
/// Implementations must serialize mutations of the same user: the closure
/// passed to [`IProfileStore::update_with`] runs while no other update of
/// that user can interleave.
pub trait IProfileStore: Send + Sync {
    /// Register a new profile. Fails with `DuplicateUser` if one exists.
    fn insert_new(&self, profile: CognitiveProfile) -> NeuroResult<()>;

    /// Snapshot of a stored profile.
    fn get(&self, user_id: &str) -> Option<CognitiveProfile>;

    /// Atomically mutate a stored profile and return the committed value.
    ///
    /// The closure works on a copy; if it returns an error nothing is written.
    /// Fails with `UnknownUser` if the profile does not exist.
    fn update_with(
        &self,
        user_id: &str,
        apply: &mut dyn FnMut(&mut CognitiveProfile) -> NeuroResult<()>,
    ) -> NeuroResult<CognitiveProfile>;

    /// Remove and return a profile.
    fn remove(&self, user_id: &str) -> Option<CognitiveProfile>;

    fn contains(&self, user_id: &str) -> bool {
        self.get(user_id).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn user_ids(&self) -> Vec<String>;
}

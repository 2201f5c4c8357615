//! In-memory pool of generated profiles.

use crate::GeneratorError;
use fakegen_records::Profile;
use rand::Rng;
use std::collections::HashMap;

/// The set of all profiles generated so far in a run.
///
/// Backed by a `Vec` plus an id-to-index map so random selection is O(1),
/// which matters because it runs once per generation step. Profiles are
/// never mutated or removed; insertion order is preserved for [`all`].
///
/// [`all`]: EntityPool::all
#[derive(Debug, Default)]
pub struct EntityPool {
    profiles: Vec<Profile>,
    index_by_id: HashMap<String, usize>,
}

impl EntityPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.index_by_id.contains_key(entity_id)
    }

    /// Add a new profile. Colliding entity ids are rejected rather than
    /// overwritten; with the digit-suffixed usernames the fake source
    /// produces, a collision indicates a broken synthesizer.
    pub fn insert(&mut self, profile: Profile) -> Result<(), GeneratorError> {
        if self.index_by_id.contains_key(&profile.entity_id) {
            return Err(GeneratorError::DuplicateEntityId(profile.entity_id));
        }
        self.index_by_id
            .insert(profile.entity_id.clone(), self.profiles.len());
        self.profiles.push(profile);
        Ok(())
    }

    /// Select one profile uniformly at random.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<&Profile, GeneratorError> {
        if self.profiles.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }
        Ok(&self.profiles[rng.random_range(0..self.profiles.len())])
    }

    /// Iterate every profile in insertion order. Used once at the start of a
    /// run to drain the seeded population to the sink.
    pub fn all(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }
}

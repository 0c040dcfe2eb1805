use crate::codec::{decode_singleton, encode};
use crate::error::Result;
use crate::models::Profile;
use crate::storage::{SharedStore, PROFILE_KEY};

#[derive(Clone)]
pub struct ProfileRepository {
    store: SharedStore,
}

impl ProfileRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Option<Profile> {
        decode_singleton(PROFILE_KEY, self.store.read(PROFILE_KEY))
    }

    /// Overwrite the stored profile wholesale.
    pub fn save(&self, profile: &Profile) -> Result<()> {
        let text = encode(profile)?;
        if self.store.write(PROFILE_KEY, &text) {
            tracing::debug!("Saved profile for {}", profile.full_name());
        } else {
            tracing::debug!("Profile for {} was not persisted", profile.full_name());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Identity};
    use crate::storage::{MemoryStore, UnavailableStore};

    #[test]
    fn test_get_without_profile() {
        let repo = ProfileRepository::new(MemoryStore::shared());
        assert!(repo.get().is_none());
    }

    #[test]
    fn test_save_overwrites() {
        let repo = ProfileRepository::new(MemoryStore::shared());
        let mut profile = Profile::from_identity(&Identity::default());

        repo.save(&profile).unwrap();
        profile.gender = Gender::Other;
        profile.height = Some(180.0);
        repo.save(&profile).unwrap();

        assert_eq!(repo.get(), Some(profile));
    }

    #[test]
    fn test_unavailable_store_reads_nothing() {
        let repo = ProfileRepository::new(UnavailableStore::shared());
        let profile = Profile::from_identity(&Identity::default());

        repo.save(&profile).unwrap();
        assert!(repo.get().is_none());
    }
}

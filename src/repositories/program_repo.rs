use crate::codec::{decode_collection, encode};
use crate::error::Result;
use crate::models::Program;
use crate::storage::{SharedStore, PROGRAMS_BACKUP_KEY, PROGRAMS_KEY, VERSION_KEY};

use super::collection;
use super::seed::{default_programs, SEED_VERSION};

#[derive(Clone)]
pub struct ProgramRepository {
    store: SharedStore,
}

impl ProgramRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Program> {
        decode_collection(PROGRAMS_KEY, self.store.read(PROGRAMS_KEY))
    }

    pub fn find_by_id(&self, id: &str) -> Option<Program> {
        let programs = self.list();
        collection::find_by_id(&programs, id).cloned()
    }

    /// Insert the program, or replace the one with the same id.
    pub fn save(&self, program: &Program) -> Result<()> {
        let mut programs = self.list();
        collection::upsert(&mut programs, program.clone());
        if self.write_all(&programs)? {
            tracing::debug!("Saved program {} ({})", program.id, program.name);
        } else {
            tracing::debug!("Program {} was not persisted", program.id);
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut programs = self.list();
        let removed = collection::remove_by_id(&mut programs, id);
        if removed > 0 && self.write_all(&programs)? {
            tracing::debug!("Deleted program {}", id);
        }
        Ok(removed > 0)
    }

    /// Install the built-in programs when the stored seed version differs.
    ///
    /// The reseed replaces the whole collection, user programs included. The
    /// previous blob is copied to a backup key first. Returns whether a
    /// reseed happened.
    pub fn seed_defaults_if_needed(&self) -> Result<bool> {
        let stored_version = self.store.read(VERSION_KEY);
        if stored_version.as_deref() == Some(SEED_VERSION) {
            return Ok(false);
        }

        // Back up the raw text, readable or not.
        let previous = self
            .store
            .read(PROGRAMS_KEY)
            .filter(|text| !text.trim().is_empty() && text.trim() != "[]");
        if let Some(previous) = previous {
            let existing: Vec<Program> = decode_collection(PROGRAMS_KEY, Some(previous.clone()));
            tracing::warn!(
                "Seed version changed ({:?} -> {}), replacing {} readable stored program(s)",
                stored_version,
                SEED_VERSION,
                existing.len()
            );
            if !self.store.write(PROGRAMS_BACKUP_KEY, &previous) {
                tracing::warn!("Could not back up stored programs before reseeding");
            }
        }

        // The marker only moves once the programs themselves were stored.
        let stored = self.write_all(&default_programs())?;
        if stored && self.store.write(VERSION_KEY, SEED_VERSION) {
            tracing::info!("Seeded default programs at version {}", SEED_VERSION);
        } else {
            tracing::debug!("Default programs were not persisted");
        }
        Ok(true)
    }

    /// Whether the store accepted the write.
    fn write_all(&self, programs: &[Program]) -> Result<bool> {
        let text = encode(programs)?;
        Ok(self.store.write(PROGRAMS_KEY, &text))
    }
}

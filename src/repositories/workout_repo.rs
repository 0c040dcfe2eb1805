use crate::codec::{decode_collection, encode};
use crate::error::Result;
use crate::models::Workout;
use crate::storage::{SharedStore, WORKOUTS_KEY};

use super::collection;

#[derive(Clone)]
pub struct WorkoutRepository {
    store: SharedStore,
}

impl WorkoutRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All workouts in stored order, not sorted by date.
    pub fn list(&self) -> Vec<Workout> {
        decode_collection(WORKOUTS_KEY, self.store.read(WORKOUTS_KEY))
    }

    /// Insert the workout, or replace the one with the same id.
    pub fn save(&self, workout: &Workout) -> Result<()> {
        let mut workouts = self.list();
        collection::upsert(&mut workouts, workout.clone());
        if self.write_all(&workouts)? {
            tracing::debug!("Saved workout {} for {}", workout.id, workout.date);
        } else {
            tracing::debug!("Workout for {} was not persisted", workout.date);
        }
        Ok(())
    }

    pub fn find_by_date(&self, date: &str) -> Option<Workout> {
        let workouts = self.list();
        collection::find_by_date(&workouts, date).cloned()
    }

    /// Remove every workout for the date. Nothing is written when none match.
    pub fn delete_by_date(&self, date: &str) -> Result<usize> {
        let mut workouts = self.list();
        let removed = collection::remove_by_date(&mut workouts, date);
        if removed > 0 && self.write_all(&workouts)? {
            tracing::debug!("Deleted {} workout(s) for {}", removed, date);
        }
        Ok(removed)
    }

    /// Whether the store accepted the write.
    fn write_all(&self, workouts: &[Workout]) -> Result<bool> {
        let text = encode(workouts)?;
        Ok(self.store.write(WORKOUTS_KEY, &text))
    }
}

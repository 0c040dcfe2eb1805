//! Pure operations over in-memory record collections.
//!
//! Collections are plain vectors in stored order. Repositories load a
//! collection, run one of these, and write the whole collection back.

use crate::models::{Identified, Workout};

/// Replace the first record with the same id, or append when none matches.
pub fn upsert<T: Identified>(items: &mut Vec<T>, record: T) {
    match items.iter().position(|item| item.id() == record.id()) {
        Some(index) => items[index] = record,
        None => items.push(record),
    }
}

pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Remove every record with this id. Returns how many were removed.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    before - items.len()
}

/// First workout logged for the date.
pub fn find_by_date<'a>(workouts: &'a [Workout], date: &str) -> Option<&'a Workout> {
    workouts.iter().find(|w| w.date == date)
}

/// Remove every workout logged for the date. Returns how many were removed.
pub fn remove_by_date(workouts: &mut Vec<Workout>, date: &str) -> usize {
    let before = workouts.len();
    workouts.retain(|w| w.date != date);
    before - workouts.len()
}

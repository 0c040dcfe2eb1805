//! Editing lifecycle of a single day's workout.
//!
//! A workout moves from drafting to saved-incomplete to saved-completed.
//! Workouts dated before today open locked: every mutation fails until
//! [`WorkoutEditor::unlock`] is called. The lock is derived each time the
//! editor opens and is never stored.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::coerce::{coerce_count, coerce_text};
use crate::models::{Program, Workout, WorkoutExercise, WorkoutSet};
use crate::repositories::WorkoutRepository;
use crate::views::parse_set_count;

/// Upper bound on the rows a typed prescription may create.
pub const MAX_PRESCRIBED_SETS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutPhase {
    /// Unsaved: new, edited since the last save, or unlocked for editing.
    Drafting,
    SavedIncomplete,
    SavedCompleted,
}

pub struct WorkoutEditor {
    workout: Workout,
    persisted: bool,
    dirty: bool,
    locked: bool,
}

fn is_past(date: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d < today)
        .unwrap_or(false)
}

impl WorkoutEditor {
    /// Load the stored workout for the date, or start a fresh draft.
    pub fn open(repo: &WorkoutRepository, date: &str, today: NaiveDate) -> Self {
        let existing = repo.find_by_date(date);
        let persisted = existing.is_some();

        Self {
            workout: existing.unwrap_or_else(|| Workout::new(date)),
            persisted,
            dirty: false,
            locked: is_past(date, today),
        }
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn into_workout(self) -> Workout {
        self.workout
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn phase(&self) -> WorkoutPhase {
        if !self.persisted || self.dirty {
            WorkoutPhase::Drafting
        } else if self.workout.completed {
            WorkoutPhase::SavedCompleted
        } else {
            WorkoutPhase::SavedIncomplete
        }
    }

    pub fn unlock(&mut self) {
        if self.locked {
            tracing::debug!("Unlocking workout for {}", self.workout.date);
        }
        self.locked = false;
        self.dirty = true;
    }

    fn edit(&mut self) -> Result<&mut Workout> {
        if self.locked {
            return Err(AppError::Locked(self.workout.date.clone()));
        }
        self.dirty = true;
        Ok(&mut self.workout)
    }

    fn exercise_mut(&mut self, exercise: usize) -> Result<&mut WorkoutExercise> {
        self.edit()?
            .exercises
            .get_mut(exercise)
            .ok_or_else(|| AppError::NotFound(format!("Exercise {} not found", exercise)))
    }

    fn set_mut(&mut self, exercise: usize, set: usize) -> Result<&mut WorkoutSet> {
        self.exercise_mut(exercise)?
            .sets
            .get_mut(set)
            .ok_or_else(|| AppError::NotFound(format!("Set {} not found", set)))
    }

    /// Replace every exercise with the program's prescription.
    pub fn select_program(&mut self, program: &Program) -> Result<()> {
        let workout = self.edit()?;
        workout.program_id = Some(program.id.clone());
        workout.program_name = Some(program.name.clone());
        workout.exercises = program
            .exercises
            .iter()
            .map(WorkoutExercise::from_template)
            .collect();
        Ok(())
    }

    pub fn add_exercise(&mut self, name: &str) -> Result<()> {
        self.edit()?.exercises.push(WorkoutExercise::new(name));
        Ok(())
    }

    /// Add an exercise with blank set rows sized by a prescription like
    /// `"4x6-8"`. More than [`MAX_PRESCRIBED_SETS`] rows is rejected.
    pub fn add_prescribed_exercise(&mut self, name: &str, prescription: &str) -> Result<()> {
        let workout = self.edit()?;
        let count = parse_set_count(prescription);
        if count > MAX_PRESCRIBED_SETS {
            return Err(AppError::Validation(format!(
                "At most {} sets per exercise",
                MAX_PRESCRIBED_SETS
            )));
        }

        let mut exercise = WorkoutExercise::new(name);
        exercise.sets = (0..count).map(|_| WorkoutSet::new(0, 0.0)).collect();
        workout.exercises.push(exercise);
        Ok(())
    }

    pub fn remove_exercise(&mut self, exercise: usize) -> Result<WorkoutExercise> {
        let workout = self.edit()?;
        if exercise >= workout.exercises.len() {
            return Err(AppError::NotFound(format!("Exercise {} not found", exercise)));
        }
        Ok(workout.exercises.remove(exercise))
    }

    pub fn add_set(&mut self, exercise: usize) -> Result<()> {
        let exercise = self.exercise_mut(exercise)?;
        let set = exercise.next_set();
        exercise.sets.push(set);
        Ok(())
    }

    pub fn remove_set(&mut self, exercise: usize, set: usize) -> Result<WorkoutSet> {
        let sets = &mut self.exercise_mut(exercise)?.sets;
        if set >= sets.len() {
            return Err(AppError::NotFound(format!("Set {} not found", set)));
        }
        Ok(sets.remove(set))
    }

    /// Weight as typed into the form; unreadable input counts as 0.
    pub fn set_weight(&mut self, exercise: usize, set: usize, input: &str) -> Result<()> {
        self.set_mut(exercise, set)?.weight = coerce_text(input);
        Ok(())
    }

    pub fn set_reps(&mut self, exercise: usize, set: usize, input: &str) -> Result<()> {
        self.set_mut(exercise, set)?.reps = coerce_count(&Value::String(input.to_string()));
        Ok(())
    }

    /// Flip a set's checkbox, returning the new state.
    pub fn toggle_set(&mut self, exercise: usize, set: usize) -> Result<bool> {
        let set = self.set_mut(exercise, set)?;
        set.completed = !set.completed;
        Ok(set.completed)
    }

    pub fn save(&mut self, repo: &WorkoutRepository) -> Result<()> {
        if self.locked {
            return Err(AppError::Locked(self.workout.date.clone()));
        }
        repo.save(&self.workout)?;
        self.persisted = true;
        self.dirty = false;
        Ok(())
    }

    /// Mark the whole workout done and save it.
    pub fn finish(&mut self, repo: &WorkoutRepository) -> Result<()> {
        self.edit()?.completed = true;
        self.save(repo)?;
        tracing::info!("Finished workout for {}", self.workout.date);
        Ok(())
    }

    /// Drop everything stored for this date and start over with a new draft.
    pub fn reset(&mut self, repo: &WorkoutRepository) -> Result<()> {
        if self.locked {
            return Err(AppError::Locked(self.workout.date.clone()));
        }
        repo.delete_by_date(&self.workout.date)?;
        self.workout = Workout::new(&self.workout.date);
        self.persisted = false;
        self.dirty = false;
        Ok(())
    }
}

use std::collections::BTreeSet;

use super::{ProgramRepository, WorkoutRepository};

/// Exercise names are not stored on their own; they are read off workouts
/// and programs.
#[derive(Clone)]
pub struct ExerciseRepository {
    workout_repo: WorkoutRepository,
    program_repo: ProgramRepository,
}

impl ExerciseRepository {
    pub fn new(workout_repo: WorkoutRepository, program_repo: ProgramRepository) -> Self {
        Self {
            workout_repo,
            program_repo,
        }
    }

    /// Every exercise name used by any workout or program, deduplicated by
    /// exact text and sorted ascending.
    pub fn list_unique_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();

        for workout in self.workout_repo.list() {
            names.extend(workout.exercises.into_iter().map(|e| e.name));
        }
        for program in self.program_repo.list() {
            names.extend(program.exercises.into_iter().map(|e| e.name));
        }

        names.into_iter().collect()
    }
}

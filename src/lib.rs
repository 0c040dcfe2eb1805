pub mod codec;
pub mod config;
pub mod db;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod storage;
pub mod version;
pub mod views;

use storage::SharedStore;

use handlers::{calendar, dashboard, exercises, profile, programs, stats, workouts};
use repositories::{ExerciseRepository, ProfileRepository, ProgramRepository, WorkoutRepository};
use routes::AppStates;

/// Wire every repository over one store into the handler states.
pub fn build_states(store: SharedStore) -> AppStates {
    let profile_repo = ProfileRepository::new(store.clone());
    let workout_repo = WorkoutRepository::new(store.clone());
    let program_repo = ProgramRepository::new(store);
    let exercise_repo = ExerciseRepository::new(workout_repo.clone(), program_repo.clone());

    AppStates {
        profile: profile::ProfileState {
            profile_repo: profile_repo.clone(),
        },
        dashboard: dashboard::DashboardState {
            profile_repo,
            workout_repo: workout_repo.clone(),
        },
        workouts: workouts::WorkoutsState {
            workout_repo: workout_repo.clone(),
            program_repo: program_repo.clone(),
        },
        programs: programs::ProgramsState { program_repo },
        exercises: exercises::ExercisesState { exercise_repo },
        stats: stats::StatsState {
            workout_repo: workout_repo.clone(),
        },
        calendar: calendar::CalendarState { workout_repo },
    }
}

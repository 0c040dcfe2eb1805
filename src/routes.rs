use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{calendar, dashboard, exercises, health, profile, programs, stats, workouts};

pub struct AppStates {
    pub profile: profile::ProfileState,
    pub dashboard: dashboard::DashboardState,
    pub workouts: workouts::WorkoutsState,
    pub programs: programs::ProgramsState,
    pub exercises: exercises::ExercisesState,
    pub stats: stats::StatsState,
    pub calendar: calendar::CalendarState,
}

pub fn create_router(states: AppStates) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Dashboard
        .route("/dashboard", get(dashboard::index))
        .with_state(states.dashboard)
        // Profile
        .route("/profile", get(profile::show).put(profile::update))
        .with_state(states.profile)
        // Workout routes
        .route("/workouts", get(workouts::list).post(workouts::save))
        .route(
            "/workouts/{date}",
            get(workouts::show).delete(workouts::delete),
        )
        .route("/workouts/{date}/editor", get(workouts::editor))
        .route("/workouts/{date}/program", post(workouts::select_program))
        .route("/workouts/{date}/exercises", post(workouts::add_exercise))
        .route(
            "/workouts/{date}/exercises/{exercise}",
            delete(workouts::remove_exercise),
        )
        .route(
            "/workouts/{date}/exercises/{exercise}/sets",
            post(workouts::add_set),
        )
        .route(
            "/workouts/{date}/exercises/{exercise}/sets/{set}",
            patch(workouts::update_set).delete(workouts::remove_set),
        )
        .route(
            "/workouts/{date}/exercises/{exercise}/sets/{set}/toggle",
            post(workouts::toggle_set),
        )
        .route("/workouts/{date}/finish", post(workouts::finish))
        .route("/workouts/{date}/reset", post(workouts::reset))
        .with_state(states.workouts)
        // Program routes
        .route("/programs", get(programs::list).post(programs::create))
        .route(
            "/programs/{id}",
            get(programs::show).delete(programs::delete),
        )
        .with_state(states.programs)
        // Exercise routes
        .route("/exercises", get(exercises::list))
        .with_state(states.exercises)
        // Stats routes
        .route("/progress", get(stats::progress))
        .route("/exercises/{name}/history", get(stats::exercise_history))
        .with_state(states.stats)
        // Calendar
        .route("/calendar/{year}/{month}", get(calendar::month))
        .with_state(states.calendar)
}

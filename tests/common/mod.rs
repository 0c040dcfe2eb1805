#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;

use fitol::db::{create_memory_pool, DbPool};
use fitol::migrations::run_migrations_for_tests;
use fitol::models::{Program, ProgramExercise, Workout, WorkoutExercise, WorkoutSet};
use fitol::repositories::{ProgramRepository, WorkoutRepository};
use fitol::storage::{SharedStore, SqliteStore};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn setup_test_store() -> SharedStore {
    SqliteStore::shared(setup_test_db())
}

pub fn create_test_app(store: SharedStore) -> Router {
    fitol::routes::create_router(fitol::build_states(store))
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// Test data creation helpers
pub fn create_test_workout(store: &SharedStore, date: &str, exercise: &str, weights: &[f64]) -> Workout {
    let mut workout_exercise = WorkoutExercise::new(exercise);
    workout_exercise.sets = weights.iter().map(|w| WorkoutSet::new(5, *w)).collect();

    let mut workout = Workout::new(date);
    workout.exercises.push(workout_exercise);

    WorkoutRepository::new(store.clone()).save(&workout).unwrap();
    workout
}

pub fn create_test_program(store: &SharedStore, id: &str, name: &str) -> Program {
    let program = Program {
        id: id.to_string(),
        name: name.to_string(),
        exercises: vec![
            ProgramExercise::new("Squat", 4, 10),
            ProgramExercise::new("Leg Press", 3, 12),
        ],
    };

    ProgramRepository::new(store.clone()).save(&program).unwrap();
    program
}

use axum::{extract::State, Json};

use super::blocking;
use crate::error::Result;
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

/// Autocomplete source: names from workouts and programs.
pub async fn list(State(state): State<ExercisesState>) -> Result<Json<Vec<String>>> {
    let names = blocking(move || Ok(state.exercise_repo.list_unique_names())).await?;
    Ok(Json(names))
}

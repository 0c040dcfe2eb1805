use axum::{
    extract::{Path, State},
    Json,
};

use super::blocking;
use crate::error::Result;
use crate::repositories::WorkoutRepository;
use crate::views::{max_weight_history, progress_exercise_names, MaxWeightPoint};

#[derive(Clone)]
pub struct StatsState {
    pub workout_repo: WorkoutRepository,
}

pub async fn progress(State(state): State<StatsState>) -> Result<Json<Vec<String>>> {
    let workouts = blocking(move || Ok(state.workout_repo.list())).await?;
    Ok(Json(progress_exercise_names(&workouts)))
}

pub async fn exercise_history(
    State(state): State<StatsState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<MaxWeightPoint>>> {
    let workouts = blocking(move || Ok(state.workout_repo.list())).await?;
    Ok(Json(max_weight_history(&workouts, &name)))
}

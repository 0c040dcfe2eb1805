use axum::{
    extract::{Path, State},
    Json,
};

use super::{blocking, today};
use crate::error::{AppError, Result};
use crate::repositories::WorkoutRepository;
use crate::views::{month_grid, MonthGrid};

#[derive(Clone)]
pub struct CalendarState {
    pub workout_repo: WorkoutRepository,
}

pub async fn month(
    State(state): State<CalendarState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthGrid>> {
    let workouts = blocking(move || Ok(state.workout_repo.list())).await?;

    let grid = month_grid(&workouts, year, month, Some(today()))
        .ok_or_else(|| AppError::NotFound(format!("No such month: {}-{}", year, month)))?;

    Ok(Json(grid))
}

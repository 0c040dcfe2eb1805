use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Workout;
use crate::repositories::collection;

pub const CUSTOM_WORKOUT_LABEL: &str = "Custom Workout";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaySummary {
    pub date: String,
    pub program_name: String,
    pub exercise_count: usize,
    pub completed: bool,
}

/// Headline for today's workout, if one is planned.
pub fn today_summary(workouts: &[Workout], today: NaiveDate) -> Option<TodaySummary> {
    let date = today.format("%Y-%m-%d").to_string();
    let workout = collection::find_by_date(workouts, &date)?;

    Some(TodaySummary {
        program_name: workout
            .program_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| CUSTOM_WORKOUT_LABEL.to_string()),
        exercise_count: workout.exercises.len(),
        completed: workout.completed,
        date,
    })
}

use axum::{extract::State, Json};
use serde::Serialize;

use super::{blocking, today};
use crate::error::Result;
use crate::models::Profile;
use crate::repositories::{ProfileRepository, WorkoutRepository};
use crate::views::{today_summary, TodaySummary};

#[derive(Clone)]
pub struct DashboardState {
    pub profile_repo: ProfileRepository,
    pub workout_repo: WorkoutRepository,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    /// Absent until onboarding has saved a profile.
    pub profile: Option<Profile>,
    pub today: Option<TodaySummary>,
}

pub async fn index(State(state): State<DashboardState>) -> Result<Json<DashboardResponse>> {
    let (profile, workouts) =
        blocking(move || Ok((state.profile_repo.get(), state.workout_repo.list()))).await?;

    Ok(Json(DashboardResponse {
        profile,
        today: today_summary(&workouts, today()),
    }))
}

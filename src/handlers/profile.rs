use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::blocking;
use crate::error::Result;
use crate::models::{Identity, Profile};
use crate::repositories::ProfileRepository;

#[derive(Clone)]
pub struct ProfileState {
    pub profile_repo: ProfileRepository,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    /// False when the profile is only a default built from the identity.
    pub stored: bool,
}

pub async fn show(
    State(state): State<ProfileState>,
    Query(identity): Query<Identity>,
) -> Result<Json<ProfileResponse>> {
    let stored = blocking(move || Ok(state.profile_repo.get())).await?;

    let response = match stored {
        Some(profile) => ProfileResponse {
            profile,
            stored: true,
        },
        None => ProfileResponse {
            profile: Profile::from_identity(&identity),
            stored: false,
        },
    };

    Ok(Json(response))
}

pub async fn update(
    State(state): State<ProfileState>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>> {
    let saved = profile.clone();
    blocking(move || state.profile_repo.save(&saved)).await?;
    Ok(Json(profile))
}

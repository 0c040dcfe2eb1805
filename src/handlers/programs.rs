use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::blocking;
use crate::error::{AppError, Result};
use crate::models::{CreateProgram, Program};
use crate::repositories::ProgramRepository;

#[derive(Clone)]
pub struct ProgramsState {
    pub program_repo: ProgramRepository,
}

pub async fn list(State(state): State<ProgramsState>) -> Result<Json<Vec<Program>>> {
    let programs = blocking(move || Ok(state.program_repo.list())).await?;
    Ok(Json(programs))
}

pub async fn create(
    State(state): State<ProgramsState>,
    Json(form): Json<CreateProgram>,
) -> Result<(StatusCode, Json<Program>)> {
    let program = form.into_program()?;

    let saved = program.clone();
    blocking(move || state.program_repo.save(&saved)).await?;

    tracing::info!("Created program {} ({})", program.id, program.name);
    Ok((StatusCode::CREATED, Json(program)))
}

pub async fn show(
    State(state): State<ProgramsState>,
    Path(id): Path<String>,
) -> Result<Json<Program>> {
    let program = blocking(move || Ok(state.program_repo.find_by_id(&id)))
        .await?
        .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;
    Ok(Json(program))
}

pub async fn delete(
    State(state): State<ProgramsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let deleted = blocking(move || state.program_repo.delete(&id)).await?;

    if !deleted {
        return Err(AppError::NotFound("Program not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

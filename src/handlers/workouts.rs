use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{blocking, today};
use crate::editor::{WorkoutEditor, WorkoutPhase};
use crate::error::{AppError, Result};
use crate::models::{coerce, Workout};
use crate::repositories::{ProgramRepository, WorkoutRepository};

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
    pub program_repo: ProgramRepository,
}

#[derive(Debug, Serialize)]
pub struct EditorView {
    pub workout: Workout,
    pub phase: WorkoutPhase,
    pub locked: bool,
}

impl From<WorkoutEditor> for EditorView {
    fn from(editor: WorkoutEditor) -> Self {
        let phase = editor.phase();
        let locked = editor.is_locked();
        Self {
            workout: editor.into_workout(),
            phase,
            locked,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectProgram {
    pub program_id: String,
    /// Edit a past workout anyway.
    #[serde(default)]
    pub unlock: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddExercise {
    pub name: String,
    /// Set/rep text such as `"4x6-8"`; sizes the blank set rows.
    pub prescription: Option<String>,
    #[serde(default)]
    pub unlock: bool,
}

/// Query flags shared by the editing routes.
#[derive(Debug, Default, Deserialize)]
pub struct EditParams {
    /// Edit a past workout anyway.
    #[serde(default)]
    pub unlock: bool,
}

/// Form values for one set row. Absent fields are left alone.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSet {
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub reps: Option<String>,
}

/// Open the day's editor, apply one change and save the result.
async fn apply<F>(
    state: WorkoutsState,
    date: String,
    unlock: bool,
    change: F,
) -> Result<Json<EditorView>>
where
    F: FnOnce(&mut WorkoutEditor) -> Result<()> + Send + 'static,
{
    let editor = blocking(move || {
        let mut editor = WorkoutEditor::open(&state.workout_repo, &date, today());
        if unlock {
            editor.unlock();
        }
        change(&mut editor)?;
        editor.save(&state.workout_repo)?;
        Ok(editor)
    })
    .await?;

    Ok(Json(editor.into()))
}

pub async fn list(State(state): State<WorkoutsState>) -> Result<Json<Vec<Workout>>> {
    let workouts = blocking(move || Ok(state.workout_repo.list())).await?;
    Ok(Json(workouts))
}

/// Upsert a whole workout record.
pub async fn save(
    State(state): State<WorkoutsState>,
    Json(mut workout): Json<Workout>,
) -> Result<Json<Workout>> {
    if workout.date.trim().is_empty() {
        return Err(AppError::Validation("Workout date is required".to_string()));
    }
    if workout.id.is_empty() {
        workout.id = Uuid::new_v4().to_string();
    }

    let saved = workout.clone();
    blocking(move || state.workout_repo.save(&saved)).await?;
    Ok(Json(workout))
}

pub async fn show(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
) -> Result<Json<Workout>> {
    let workout = blocking(move || Ok(state.workout_repo.find_by_date(&date)))
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;
    Ok(Json(workout))
}

/// Reset a day: every workout stored for the date is removed.
pub async fn delete(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
) -> Result<StatusCode> {
    blocking(move || state.workout_repo.delete_by_date(&date)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The stored workout for the date, or a fresh draft.
pub async fn editor(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
) -> Result<Json<EditorView>> {
    let editor = blocking(move || Ok(WorkoutEditor::open(&state.workout_repo, &date, today())))
        .await?;
    Ok(Json(editor.into()))
}

pub async fn select_program(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
    Json(form): Json<SelectProgram>,
) -> Result<Json<EditorView>> {
    let programs = state.program_repo.clone();
    let program_id = form.program_id;
    let program = blocking(move || Ok(programs.find_by_id(&program_id)))
        .await?
        .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;

    apply(state, date, form.unlock, move |editor| editor.select_program(&program)).await
}

pub async fn add_exercise(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
    Json(form): Json<AddExercise>,
) -> Result<Json<EditorView>> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Exercise name is required".to_string()));
    }

    apply(state, date, form.unlock, move |editor| {
        match form.prescription.as_deref() {
            Some(prescription) => editor.add_prescribed_exercise(&name, prescription),
            None => editor.add_exercise(&name),
        }
    })
    .await
}

pub async fn remove_exercise(
    State(state): State<WorkoutsState>,
    Path((date, exercise)): Path<(String, usize)>,
    Query(params): Query<EditParams>,
) -> Result<Json<EditorView>> {
    apply(state, date, params.unlock, move |editor| {
        editor.remove_exercise(exercise).map(|_| ())
    })
    .await
}

/// Append a set copying the last one's reps and weight.
pub async fn add_set(
    State(state): State<WorkoutsState>,
    Path((date, exercise)): Path<(String, usize)>,
    Query(params): Query<EditParams>,
) -> Result<Json<EditorView>> {
    apply(state, date, params.unlock, move |editor| editor.add_set(exercise)).await
}

pub async fn update_set(
    State(state): State<WorkoutsState>,
    Path((date, exercise, set)): Path<(String, usize, usize)>,
    Query(params): Query<EditParams>,
    Json(form): Json<UpdateSet>,
) -> Result<Json<EditorView>> {
    apply(state, date, params.unlock, move |editor| {
        if let Some(weight) = form.weight.as_deref() {
            editor.set_weight(exercise, set, weight)?;
        }
        if let Some(reps) = form.reps.as_deref() {
            editor.set_reps(exercise, set, reps)?;
        }
        Ok(())
    })
    .await
}

pub async fn toggle_set(
    State(state): State<WorkoutsState>,
    Path((date, exercise, set)): Path<(String, usize, usize)>,
    Query(params): Query<EditParams>,
) -> Result<Json<EditorView>> {
    apply(state, date, params.unlock, move |editor| {
        editor.toggle_set(exercise, set).map(|_| ())
    })
    .await
}

pub async fn remove_set(
    State(state): State<WorkoutsState>,
    Path((date, exercise, set)): Path<(String, usize, usize)>,
    Query(params): Query<EditParams>,
) -> Result<Json<EditorView>> {
    apply(state, date, params.unlock, move |editor| {
        editor.remove_set(exercise, set).map(|_| ())
    })
    .await
}

pub async fn finish(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
    Query(params): Query<EditParams>,
) -> Result<Json<EditorView>> {
    let editor = blocking(move || {
        let mut editor = WorkoutEditor::open(&state.workout_repo, &date, today());
        if params.unlock {
            editor.unlock();
        }
        editor.finish(&state.workout_repo)?;
        Ok(editor)
    })
    .await?;

    Ok(Json(editor.into()))
}

/// Discard the day's workout and hand back a fresh draft.
pub async fn reset(
    State(state): State<WorkoutsState>,
    Path(date): Path<String>,
    Query(params): Query<EditParams>,
) -> Result<Json<EditorView>> {
    let editor = blocking(move || {
        let mut editor = WorkoutEditor::open(&state.workout_repo, &date, today());
        if params.unlock {
            editor.unlock();
        }
        editor.reset(&state.workout_repo)?;
        Ok(editor)
    })
    .await?;

    Ok(Json(editor.into()))
}

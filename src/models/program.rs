use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{coerce, Identified};
use crate::error::{AppError, Result};

pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramExercise {
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::count")]
    pub default_sets: u32,
    #[serde(default, deserialize_with = "coerce::count")]
    pub default_reps: u32,
}

impl ProgramExercise {
    pub fn new(name: &str, default_sets: u32, default_reps: u32) -> Self {
        Self {
            name: name.to_string(),
            default_sets,
            default_reps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::list")]
    pub exercises: Vec<ProgramExercise>,
}

impl Identified for Program {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProgram {
    pub name: String,
    #[serde(default, deserialize_with = "coerce::list")]
    pub exercises: Vec<ProgramExercise>,
}

impl CreateProgram {
    /// Build a new program with a fresh id, dropping exercises without a name.
    pub fn into_program(self) -> Result<Program> {
        let name = self.name.trim().to_string();
        let exercises: Vec<ProgramExercise> = self
            .exercises
            .into_iter()
            .filter(|e| !e.name.trim().is_empty())
            .collect();

        if name.is_empty() || exercises.is_empty() {
            return Err(AppError::Validation(
                "Please enter a program name and at least one exercise.".to_string(),
            ));
        }

        Ok(Program {
            id: Uuid::new_v4().to_string(),
            name,
            exercises,
        })
    }
}

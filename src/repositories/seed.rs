//! Built-in program list installed on first run and on every seed version bump.

use crate::models::{Program, ProgramExercise};

/// Bump to force a reseed of the program collection.
pub const SEED_VERSION: &str = "v3_text_updates";

fn program(id: &str, name: &str, exercises: &[(&str, u32, u32)]) -> Program {
    Program {
        id: id.to_string(),
        name: name.to_string(),
        exercises: exercises
            .iter()
            .map(|(name, sets, reps)| ProgramExercise::new(name, *sets, *reps))
            .collect(),
    }
}

pub fn default_programs() -> Vec<Program> {
    vec![
        program(
            "mon",
            "Pazartesi (Chest & Shoulders)",
            &[
                ("Bench Press", 4, 8),
                ("Incline Dumbbell Press", 4, 8),
                ("Cable Cross", 3, 12),
                ("Overhead Press", 4, 10),
                ("Lateral Raise", 4, 12),
                ("Rear Delt", 3, 12),
                ("Triceps Pushdown", 4, 10),
            ],
        ),
        program(
            "tue",
            "Salı (Back & Arms)",
            &[
                ("Lat Pulldown", 4, 10),
                ("Barbell Row", 4, 10),
                ("Cable Row", 3, 12),
                ("Pullover", 3, 12),
                ("Pull Up", 1, 10),
                ("Barbell Curl", 4, 10),
                ("Dumbell Curl", 4, 10),
            ],
        ),
        program(
            "wed",
            "Çarşamba (Legs)",
            &[
                ("Squat", 4, 10),
                ("Leg Press", 4, 10),
                ("Leg Curl", 5, 12),
                ("Calf Raise", 4, 15),
            ],
        ),
        program(
            "fri",
            "Cuma (Upper Body)",
            &[
                ("Incline Dumbbell Press", 4, 8),
                ("Cable Cross", 3, 12),
                ("Overhead Press", 4, 10),
                ("Lateral Raise", 3, 10),
                ("Rear Delt", 3, 12),
                ("Triceps Pushdown", 4, 10),
            ],
        ),
        program(
            "sat",
            "Cumartesi (Full Body / Mix)",
            &[
                ("Lat Pulldown", 4, 10),
                ("Cable Row", 4, 12),
                ("Romanian Deadlift", 4, 10),
                ("Dumbell Curl", 4, 10),
                ("Leg Press", 5, 10),
                ("Calf Raise", 4, 15),
            ],
        ),
    ]
}

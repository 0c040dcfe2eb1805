use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{coerce, Identified, ProgramExercise};

/// Weight put on every set created from a program template.
pub const STARTING_WEIGHT: f64 = 0.0;
/// Reps for a set added to an exercise that has none to copy from.
pub const FALLBACK_REPS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(default, deserialize_with = "coerce::count")]
    pub reps: u32,
    /// Weight in kg.
    #[serde(default, deserialize_with = "coerce::number")]
    pub weight: f64,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub completed: bool,
}

impl WorkoutSet {
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reps,
            weight,
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::list")]
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sets: Vec::new(),
        }
    }

    /// Expand a program entry into its prescribed sets.
    pub fn from_template(template: &ProgramExercise) -> Self {
        let sets = (0..template.default_sets)
            .map(|_| WorkoutSet::new(template.default_reps, STARTING_WEIGHT))
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            name: template.name.clone(),
            sets,
        }
    }

    /// Heaviest set, floored at zero. An exercise with no sets weighs 0.
    pub fn max_weight(&self) -> f64 {
        self.sets
            .iter()
            .map(|s| s.weight)
            .fold(0.0, f64::max)
    }

    /// Next set, carrying over the last set's reps and weight.
    pub fn next_set(&self) -> WorkoutSet {
        match self.sets.last() {
            Some(last) => WorkoutSet::new(last.reps, last.weight),
            None => WorkoutSet::new(FALLBACK_REPS, STARTING_WEIGHT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(default, deserialize_with = "coerce::text")]
    pub id: String,
    /// Calendar date as `YYYY-MM-DD`; the lookup key.
    #[serde(default, deserialize_with = "coerce::text")]
    pub date: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_text"
    )]
    pub program_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_text"
    )]
    pub program_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::list")]
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub completed: bool,
}

impl Identified for Workout {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Workout {
    pub fn new(date: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: date.to_string(),
            program_id: None,
            program_name: None,
            exercises: Vec::new(),
            completed: false,
        }
    }

    pub fn exercise(&self, name: &str) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workout_defaults() {
        let workout = Workout::new("2025-01-01");

        assert_eq!(workout.date, "2025-01-01");
        assert!(workout.exercises.is_empty());
        assert!(!workout.completed);
        assert!(workout.program_id.is_none());
        assert!(Uuid::parse_str(&workout.id).is_ok());
    }

    #[test]
    fn test_from_template_expands_sets() {
        let template = ProgramExercise::new("Squat", 4, 10);
        let exercise = WorkoutExercise::from_template(&template);

        assert_eq!(exercise.name, "Squat");
        assert_eq!(exercise.sets.len(), 4);
        assert!(exercise
            .sets
            .iter()
            .all(|s| s.reps == 10 && s.weight == STARTING_WEIGHT && !s.completed));
    }

    #[test]
    fn test_max_weight() {
        let mut exercise = WorkoutExercise::new("Squat");
        assert_eq!(exercise.max_weight(), 0.0);

        exercise.sets.push(WorkoutSet::new(5, 100.0));
        exercise.sets.push(WorkoutSet::new(5, 105.0));
        exercise.sets.push(WorkoutSet::new(5, 0.0));
        assert_eq!(exercise.max_weight(), 105.0);
    }

    #[test]
    fn test_next_set_copies_last() {
        let mut exercise = WorkoutExercise::new("Row");
        let first = exercise.next_set();
        assert_eq!(first.reps, FALLBACK_REPS);
        assert_eq!(first.weight, STARTING_WEIGHT);

        exercise.sets.push(WorkoutSet::new(8, 60.0));
        let next = exercise.next_set();
        assert_eq!(next.reps, 8);
        assert_eq!(next.weight, 60.0);
        assert_ne!(next.id, exercise.sets[0].id);
    }

    #[test]
    fn test_set_fields_accept_text() {
        let set: WorkoutSet =
            serde_json::from_str(r#"{"id":"s1","reps":"8","weight":"","completed":true}"#)
                .unwrap();

        assert_eq!(set.reps, 8);
        assert_eq!(set.weight, 0.0);
        assert!(set.completed);
    }
}

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Workout, WorkoutSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxWeightPoint {
    pub date: String,
    pub max_weight: f64,
    pub sets: Vec<WorkoutSet>,
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Valid dates in calendar order, then anything unparseable by text.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Heaviest set per workout for one exercise, oldest first.
///
/// Names match exactly. A workout listing the exercise twice contributes
/// only its first entry.
pub fn max_weight_history(workouts: &[Workout], exercise_name: &str) -> Vec<MaxWeightPoint> {
    let mut history: Vec<MaxWeightPoint> = workouts
        .iter()
        .filter_map(|workout| {
            let exercise = workout.exercise(exercise_name)?;
            Some(MaxWeightPoint {
                date: workout.date.clone(),
                max_weight: exercise.max_weight(),
                sets: exercise.sets.clone(),
            })
        })
        .collect();

    history.sort_by(|a, b| compare_dates(&a.date, &b.date));
    history
}

/// Exercise names that have at least one logged workout, sorted.
pub fn progress_exercise_names(workouts: &[Workout]) -> Vec<String> {
    workouts
        .iter()
        .flat_map(|w| w.exercises.iter().map(|e| e.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutExercise;

    fn workout(date: &str, name: &str, weights: &[&str]) -> Workout {
        let sets: Vec<WorkoutSet> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                serde_json::from_value(serde_json::json!({
                    "id": format!("s{}", i),
                    "reps": 5,
                    "weight": w,
                    "completed": true,
                }))
                .unwrap()
            })
            .collect();

        let mut exercise = WorkoutExercise::new(name);
        exercise.sets = sets;
        let mut workout = Workout::new(date);
        workout.exercises.push(exercise);
        workout
    }

    #[test]
    fn test_history_max_and_order() {
        let workouts = vec![
            workout("2025-01-08", "Squat", &["110"]),
            workout("2025-01-01", "Squat", &["100", "105", ""]),
            workout("2025-01-04", "Bench Press", &["80"]),
        ];

        let history = max_weight_history(&workouts, "Squat");
        let points: Vec<(&str, f64)> = history
            .iter()
            .map(|p| (p.date.as_str(), p.max_weight))
            .collect();

        assert_eq!(points, vec![("2025-01-01", 105.0), ("2025-01-08", 110.0)]);
        assert_eq!(history[0].sets.len(), 3);
    }

    #[test]
    fn test_history_name_is_exact() {
        let workouts = vec![workout("2025-01-01", "squat", &["100"])];
        assert!(max_weight_history(&workouts, "Squat").is_empty());
    }

    #[test]
    fn test_history_without_weights_is_zero() {
        let workouts = vec![
            workout("2025-01-01", "Plank", &[]),
            workout("2025-01-02", "Plank", &["", "abc"]),
        ];

        let history = max_weight_history(&workouts, "Plank");
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|p| p.max_weight == 0.0));
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let workouts = vec![
            workout("someday", "Squat", &["50"]),
            workout("2025-01-01", "Squat", &["60"]),
        ];

        let history = max_weight_history(&workouts, "Squat");
        assert_eq!(history[0].date, "2025-01-01");
        assert_eq!(history[1].date, "someday");
    }

    #[test]
    fn test_progress_names_from_workouts() {
        let workouts = vec![
            workout("2025-01-01", "Squat", &["100"]),
            workout("2025-01-02", "Deadlift", &["140"]),
            workout("2025-01-03", "Squat", &["105"]),
        ];

        assert_eq!(progress_exercise_names(&workouts), vec!["Deadlift", "Squat"]);
    }
}

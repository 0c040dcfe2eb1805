pub mod calendar;
pub mod dashboard;
pub mod exercises;
pub mod health;
pub mod profile;
pub mod programs;
pub mod stats;
pub mod workouts;

use chrono::NaiveDate;

use crate::error::{AppError, Result};

/// Run a store call on the blocking pool.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Workout;
use crate::repositories::collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    None,
    Planned,
    Completed,
}

impl DayStatus {
    fn of(workout: Option<&Workout>) -> Self {
        match workout {
            None => DayStatus::None,
            Some(w) if w.completed => DayStatus::Completed,
            Some(_) => DayStatus::Planned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarCell {
    /// Blank cell before the 1st so it lands under its weekday.
    Pad,
    Day {
        date: String,
        day: u32,
        status: DayStatus,
        is_today: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    /// Sunday-first week rows, flattened.
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day { .. }))
    }
}

/// Completion grid for one month. `None` for an invalid year/month.
pub fn month_grid(
    workouts: &[Workout],
    year: i32,
    month: u32,
    today: Option<NaiveDate>,
) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let padding = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![CalendarCell::Pad; padding];
    for date in first.iter_days().take_while(|d| d.month() == month) {
        let key = date.format("%Y-%m-%d").to_string();
        let status = DayStatus::of(collection::find_by_date(workouts, &key));
        cells.push(CalendarCell::Day {
            date: key,
            day: date.day(),
            status,
            is_today: today == Some(date),
        });
    }

    Some(MonthGrid {
        year,
        month,
        title: first.format("%B %Y").to_string(),
        cells,
    })
}

//! Display-ready aggregates computed from stored collections.
//!
//! Everything here is a pure function of its inputs; nothing reads the store.

pub mod calendar;
pub mod dashboard;
pub mod progress;
pub mod sets;

pub use calendar::{month_grid, CalendarCell, DayStatus, MonthGrid};
pub use dashboard::{today_summary, TodaySummary};
pub use progress::{max_weight_history, progress_exercise_names, MaxWeightPoint};
pub use sets::{parse_set_count, DEFAULT_SET_COUNT};

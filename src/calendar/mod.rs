mod builder;
mod errors;

use chrono::NaiveDate;
use serde::Serialize;

pub use builder::build_calendar;
pub use errors::CalendarError;

/// One all-day calendar entry per reservation. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarRecord {
    #[serde(rename = "title")]
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool
}

/// Everything the calendar view needs: the entries and the date to open on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    pub default_date: NaiveDate,
    pub events: Vec<CalendarRecord>
}

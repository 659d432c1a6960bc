use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;

use crate::domain::time_projection::TimeProjection;

/// Longest duration placed on the calendar, roughly 380 years of workdays.
pub const MAX_WORKING_DAYS: f64 = 100_000.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkdayError {
    #[error("{0} working days cannot be placed on the calendar")]
    DurationOutOfRange(f64),
    #[error("no workday follows {0}")]
    CalendarOverflow(NaiveDate),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompletionDates {
    pub start_date: NaiveDate,
    pub optimistic: NaiveDate,
    pub expected: NaiveDate,
    pub pessimistic: NaiveDate,
    pub buffered: NaiveDate,
}

impl CompletionDates {
    pub fn from_projection(
        start_date: NaiveDate,
        projection: &TimeProjection,
    ) -> Result<Self, WorkdayError> {
        Ok(Self {
            start_date,
            optimistic: completion_date(start_date, projection.optimistic_days)?,
            expected: completion_date(start_date, projection.expected_days)?,
            pessimistic: completion_date(start_date, projection.pessimistic_days)?,
            buffered: completion_date(start_date, projection.buffered_days)?,
        })
    }
}

/// Last workday of a piece of work that starts on `start_date` and takes
/// `working_days`. Partial days count as a whole day; zero or negative
/// durations finish on the first workday.
///
/// # Errors
/// [`WorkdayError::DurationOutOfRange`] for non-finite durations or ones above
/// [`MAX_WORKING_DAYS`], and [`WorkdayError::CalendarOverflow`] when the date
/// would run past the end of the calendar.
pub fn completion_date(start_date: NaiveDate, working_days: f64) -> Result<NaiveDate, WorkdayError> {
    if !working_days.is_finite() || working_days > MAX_WORKING_DAYS {
        return Err(WorkdayError::DurationOutOfRange(working_days));
    }
    let days = working_days.ceil().max(0.0) as u64;
    let mut date = next_workday(start_date)?;
    for _ in 1..days {
        date = next_workday(following_day(date)?)?;
    }
    Ok(date)
}

pub fn next_workday(mut date: NaiveDate) -> Result<NaiveDate, WorkdayError> {
    while is_weekend(date) {
        date = following_day(date)?;
    }
    Ok(date)
}

fn following_day(date: NaiveDate) -> Result<NaiveDate, WorkdayError> {
    date.checked_add_days(Days::new(1))
        .ok_or(WorkdayError::CalendarOverflow(date))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

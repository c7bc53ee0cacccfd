//! Monday-first weekday and the weekday computation.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::year::validate_day;

/// Day of the week, ordered Monday first as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in grid column order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Returns the three-letter abbreviation used in grid headers.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// Returns the 0-based grid column (Monday = 0, Sunday = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the proleptic Gregorian weekday of a date.
///
/// Uses [`chrono::NaiveDate`], which covers years far beyond the 1500..=9999
/// range of the calendar view, so any year it accepts is accepted here.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// for a non-existent date, and [`CalendarError::OutOfRangeYear`] if the year
/// is beyond what chrono can represent.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    validate_day(year, month, day)?;
    let date = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .ok_or(CalendarError::OutOfRangeYear { year })?;
    Ok(date.weekday().into())
}

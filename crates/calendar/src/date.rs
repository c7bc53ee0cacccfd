//! Validated calendar date within the supported year range.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::month::month_name;
use crate::weekday::Weekday;
use crate::year::{validate_day, validate_year};

/// A proleptic Gregorian date with a year in 1500..=9999.
///
/// Ordering is chronological: by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRangeYear`] if the year is outside
    /// 1500..=9999, [`CalendarError::InvalidMonth`] for a bad month, and
    /// [`CalendarError::InvalidDay`] if the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate_year(year)?;
        validate_day(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the equivalent chrono date.
    pub fn to_naive(self) -> NaiveDate {
        // Every CalendarDate is a real day in 1500..=9999, well inside chrono's range.
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
            .expect("CalendarDate always holds a representable date")
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.to_naive().weekday().into()
    }

    /// Formats the date for display, e.g. `"Thursday, July 4, 1776"`.
    pub fn long_format(self) -> String {
        let month = month_name(self.month).unwrap_or("?");
        format!("{}, {} {}, {}", self.weekday(), month, self.day, self.year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses a strict `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || CalendarError::InvalidDateFormat {
            input: s.to_string(),
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format_err());
        };
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(y, 4) || !all_digits(m, 2) || !all_digits(d, 2) {
            return Err(format_err());
        }
        let year: i32 = y.parse().map_err(|_| format_err())?;
        let month: u8 = m.parse().map_err(|_| format_err())?;
        let day: u8 = d.parse().map_err(|_| format_err())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // chrono guarantees month 1..=12 and day 1..=31.
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

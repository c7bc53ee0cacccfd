//! Year range, leap-year rule and month lengths.

use crate::error::CalendarError;

/// Earliest year the calendar accepts.
pub const MIN_YEAR: i32 = 1500;

/// Latest year the calendar accepts.
pub const MAX_YEAR: i32 = 9999;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` lies in the supported range 1500..=9999.
pub fn is_valid_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Checks that `year` lies in the supported range.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRangeYear`] otherwise. The year is never
/// clamped.
pub fn validate_year(year: i32) -> Result<i32, CalendarError> {
    if is_valid_year(year) {
        Ok(year)
    } else {
        Err(CalendarError::OutOfRangeYear { year })
    }
}

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// February has 29 days in leap years and 28 otherwise. Any year is
/// accepted; range checks are the job of [`validate_year`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Checks that `day` exists in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a bad month and
/// [`CalendarError::InvalidDay`] if `day` is outside `1..=days_in_month`.
pub fn validate_day(year: i32, month: u8, day: u8) -> Result<u8, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }
    Ok(day)
}

//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Covers the two user-facing validation failures of the calendar view
/// (a year outside the supported range, a day that does not exist in the
/// chosen month) plus malformed months and date strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range 1500..=9999.
    #[error("year {year} is out of range (must be 1500..=9999)")]
    OutOfRangeYear {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number does not exist in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (must be 1..={max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid.
        year: i32,
        /// The last valid day of that month.
        max_day: u8,
    },

    /// Returned when a date string is not in `YYYY-MM-DD` form.
    #[error("invalid date '{input}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },
}

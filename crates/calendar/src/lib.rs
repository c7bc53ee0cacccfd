//! # almanac-calendar
//!
//! Pure proleptic Gregorian date helpers for the perpetual calendar view.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     C["\"YYYY-MM-DD\""] -->|".parse()"| B
//!     B -->|".weekday()"| D["Weekday"]
//!     A -->|"weekday_of()"| D
//!     E["(year, month)"] -->|"days_in_month()"| F["28..=31"]
//!     E -->|"month_grid()"| G["MonthGrid"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{CalendarDate, Weekday, days_in_month, is_valid_year, month_grid, weekday_of};
//!
//! assert!(is_valid_year(1500));
//! assert_eq!(days_in_month(2000, 2).unwrap(), 29);
//! assert_eq!(weekday_of(1969, 7, 20).unwrap(), Weekday::Sunday);
//!
//! let grid = month_grid(2020, 2).unwrap();
//! assert_eq!(grid.day_count(), 29);
//!
//! let date: CalendarDate = "1776-07-04".parse().unwrap();
//! assert_eq!(date.long_format(), "Thursday, July 4, 1776");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Supported year range, leap years, month lengths |
//! | `month` | Month names |
//! | `weekday` | Monday-first weekday and weekday computation |
//! | `date` | Validated date type |
//! | `grid` | Month grid layout |
//! | `error` | Error types |

mod date;
mod error;
mod grid;
mod month;
mod weekday;
mod year;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use grid::{MonthGrid, Week, month_grid};
pub use month::{MONTH_NAMES, month_from_name, month_name};
pub use weekday::{Weekday, weekday_of};
pub use year::{
    MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year, is_valid_year, validate_day, validate_year,
};

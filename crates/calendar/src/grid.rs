//! Monday-first month grids.

use crate::error::CalendarError;
use crate::weekday::weekday_of;
use crate::year::{days_in_month, validate_year};

/// One calendar week: seven cells, Monday first. `None` marks a cell that
/// lies outside the month.
pub type Week = [Option<u8>; 7];

/// The weeks of one month, laid out the way a wall calendar shows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u8,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Returns the year of this grid.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12) of this grid.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the weeks, first to last.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Iterates over the day numbers in grid order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }

    /// Returns the number of non-empty cells, i.e. the length of the month.
    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    /// Returns the `(week, column)` cell holding `day`, if it is in the month.
    pub fn position(&self, day: u8) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(w, week)| {
            week.iter()
                .position(|cell| *cell == Some(day))
                .map(|col| (w, col))
        })
    }
}

/// Builds the Monday-first grid for `month` of `year`.
///
/// Leading cells before the 1st and trailing cells after the last day are
/// `None`. Every week has exactly seven cells; a month spans four to six
/// weeks.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRangeYear`] if `year` is outside
/// 1500..=9999 and [`CalendarError::InvalidMonth`] for a bad month.
pub fn month_grid(year: i32, month: u8) -> Result<MonthGrid, CalendarError> {
    validate_year(year)?;
    let n_days = days_in_month(year, month)?;
    let lead = weekday_of(year, month, 1)?.index();

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; 7];
    let mut col = lead;
    for day in 1..=n_days {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col != 0 {
        weeks.push(week);
    }

    Ok(MonthGrid { year, month, weeks })
}

use almanac_calendar::{CalendarError, days_in_month, month_grid};

#[test]
fn leap_and_common_february() {
    assert_eq!(month_grid(2020, 2).unwrap().day_count(), 29);
    assert_eq!(month_grid(2019, 2).unwrap().day_count(), 28);
}

#[test]
fn boundary_years() {
    let first = month_grid(1500, 1).unwrap();
    assert_eq!(first.year(), 1500);
    assert_eq!(first.month(), 1);
    assert_eq!(first.day_count(), 31);

    let last = month_grid(9999, 12).unwrap();
    assert_eq!(last.day_count(), 31);
}

#[test]
fn grid_shape_every_month_of_a_year() {
    for year in [1500, 1900, 2000, 2020, 9999] {
        for month in 1..=12u8 {
            let grid = month_grid(year, month).unwrap();
            assert!(
                (4..=6).contains(&grid.weeks().len()),
                "{year}-{month:02} has {} weeks",
                grid.weeks().len()
            );
            assert_eq!(
                grid.day_count(),
                usize::from(days_in_month(year, month).unwrap())
            );
            // First week holds the 1st, last week holds the last day.
            assert!(grid.weeks()[0].contains(&Some(1)));
            let last_day = days_in_month(year, month).unwrap();
            assert!(grid.weeks().last().unwrap().contains(&Some(last_day)));
        }
    }
}

#[test]
fn out_of_range_is_rejected_not_clamped() {
    assert_eq!(
        month_grid(10_000, 1).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 10_000 }
    );
    assert_eq!(
        month_grid(1499, 1).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 1499 }
    );
}

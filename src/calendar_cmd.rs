//! Calendar commands: `month`, `today` and `jump`.

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{debug, info, info_span};

use almanac_calendar::{CalendarDate, month_grid, validate_day, validate_year};
use almanac_catalog::{find_landmark, landmarks};

use crate::cli::{JumpArgs, MonthArgs};
use crate::config::{AlmanacConfig, DisplayToml};
use crate::render::{self, Marks};

/// Show one month, optionally highlighting a day.
pub fn run_month(args: MonthArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("month", year = args.year, month = args.month).entered();

    let year = validate_year(args.year).context("cannot show calendar")?;
    let selected = args
        .highlight
        .map(|day| validate_day(year, args.month, day))
        .transpose()
        .context("cannot highlight day")?;

    print!("{}", month_view(year, args.month, selected, &config.display)?);
    Ok(())
}

/// Show the current month with today selected.
pub fn run_today(config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let Some(today) = today() else {
        bail!("the system date is outside the supported calendar range");
    };
    info!(%today, "showing current month");
    println!("Today is {}\n", today.long_format());
    print!(
        "{}",
        month_view(today.year(), today.month(), Some(today.day()), &config.display)?
    );
    Ok(())
}

/// Jump to a famous date, or list the available ones.
pub fn run_jump(args: JumpArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("jump").entered();

    if args.list || args.name.is_empty() {
        for landmark in landmarks() {
            println!("{}  {}", landmark.date(), landmark.name());
        }
        return Ok(());
    }

    let name = args.name.join(" ");
    let Some(landmark) = find_landmark(&name) else {
        bail!("unknown landmark '{name}' (see `almanac jump --list`)");
    };
    let date = landmark.date();
    info!(landmark = landmark.name(), %date, "jumping");

    println!("{}: {}\n", landmark.name(), date.long_format());
    print!("{}", date_view(date, &config.display)?);
    Ok(())
}

/// Renders the month containing `date` with that day selected.
pub fn date_view(date: CalendarDate, display: &DisplayToml) -> Result<String> {
    month_view(date.year(), date.month(), Some(date.day()), display)
}

fn month_view(year: i32, month: u8, selected: Option<u8>, display: &DisplayToml) -> Result<String> {
    let grid = month_grid(year, month).context("cannot show calendar")?;
    let today = if display.mark_today {
        today()
            .filter(|d| d.year() == year && d.month() == month)
            .map(CalendarDate::day)
    } else {
        None
    };
    debug!(weeks = grid.weeks().len(), ?selected, ?today, "rendering month");
    render::month_view(&grid, Marks { selected, today }, display.legend)
}

/// Current local date, if it lies in the supported range.
fn today() -> Option<CalendarDate> {
    CalendarDate::try_from(Local::now().date_naive()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> DisplayToml {
        DisplayToml {
            legend: false,
            mark_today: false,
        }
    }

    #[test]
    fn date_view_selects_day() {
        let date = CalendarDate::new(1969, 7, 20).unwrap();
        let view = date_view(date, &plain()).unwrap();
        assert!(view.contains("July 1969"));
        assert!(view.contains("[20]"));
        assert!(!view.contains('('));
    }

    #[test]
    fn boundary_months_render() {
        assert!(month_view(1500, 1, None, &plain()).unwrap().contains("January 1500"));
        assert!(month_view(9999, 12, Some(31), &plain()).unwrap().contains("[31]"));
    }

    #[test]
    fn out_of_range_year_is_an_error() {
        let err = month_view(1499, 12, None, &plain()).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn today_is_in_range() {
        let today = today().expect("system clock within 1500..=9999");
        assert!(today.year() >= 2000);
    }
}

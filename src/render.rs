//! Plain-text rendering of month grids and events.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use almanac_calendar::{MonthGrid, Weekday, month_name};
use almanac_catalog::Event;

/// Width of one day column.
const CELL_WIDTH: usize = 5;
/// Left margin of every grid line.
const MARGIN: &str = "  ";

/// Days that get a marker in a rendered month.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marks {
    /// Rendered as `[N]`.
    pub selected: Option<u8>,
    /// Rendered as `(N)` unless it is also the selected day.
    pub today: Option<u8>,
}

/// Renders a month as a Monday-first text grid.
///
/// ```text
///             July 1969
///   Mon  Tue  Wed  Thu  Fri  Sat  Sun
///   ---------------------------------
///          1    2    3    4    5    6
/// ```
pub fn month_view(grid: &MonthGrid, marks: Marks, legend: bool) -> Result<String> {
    let name = month_name(grid.month()).context("grid has an invalid month")?;
    let width = MARGIN.len() + CELL_WIDTH * 7;
    let mut out = String::new();

    let title = format!("{name} {}", grid.year());
    push_line(&mut out, &format!("{title:^width$}"));

    let mut header = MARGIN.to_string();
    for weekday in Weekday::ALL {
        let _ = write!(header, " {:<4}", weekday.short_name());
    }
    push_line(&mut out, &header);
    push_line(&mut out, &format!("{MARGIN}{}", "-".repeat(CELL_WIDTH * 7 - 2)));

    for week in grid.weeks() {
        let mut line = MARGIN.to_string();
        for cell in week {
            line.push_str(&day_cell(*cell, marks));
        }
        push_line(&mut out, &line);
    }

    if legend {
        out.push('\n');
        push_line(&mut out, &format!("{MARGIN}[N] selected   (N) today"));
    }
    Ok(out)
}

fn day_cell(cell: Option<u8>, marks: Marks) -> String {
    match cell {
        None => " ".repeat(CELL_WIDTH),
        Some(day) if marks.selected == Some(day) => format!("[{day:>2}] "),
        Some(day) if marks.today == Some(day) => format!("({day:>2}) "),
        Some(day) => format!(" {day:>2}  "),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One-line summary: `1969-07-20  Moon Landing`.
pub fn event_line(event: &Event) -> String {
    format!("{}  {}", event.date(), event.title())
}

/// Renders events one per line, or a placeholder when there are none.
pub fn event_list(events: &[&Event], empty_message: &str) -> String {
    if events.is_empty() {
        return format!("{empty_message}\n");
    }
    events.iter().map(|e| event_line(e) + "\n").collect()
}

/// Full event details: title, long date, description.
pub fn event_details(event: &Event) -> String {
    format!(
        "{}\n{}\n\n{}\n",
        event.title(),
        event.date().long_format(),
        event.description()
    )
}

/// Pretty-printed JSON array of events.
pub fn events_json(events: &[&Event]) -> Result<String> {
    serde_json::to_string_pretty(events).context("failed to serialize events")
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::{CalendarDate, month_grid};

    fn july_1969() -> MonthGrid {
        month_grid(1969, 7).unwrap()
    }

    #[test]
    fn header_and_first_week() {
        let view = month_view(&july_1969(), Marks::default(), false).unwrap();
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines[0].trim(), "July 1969");
        assert_eq!(lines[1], "   Mon  Tue  Wed  Thu  Fri  Sat  Sun");
        assert_eq!(lines[3], "         1    2    3    4    5    6");
        // 5 weeks + title + header + rule
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn selected_and_today_markers() {
        let marks = Marks {
            selected: Some(20),
            today: Some(4),
        };
        let view = month_view(&july_1969(), marks, false).unwrap();
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines[3], "         1    2    3  ( 4)   5    6");
        assert_eq!(lines[5], "   14   15   16   17   18   19  [20]");
    }

    #[test]
    fn selected_wins_over_today() {
        let marks = Marks {
            selected: Some(20),
            today: Some(20),
        };
        let view = month_view(&july_1969(), marks, false).unwrap();
        assert!(view.contains("[20]"));
        assert!(!view.contains("(20)"));
    }

    #[test]
    fn legend_is_optional() {
        let with = month_view(&july_1969(), Marks::default(), true).unwrap();
        let without = month_view(&july_1969(), Marks::default(), false).unwrap();
        assert!(with.ends_with("[N] selected   (N) today\n"));
        assert!(!without.contains("selected"));
    }

    #[test]
    fn event_formats() {
        let date = CalendarDate::new(1969, 7, 20).unwrap();
        let event = Event::new(date, "Moon Landing", "Apollo 11 lands on the Moon");
        assert_eq!(event_line(&event), "1969-07-20  Moon Landing");
        assert_eq!(
            event_details(&event),
            "Moon Landing\nSunday, July 20, 1969\n\nApollo 11 lands on the Moon\n"
        );
        assert_eq!(event_list(&[], "No events found"), "No events found\n");
        assert_eq!(event_list(&[&event], "-"), "1969-07-20  Moon Landing\n");
    }

    #[test]
    fn json_output() {
        let date = CalendarDate::new(1969, 7, 20).unwrap();
        let event = Event::new(date, "Moon Landing", "Apollo 11");
        let json = events_json(&[&event]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["date"], "1969-07-20");
        assert_eq!(value[0]["title"], "Moon Landing");
    }
}

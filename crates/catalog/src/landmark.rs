//! Quick-jump list of famous dates.

use std::sync::LazyLock;

use almanac_calendar::CalendarDate;

/// A famous date the calendar view offers as a one-step jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    name: &'static str,
    date: CalendarDate,
}

impl Landmark {
    /// Returns the display name, e.g. `"Moon Landing"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the date to jump to.
    pub fn date(&self) -> CalendarDate {
        self.date
    }
}

#[rustfmt::skip]
const RAW_LANDMARKS: [(&str, i32, u8, u8); 6] = [
    ("Moon Landing", 1969, 7, 20),
    ("First Computer", 1946, 2, 14),
    ("US Independence", 1776, 7, 4),
    ("India Independence", 1947, 8, 15),
    ("WWW Launch", 1991, 8, 6),
    ("iPhone Launch", 2007, 6, 29),
];

static LANDMARKS: LazyLock<Vec<Landmark>> = LazyLock::new(|| {
    RAW_LANDMARKS
        .iter()
        .map(|&(name, year, month, day)| {
            let date = CalendarDate::new(year, month, day)
                .unwrap_or_else(|err| panic!("landmark '{name}' has an invalid date: {err}"));
            Landmark { name, date }
        })
        .collect()
});

/// Returns the quick-jump landmarks in display order.
pub fn landmarks() -> &'static [Landmark] {
    &LANDMARKS
}

/// Looks up a landmark by name, ignoring case and surrounding whitespace.
pub fn find_landmark(name: &str) -> Option<&'static Landmark> {
    let wanted = name.trim();
    landmarks()
        .iter()
        .find(|landmark| landmark.name.eq_ignore_ascii_case(wanted))
}

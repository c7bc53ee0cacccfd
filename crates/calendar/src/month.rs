//! Month names.

use crate::error::CalendarError;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of `month` (1..=12).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_NAMES[month as usize - 1])
}

/// Looks up a month number by name.
///
/// Matching is case-insensitive and accepts either the full name or its
/// three-letter abbreviation (`"jul"`, `"July"`). Returns `None` for
/// anything else.
pub fn month_from_name(name: &str) -> Option<u8> {
    let needle = name.trim().to_lowercase();
    if needle.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|full| {
            let full = full.to_lowercase();
            full == needle || (needle.len() == 3 && full.starts_with(&needle))
        })
        .map(|idx| idx as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_months() {
        assert_eq!(MONTH_NAMES.len(), 12);
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(12).unwrap(), "December");
    }

    #[test]
    fn name_roundtrip() {
        for m in 1..=12u8 {
            let name = month_name(m).unwrap();
            assert_eq!(month_from_name(name), Some(m), "{name}");
        }
    }

    #[test]
    fn abbreviations_and_case() {
        assert_eq!(month_from_name("jul"), Some(7));
        assert_eq!(month_from_name("SEP"), Some(9));
        assert_eq!(month_from_name(" february "), Some(2));
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(month_from_name(""), None);
        assert_eq!(month_from_name("ju"), None);
        assert_eq!(month_from_name("Janu"), None);
        assert_eq!(month_from_name("Smarch"), None);
    }

    #[test]
    fn month_name_out_of_range() {
        assert_eq!(
            month_name(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }
}

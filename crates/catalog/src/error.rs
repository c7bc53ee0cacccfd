//! Error types for the almanac-catalog crate.

use almanac_calendar::CalendarError;

/// Error type for catalog construction.
///
/// Queries never fail; an unknown era or category simply yields an empty
/// result. Every variant here describes a data-entry problem found while
/// building a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Returned when an event's date string is malformed or out of range.
    #[error("event '{title}' in {era} / {category} has an invalid date: {source}")]
    InvalidEventDate {
        /// Era holding the event.
        era: String,
        /// Category holding the event.
        category: String,
        /// Title of the offending event.
        title: String,
        /// The underlying calendar validation failure.
        source: CalendarError,
    },

    /// Returned when two eras share a name.
    #[error("duplicate era '{era}'")]
    DuplicateEra {
        /// The repeated era name.
        era: String,
    },

    /// Returned when two categories in the same era share a name.
    #[error("duplicate category '{category}' in era '{era}'")]
    DuplicateCategory {
        /// Era holding both categories.
        era: String,
        /// The repeated category name.
        category: String,
    },

    /// Returned when the same event (date and title) is entered twice.
    #[error("event '{title}' on {date} appears in both {first} and {second}")]
    DuplicateEvent {
        /// Title of the repeated event.
        title: String,
        /// Date of the repeated event, `YYYY-MM-DD`.
        date: String,
        /// `era / category` of the first occurrence.
        first: String,
        /// `era / category` of the second occurrence.
        second: String,
    },

    /// Returned when a category is added before any era.
    #[error("category '{category}' added before any era")]
    CategoryWithoutEra {
        /// Name of the orphaned category.
        category: String,
    },

    /// Returned when an event is added before any category of the current era.
    #[error("event '{title}' added before any category")]
    EventWithoutCategory {
        /// Title of the orphaned event.
        title: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_event_date_message() {
        let err = CatalogError::InvalidEventDate {
            era: "Past Events".to_string(),
            category: "Space Exploration".to_string(),
            title: "Moon Landing".to_string(),
            source: CalendarError::InvalidDateFormat {
                input: "1969-7-20".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "event 'Moon Landing' in Past Events / Space Exploration has an invalid date: \
             invalid date '1969-7-20' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn invalid_event_date_has_source() {
        use std::error::Error;

        let err = CatalogError::InvalidEventDate {
            era: "e".to_string(),
            category: "c".to_string(),
            title: "t".to_string(),
            source: CalendarError::OutOfRangeYear { year: 1400 },
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn duplicate_event_message() {
        let err = CatalogError::DuplicateEvent {
            title: "Moon Landing".to_string(),
            date: "1969-07-20".to_string(),
            first: "Past Events / Space Exploration".to_string(),
            second: "Past Events / Science & Medicine".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "event 'Moon Landing' on 1969-07-20 appears in both \
             Past Events / Space Exploration and Past Events / Science & Medicine"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CatalogError>();
    }
}

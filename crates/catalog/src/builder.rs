//! Construction and integrity checks for catalogs.

use std::collections::{HashMap, HashSet};

use almanac_calendar::CalendarDate;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::event::{Category, Era, Event};

#[derive(Debug)]
struct PendingEvent {
    date: String,
    title: String,
    description: String,
}

#[derive(Debug)]
struct PendingCategory {
    name: String,
    events: Vec<PendingEvent>,
}

#[derive(Debug)]
struct PendingEra {
    name: String,
    span: String,
    categories: Vec<PendingCategory>,
}

/// Builds a [`Catalog`] from authored data.
///
/// Eras, categories and events are appended in order: each `category` call
/// goes into the most recent era, each `event` call into the most recent
/// category. Dates are given as `YYYY-MM-DD` text, the form the dataset is
/// written in, and are only checked by [`build`](Self::build).
///
/// # Example
///
/// ```
/// use almanac_catalog::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new()
///     .era("Past Events", "1500-2010")
///     .category("Space Exploration")
///     .event("1969-07-20", "Moon Landing", "Neil Armstrong and Buzz Aldrin walk on the Moon")
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.total_event_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    eras: Vec<PendingEra>,
    error: Option<CatalogError>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new era.
    pub fn era(mut self, name: impl Into<String>, span: impl Into<String>) -> Self {
        self.eras.push(PendingEra {
            name: name.into(),
            span: span.into(),
            categories: Vec::new(),
        });
        self
    }

    /// Starts a new category in the current era.
    pub fn category(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match self.eras.last_mut() {
            Some(era) => era.categories.push(PendingCategory {
                name,
                events: Vec::new(),
            }),
            None => self.record(CatalogError::CategoryWithoutEra { category: name }),
        }
        self
    }

    /// Appends an event to the current category.
    pub fn event(
        mut self,
        date: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let event = PendingEvent {
            date: date.into(),
            title: title.into(),
            description: description.into(),
        };
        match self.eras.last_mut().and_then(|era| era.categories.last_mut()) {
            Some(category) => category.events.push(event),
            None => self.record(CatalogError::EventWithoutCategory { title: event.title }),
        }
        self
    }

    /// Validates everything and produces the immutable catalog.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an ordering mistake while building,
    /// a duplicate era or category name, an invalid event date, or the same
    /// event (date and title) entered twice.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut era_names = HashSet::new();
        let mut seen_events: HashMap<(CalendarDate, String), String> = HashMap::new();
        let mut eras = Vec::with_capacity(self.eras.len());

        for pending_era in self.eras {
            if !era_names.insert(pending_era.name.clone()) {
                return Err(CatalogError::DuplicateEra {
                    era: pending_era.name,
                });
            }

            let mut category_names = HashSet::new();
            let mut categories = Vec::with_capacity(pending_era.categories.len());
            for pending_category in pending_era.categories {
                if !category_names.insert(pending_category.name.clone()) {
                    return Err(CatalogError::DuplicateCategory {
                        era: pending_era.name,
                        category: pending_category.name,
                    });
                }

                let location = format!("{} / {}", pending_era.name, pending_category.name);
                let mut events = Vec::with_capacity(pending_category.events.len());
                for pending in pending_category.events {
                    let date: CalendarDate = pending.date.parse().map_err(|source| {
                        CatalogError::InvalidEventDate {
                            era: pending_era.name.clone(),
                            category: pending_category.name.clone(),
                            title: pending.title.clone(),
                            source,
                        }
                    })?;

                    let key = (date, pending.title.clone());
                    if let Some(first) = seen_events.get(&key) {
                        return Err(CatalogError::DuplicateEvent {
                            title: pending.title,
                            date: date.to_string(),
                            first: first.clone(),
                            second: location,
                        });
                    }
                    seen_events.insert(key, location.clone());

                    events.push(Event::new(date, pending.title, pending.description));
                }

                categories.push(Category {
                    name: pending_category.name,
                    events,
                });
            }

            eras.push(Era {
                name: pending_era.name,
                span: pending_era.span,
                categories,
            });
        }

        let catalog = Catalog::from_eras(eras);
        debug!(
            n_eras = catalog.eras().len(),
            n_events = catalog.total_event_count(),
            "catalog built"
        );
        Ok(catalog)
    }

    fn record(&mut self, err: CatalogError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::CalendarError;

    #[test]
    fn empty_builder_builds_empty_catalog() {
        let catalog = CatalogBuilder::new().build().unwrap();
        assert!(catalog.eras().is_empty());
        assert_eq!(catalog.total_event_count(), 0);
    }

    #[test]
    fn keeps_authored_order() {
        let catalog = CatalogBuilder::new()
            .era("Future", "from 2020")
            .category("Zeta")
            .event("2030-01-01", "Late", "second")
            .event("2025-01-01", "Early", "first")
            .category("Alpha")
            .era("Past", "1500-2010")
            .build()
            .unwrap();
        assert_eq!(catalog.eras(), vec!["Future", "Past"]);
        assert_eq!(catalog.categories("Future"), vec!["Zeta", "Alpha"]);
        let titles: Vec<_> = catalog
            .events_in_category("Future", "Zeta")
            .iter()
            .map(|e| e.title())
            .collect();
        assert_eq!(titles, vec!["Late", "Early"]);
    }

    #[test]
    fn rejects_malformed_date() {
        let err = CatalogBuilder::new()
            .era("Past", "")
            .category("Space")
            .event("1969-7-20", "Moon Landing", "")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidEventDate {
                era: "Past".to_string(),
                category: "Space".to_string(),
                title: "Moon Landing".to_string(),
                source: CalendarError::InvalidDateFormat {
                    input: "1969-7-20".to_string()
                },
            }
        );
    }

    #[test]
    fn rejects_out_of_range_year() {
        let err = CatalogBuilder::new()
            .era("Past", "")
            .category("Ancient")
            .event("1066-10-14", "Battle of Hastings", "")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidEventDate {
                source: CalendarError::OutOfRangeYear { year: 1066 },
                ..
            }
        ));
    }

    #[test]
    fn rejects_impossible_day() {
        let err = CatalogBuilder::new()
            .era("Past", "")
            .category("Misc")
            .event("1900-02-29", "Not a day", "")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidEventDate {
                source: CalendarError::InvalidDay { .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_era() {
        let err = CatalogBuilder::new()
            .era("Past", "")
            .era("Past", "")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateEra {
                era: "Past".to_string()
            }
        );
    }

    #[test]
    fn rejects_duplicate_category_within_era() {
        let err = CatalogBuilder::new()
            .era("Past", "")
            .category("Space")
            .category("Space")
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory { .. }));
    }

    #[test]
    fn same_category_name_in_different_eras_is_fine() {
        let catalog = CatalogBuilder::new()
            .era("Past", "")
            .category("Space")
            .era("Future", "")
            .category("Space")
            .build()
            .unwrap();
        assert_eq!(catalog.categories("Future"), vec!["Space"]);
    }

    #[test]
    fn rejects_event_in_two_categories() {
        let err = CatalogBuilder::new()
            .era("Past", "")
            .category("Space")
            .event("1969-07-20", "Moon Landing", "a")
            .category("Science")
            .event("1969-07-20", "Moon Landing", "b")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateEvent {
                title: "Moon Landing".to_string(),
                date: "1969-07-20".to_string(),
                first: "Past / Space".to_string(),
                second: "Past / Science".to_string(),
            }
        );
    }

    #[test]
    fn rejects_orphans() {
        let err = CatalogBuilder::new().category("Space").build().unwrap_err();
        assert!(matches!(err, CatalogError::CategoryWithoutEra { .. }));

        let err = CatalogBuilder::new()
            .era("Past", "")
            .event("1969-07-20", "Moon Landing", "")
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::EventWithoutCategory { .. }));
    }
}

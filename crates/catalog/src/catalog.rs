//! The immutable era → category → event catalog and its queries.

use crate::event::{Era, Event};

/// The full era → category → event dataset.
///
/// A catalog is built once by [`CatalogBuilder`](crate::CatalogBuilder) and
/// never mutated afterwards, so it can be shared freely between readers.
///
/// Lookups are forgiving: an unknown era or category is not an error, it
/// simply has nothing in it, and every query returns an empty vector for it.
/// Queries that cross category boundaries return events sorted ascending by
/// date. The sort is stable, so events on the same date keep their
/// concatenation order (era order, then category order, then authored order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    eras: Vec<Era>,
}

impl Catalog {
    pub(crate) fn from_eras(eras: Vec<Era>) -> Self {
        Self { eras }
    }

    /// Returns the era names in authored order.
    pub fn eras(&self) -> Vec<&str> {
        self.eras.iter().map(Era::name).collect()
    }

    /// Looks up an era by exact name.
    pub fn era(&self, name: &str) -> Option<&Era> {
        self.eras.iter().find(|era| era.name() == name)
    }

    /// Returns all eras with their metadata, in authored order.
    pub fn era_entries(&self) -> &[Era] {
        &self.eras
    }

    /// Returns the category names of `era` in authored order.
    ///
    /// Unknown eras yield an empty vector.
    pub fn categories(&self, era: &str) -> Vec<&str> {
        self.era(era)
            .map(|e| e.categories().iter().map(|c| c.name()).collect())
            .unwrap_or_default()
    }

    /// Returns the events of one category in authored order.
    ///
    /// Unknown eras or categories yield an empty vector.
    pub fn events_in_category(&self, era: &str, category: &str) -> Vec<&Event> {
        self.era(era)
            .and_then(|e| e.category(category))
            .map(|c| c.events().iter().collect())
            .unwrap_or_default()
    }

    /// Returns every event of `era`, sorted by date.
    ///
    /// Unknown eras yield an empty vector.
    pub fn events_in_era(&self, era: &str) -> Vec<&Event> {
        let events = self
            .era(era)
            .map(|e| e.events().collect())
            .unwrap_or_default();
        sorted_by_date(events)
    }

    /// Returns every event in the catalog, sorted by date.
    pub fn all_events(&self) -> Vec<&Event> {
        sorted_by_date(self.iter_events().collect())
    }

    /// Case-insensitive keyword search over titles and descriptions.
    ///
    /// The keyword is trimmed first. An empty or whitespace-only keyword
    /// matches nothing. Dates are not searched. Results are sorted by date.
    #[tracing::instrument(skip(self), fields(n_matches = tracing::field::Empty))]
    pub fn search(&self, keyword: &str) -> Vec<&Event> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let matches = sorted_by_date(
            self.iter_events()
                .filter(|e| e.matches_lowercase(&needle))
                .collect(),
        );
        tracing::Span::current().record("n_matches", matches.len());
        matches
    }

    /// Finds events whose title equals `title`, ignoring case and surrounding
    /// whitespace. Results are sorted by date.
    pub fn find_by_title(&self, title: &str) -> Vec<&Event> {
        let wanted = title.trim().to_lowercase();
        if wanted.is_empty() {
            return Vec::new();
        }
        sorted_by_date(
            self.iter_events()
                .filter(|e| e.title().to_lowercase() == wanted)
                .collect(),
        )
    }

    /// Returns the number of events across all eras and categories.
    pub fn total_event_count(&self) -> usize {
        self.eras.iter().map(Era::event_count).sum()
    }

    fn iter_events(&self) -> impl Iterator<Item = &Event> {
        self.eras.iter().flat_map(|era| era.events())
    }
}

fn sorted_by_date(mut events: Vec<&Event>) -> Vec<&Event> {
    // `sort_by_key` is stable, which gives the documented tie-break.
    events.sort_by_key(|e| e.date());
    events
}

#[cfg(test)]
mod tests {
    use crate::{Catalog, CatalogBuilder};

    fn sample() -> Catalog {
        CatalogBuilder::new()
            .era("Past", "1500-2010")
            .category("Space")
            .event("1969-07-20", "Moon Landing", "Armstrong walks on the Moon")
            .event("1957-10-04", "Sputnik", "First artificial satellite")
            .category("Politics")
            .event("1969-07-20", "Same Day", "Another event that day")
            .event("1776-07-04", "Independence", "Declaration signed")
            .era("Future", "from 2020")
            .category("Space")
            .event("2035-01-01", "Moon Base", "Permanent lunar presence")
            .build()
            .unwrap()
    }

    fn titles<'a>(events: &[&'a crate::Event]) -> Vec<&'a str> {
        events.iter().map(|e| e.title()).collect()
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let catalog = sample();
        assert!(catalog.categories("Nope").is_empty());
        assert!(catalog.events_in_category("Nope", "Space").is_empty());
        assert!(catalog.events_in_category("Past", "Nope").is_empty());
        assert!(catalog.events_in_era("Nope").is_empty());
        assert!(catalog.era("Nope").is_none());
    }

    #[test]
    fn category_listing_keeps_authored_order() {
        let catalog = sample();
        assert_eq!(
            titles(&catalog.events_in_category("Past", "Space")),
            vec!["Moon Landing", "Sputnik"]
        );
    }

    #[test]
    fn era_listing_is_sorted_with_stable_ties() {
        let catalog = sample();
        assert_eq!(
            titles(&catalog.events_in_era("Past")),
            vec!["Independence", "Sputnik", "Moon Landing", "Same Day"]
        );
    }

    #[test]
    fn all_events_sorted() {
        let catalog = sample();
        assert_eq!(
            titles(&catalog.all_events()),
            vec![
                "Independence",
                "Sputnik",
                "Moon Landing",
                "Same Day",
                "Moon Base"
            ]
        );
        assert_eq!(catalog.total_event_count(), 5);
    }

    #[test]
    fn search_is_case_insensitive_and_sorted() {
        let catalog = sample();
        let lower = catalog.search("moon");
        assert_eq!(titles(&lower), vec!["Moon Landing", "Moon Base"]);
        assert_eq!(catalog.search("MOON"), lower);
        assert_eq!(catalog.search("  Moon  "), lower);
    }

    #[test]
    fn search_matches_description() {
        let catalog = sample();
        assert_eq!(titles(&catalog.search("satellite")), vec!["Sputnik"]);
    }

    #[test]
    fn search_ignores_dates() {
        let catalog = sample();
        assert!(catalog.search("1969").is_empty());
    }

    #[test]
    fn empty_keyword_matches_nothing() {
        let catalog = sample();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   \t").is_empty());
    }

    #[test]
    fn find_by_title_exact_ignoring_case() {
        let catalog = sample();
        assert_eq!(titles(&catalog.find_by_title("moon landing")), vec!["Moon Landing"]);
        assert!(catalog.find_by_title("Moon").is_empty());
        assert!(catalog.find_by_title("").is_empty());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.eras().is_empty());
        assert!(catalog.all_events().is_empty());
        assert!(catalog.search("moon").is_empty());
        assert_eq!(catalog.total_event_count(), 0);
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Catalog>();
    }
}

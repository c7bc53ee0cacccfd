//! Events and the era/category buckets that hold them.

use almanac_calendar::CalendarDate;
use serde::{Serialize, Serializer};

/// A single dated historical fact or prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(serialize_with = "serialize_date")]
    date: CalendarDate,
    title: String,
    description: String,
}

fn serialize_date<S: Serializer>(date: &CalendarDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

impl Event {
    /// Creates an event from an already-validated date.
    pub fn new(date: CalendarDate, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the event date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the short title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the longer description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// A named, ordered bucket of events. Order is as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub(crate) name: String,
    pub(crate) events: Vec<Event>,
}

impl Category {
    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the events in authored order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

/// A named, ordered bucket of categories covering a broad time period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Era {
    pub(crate) name: String,
    pub(crate) span: String,
    pub(crate) categories: Vec<Category>,
}

impl Era {
    /// Returns the era name, e.g. `"Past Events"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable period label, e.g. `"1500-2010"`.
    pub fn span(&self) -> &str {
        &self.span
    }

    /// Returns the categories in authored order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by exact name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterates over every event of the era in category order, then authored order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.categories.iter().flat_map(|c| c.events.iter())
    }

    /// Returns the number of events across all categories.
    pub fn event_count(&self) -> usize {
        self.categories.iter().map(|c| c.events.len()).sum()
    }
}

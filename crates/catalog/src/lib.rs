//! # almanac-catalog
//!
//! A static, hand-curated catalog of historical facts and predictions,
//! grouped by era and category, with pure read-only queries.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["authored data"] -->|"CatalogBuilder::build()"| B["Catalog"]
//!     B -->|"eras() / categories()"| C["names"]
//!     B -->|"events_in_category()"| D["authored order"]
//!     B -->|"events_in_era() / all_events() / search()"| E["sorted by date"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let categories = catalog.categories("Past Events");
//! assert!(categories.contains(&"Space Exploration"));
//!
//! let moon = catalog.events_in_category("Past Events", "Space Exploration");
//! assert!(moon.iter().any(|e| e.title() == "Moon Landing"));
//!
//! // Search is case-insensitive; an empty keyword matches nothing.
//! assert_eq!(catalog.search("MOON"), catalog.search("moon"));
//! assert!(catalog.search("").is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | `Event`, `Category` and `Era` |
//! | `builder` | Validated catalog construction |
//! | `catalog` | The catalog and its queries |
//! | `data` | The shipped dataset |
//! | `landmark` | Quick-jump famous dates |
//! | `error` | Error types |

mod builder;
mod catalog;
mod data;
mod error;
mod event;
mod landmark;

pub use builder::CatalogBuilder;
pub use catalog::Catalog;
pub use error::CatalogError;
pub use event::{Category, Era, Event};
pub use landmark::{Landmark, find_landmark, landmarks};

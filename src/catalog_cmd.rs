//! Event catalog commands: `eras`, `categories`, `events`, `search` and `show`.

use anyhow::{Result, bail};
use tracing::{info, info_span, warn};

use almanac_catalog::{Catalog, Event};

use crate::calendar_cmd;
use crate::cli::{CategoriesArgs, EventsArgs, SearchArgs, ShowArgs};
use crate::config::AlmanacConfig;
use crate::render;

const NOTHING_TO_SHOW: &str = "Nothing to show";
const NO_EVENTS: &str = "No events found";
const SEARCH_HINT: &str = "please enter a search term (try: moon, computer, war, AI, quantum, space)";

/// List eras with their spans and event counts.
pub fn run_eras() -> Result<()> {
    let _cmd = info_span!("eras").entered();
    print!("{}", eras_report(Catalog::builtin()));
    Ok(())
}

/// List the categories of one era.
pub fn run_categories(args: CategoriesArgs) -> Result<()> {
    let _cmd = info_span!("categories", era = %args.era).entered();
    let categories = Catalog::builtin().categories(&args.era);
    if categories.is_empty() {
        warn!(era = %args.era, "unknown era");
        println!("{NOTHING_TO_SHOW}");
    }
    for name in categories {
        println!("{name}");
    }
    Ok(())
}

/// List events of a category, an era, or the whole catalog.
pub fn run_events(args: EventsArgs) -> Result<()> {
    let _cmd = info_span!("events").entered();
    let catalog = Catalog::builtin();
    let events = match (&args.era, &args.category) {
        (Some(era), Some(category)) => catalog.events_in_category(era, category),
        (Some(era), None) => catalog.events_in_era(era),
        _ => catalog.all_events(),
    };
    info!(n_events = events.len(), "events listed");
    emit(&events, args.json, NOTHING_TO_SHOW)
}

/// Search titles and descriptions.
pub fn run_search(args: SearchArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("search", keyword = %args.keyword).entered();
    if args.keyword.trim().is_empty() {
        bail!(SEARCH_HINT);
    }

    let mut matches = Catalog::builtin().search(&args.keyword);
    let total = matches.len();
    matches.truncate(config.search.cap(total));
    emit(&matches, args.json, NO_EVENTS)?;
    if !args.json && matches.len() < total {
        println!("... {} more (raise [search].limit to see all)", total - matches.len());
    }
    Ok(())
}

/// Show an event's details and the calendar month it falls in.
pub fn run_show(args: ShowArgs, config: &AlmanacConfig) -> Result<()> {
    let title = args.title.join(" ");
    let _cmd = info_span!("show", %title).entered();

    let found = Catalog::builtin().find_by_title(&title);
    if found.is_empty() {
        bail!("no event titled '{title}' (try `almanac search`)");
    }
    for (i, event) in found.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render::event_details(event));
        println!();
        print!("{}", calendar_cmd::date_view(event.date(), &config.display)?);
    }
    Ok(())
}

fn emit(events: &[&Event], json: bool, empty_message: &str) -> Result<()> {
    if json {
        println!("{}", render::events_json(events)?);
    } else {
        print!("{}", render::event_list(events, empty_message));
    }
    Ok(())
}

fn eras_report(catalog: &Catalog) -> String {
    let mut out = String::new();
    for era in catalog.era_entries() {
        out.push_str(&format!(
            "{} ({}): {} events in {} categories\n",
            era.name(),
            era.span(),
            era.event_count(),
            era.categories().len()
        ));
    }
    out.push_str(&format!("Total: {} events\n", catalog.total_event_count()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_eras_report() {
        let report = eras_report(Catalog::builtin());
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Past Events (1500-2010): 82 events in 7 categories");
        assert_eq!(lines[1], "Present Era (2010-2020): 33 events in 3 categories");
        assert_eq!(lines[2], "Future Predictions (from 2020): 43 events in 5 categories");
        assert_eq!(lines[3], "Total: 158 events");
    }

    #[test]
    fn empty_catalog_report() {
        assert_eq!(eras_report(&Catalog::default()), "Total: 0 events\n");
    }

    #[test]
    fn blank_search_is_rejected() {
        let args = SearchArgs {
            keyword: "   ".to_string(),
            json: false,
        };
        let err = run_search(args, &AlmanacConfig::default()).unwrap_err();
        assert!(err.to_string().contains("please enter a search term"));
    }

    #[test]
    fn unknown_title_is_an_error() {
        let args = ShowArgs {
            title: vec!["Atlantis".to_string()],
        };
        let err = run_show(args, &AlmanacConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no event titled 'Atlantis'"));
    }
}

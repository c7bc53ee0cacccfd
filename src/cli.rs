use std::path::PathBuf;

use clap::{Parser, Subcommand};

use almanac_calendar::month_from_name;

/// Almanac perpetual calendar and event browser.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Perpetual calendar (1500-9999) with a browsable catalog of historical events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Defaults to `almanac.toml` when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the calendar for a month, optionally highlighting a day.
    Month(MonthArgs),
    /// Show the current month with today highlighted.
    Today,
    /// List the eras of the event catalog.
    Eras,
    /// List the categories of an era.
    Categories(CategoriesArgs),
    /// List events of a category, an era, or the whole catalog.
    Events(EventsArgs),
    /// Search event titles and descriptions.
    Search(SearchArgs),
    /// Show an event's details and jump the calendar to its date.
    Show(ShowArgs),
    /// Jump to a famous date.
    Jump(JumpArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year (1500-9999).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: i32,

    /// Month as a number (1-12) or a name (`July`, `jul`).
    #[arg(short, long, value_parser = parse_month)]
    pub month: u8,

    /// Day of the month to highlight.
    #[arg(long)]
    pub highlight: Option<u8>,
}

/// Arguments for the `categories` subcommand.
#[derive(clap::Args)]
pub struct CategoriesArgs {
    /// Era name, e.g. "Past Events".
    pub era: String,
}

/// Arguments for the `events` subcommand.
#[derive(clap::Args)]
pub struct EventsArgs {
    /// Restrict to one era.
    #[arg(short, long)]
    pub era: Option<String>,

    /// Restrict to one category of the era (keeps authored order).
    #[arg(short = 'C', long, requires = "era")]
    pub category: Option<String>,

    /// Print events as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Keyword matched case-insensitively against titles and descriptions.
    #[arg(default_value = "")]
    pub keyword: String,

    /// Print events as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Event title, e.g. "Moon Landing".
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,
}

/// Arguments for the `jump` subcommand.
#[derive(clap::Args)]
pub struct JumpArgs {
    /// Landmark name, e.g. "Moon Landing".
    #[arg(num_args = 0..)]
    pub name: Vec<String>,

    /// List the available landmarks instead of jumping.
    #[arg(short, long)]
    pub list: bool,
}

/// Parses a month given as a number or an English name.
fn parse_month(s: &str) -> Result<u8, String> {
    if let Ok(n) = s.trim().parse::<u8>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(format!("month {n} is not in 1..=12"));
    }
    month_from_name(s).ok_or_else(|| format!("unknown month '{s}'"))
}

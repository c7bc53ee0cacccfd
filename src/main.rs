mod calendar_cmd;
mod catalog_cmd;
mod cli;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Month(args) => calendar_cmd::run_month(args, &config),
        Command::Today => calendar_cmd::run_today(&config),
        Command::Jump(args) => calendar_cmd::run_jump(args, &config),
        Command::Eras => catalog_cmd::run_eras(),
        Command::Categories(args) => catalog_cmd::run_categories(args),
        Command::Events(args) => catalog_cmd::run_events(args),
        Command::Search(args) => catalog_cmd::run_search(args, &config),
        Command::Show(args) => catalog_cmd::run_show(args, &config),
    }
}

mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::HolidaysConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = HolidaysConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::List(args) => commands::list(args, config),
        Command::Check(args) => commands::check(args, config),
        Command::Rules => commands::rules(),
    }
}

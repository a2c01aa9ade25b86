use std::path::PathBuf;

use clap::{Parser, Subcommand};

use holidayrules::core::Year;
use holidayrules::time::Month;

/// Holiday calendars from named rules.
#[derive(Parser)]
#[command(
    name = "holidays",
    version,
    about = "List holidays and check business days from holiday rules"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the holidays of the chosen rules over a range of years.
    List(ListArgs),
    /// Report whether a date is a good business day.
    Check(CheckArgs),
    /// List the registered rule names.
    Rules,
}

/// Rule selection shared by `list` and `check`.
#[derive(clap::Args)]
pub struct RuleArgs {
    /// Rule to include (repeatable); overrides `rules` from config.
    #[arg(short, long = "rule")]
    pub rules: Vec<String>,

    /// Weekend day indices, 0 = Monday … 6 = Sunday; overrides `day_mask`.
    #[arg(long, value_delimiter = ',')]
    pub day_mask: Option<Vec<u8>>,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// First year to compute; overrides `years.from`.
    #[arg(long)]
    pub from: Option<Year>,

    /// Last year to compute (inclusive); overrides `years.to`.
    #[arg(long)]
    pub to: Option<Year>,

    /// Keep only these years (repeatable).
    #[arg(long)]
    pub year: Vec<Year>,

    /// Keep only these months (repeatable): 1–12, `Jan` or `January`.
    #[arg(long, value_parser = parse_month)]
    pub month: Vec<u8>,

    /// Print JSON records instead of a table.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub selection: RuleArgs,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date to check, as `YYYY-MM-DD`.
    pub date: String,

    #[command(flatten)]
    pub selection: RuleArgs,
}

/// Month number from `7`, `Jul` or `July`.
fn parse_month(s: &str) -> Result<u8, String> {
    s.parse::<u8>()
        .ok()
        .and_then(Month::from_number)
        .or_else(|| Month::from_name(s))
        .map(|m| m.number())
        .ok_or_else(|| format!("`{s}` is not a month (1-12, Jan-Dec or January-December)"))
}

//! Subcommand implementations.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use holidayrules::rules::{library, DayMask, HolidayRecord, RecordFilter, RuleRegistry, RuleSet};
use holidayrules::time::{Date, DateKey};

use crate::cli::{CheckArgs, ListArgs, RuleArgs};
use crate::config::{HolidaysConfig, OutputFormat};

/// Print the holidays of the selected rules.
pub fn list(args: ListArgs, mut config: HolidaysConfig) -> Result<()> {
    let _cmd = info_span!("list").entered();
    args.selection.apply(&mut config);
    if let Some(from) = args.from {
        config.years.from = from;
    }
    if let Some(to) = args.to {
        config.years.to = to;
    }
    if args.json {
        config.format = OutputFormat::Json;
    }
    config.validate()?;

    let rules = build_rule_set(&config)?;
    let holidays = rules
        .dates_for_years(config.years.years())
        .context("failed to compute holidays")?;
    let filter = RecordFilter {
        years: args.year,
        months: args.month,
    };
    let records = filter.apply(RuleSet::flatten_to_records(&holidays));
    info!(
        computed = holidays.len(),
        selected = records.len(),
        "holidays selected"
    );

    let mut out = io::stdout().lock();
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&mut out, &records)?,
    }
    Ok(())
}

/// Report whether a date is a good day, and why not if it is not.
pub fn check(args: CheckArgs, mut config: HolidaysConfig) -> Result<()> {
    let _cmd = info_span!("check").entered();
    args.selection.apply(&mut config);

    let date: Date = args
        .date
        .parse()
        .with_context(|| format!("invalid date: {}", args.date))?;
    let rules = build_rule_set(&config)?;
    let verdict = describe_day(&rules, date)?;
    println!("{date}: {verdict}");
    Ok(())
}

/// List the registered rules with their descriptions.
pub fn rules() -> Result<()> {
    let registry = RuleRegistry::standard();
    let mut out = io::stdout().lock();
    for name in registry.names() {
        let description = registry
            .get(&name)
            .and_then(|entry| entry.description)
            .unwrap_or_default();
        writeln!(out, "{name:<16} {description}")?;
    }
    Ok(())
}

impl RuleArgs {
    fn apply(&self, config: &mut HolidaysConfig) {
        if !self.rules.is_empty() {
            config.rules = self.rules.clone();
        }
        if let Some(mask) = &self.day_mask {
            config.day_mask = mask.clone();
        }
    }
}

/// The configured rules, or the stock library when none are named.
fn build_rule_set(config: &HolidaysConfig) -> Result<RuleSet> {
    let mask = DayMask::from_indices(&config.day_mask).context("invalid day mask")?;
    let rules = if config.rules.is_empty() {
        RuleSet::new(library::standard_rules())
    } else {
        let names: Vec<&str> = config.rules.iter().map(String::as_str).collect();
        RuleRegistry::standard()
            .rule_set(&names)
            .context("failed to select rules")?
    };
    debug!(rules = rules.rules().len(), "rule set built");
    Ok(rules.with_day_mask(mask))
}

fn describe_day(rules: &RuleSet, date: Date) -> Result<String> {
    if rules.is_good_day(date)? {
        return Ok("good day".to_string());
    }
    let holidays = rules.dates_for_year(date.year())?;
    Ok(match holidays.get(&DateKey::from_date(date)) {
        Some(label) => format!("holiday ({label})"),
        None => format!("weekend ({})", date.weekday()),
    })
}

fn write_table(out: &mut impl Write, records: &[HolidayRecord]) -> io::Result<()> {
    writeln!(out, "{:<10} {:>4} {:>5} {:>3}  holiday", "date", "year", "month", "day")?;
    for r in records {
        writeln!(
            out,
            "{:<10} {:>4} {:>5} {:>3}  {}",
            r.date_string.as_str(),
            r.year,
            r.month,
            r.day,
            r.holiday
        )?;
    }
    Ok(())
}

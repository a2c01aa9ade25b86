use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use holidayrules::core::Year;

/// Top-level `holidays` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysConfig {
    /// Years to compute.
    #[serde(default)]
    pub years: YearRange,

    /// Rule names, in evaluation order.  Empty means the stock library.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Weekend day indices, 0 = Monday … 6 = Sunday.
    #[serde(default = "default_day_mask")]
    pub day_mask: Vec<u8>,

    /// Output format for `list`.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        Self {
            years: YearRange::default(),
            rules: Vec::new(),
            day_mask: default_day_mask(),
            format: OutputFormat::default(),
        }
    }
}

/// Inclusive range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearRange {
    #[serde(default = "default_from")]
    pub from: Year,
    #[serde(default = "default_to")]
    pub to: Year,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
        }
    }
}

impl YearRange {
    pub fn years(&self) -> RangeInclusive<Year> {
        self.from..=self.to
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn default_day_mask() -> Vec<u8> {
    vec![5, 6]
}
fn default_from() -> Year {
    2018
}
fn default_to() -> Year {
    2037
}

impl HolidaysConfig {
    /// Read and parse a TOML file, or fall back to defaults without one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse TOML config")
    }

    /// Check cross-field constraints once overrides are applied.
    pub fn validate(&self) -> Result<()> {
        if self.years.from > self.years.to {
            bail!(
                "empty year range: from {} is after to {}",
                self.years.from,
                self.years.to
            );
        }
        Ok(())
    }
}

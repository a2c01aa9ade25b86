//! `HolidayRule`: a named, described date rule.

use std::sync::Arc;

use hol_core::errors::Result;
use hol_core::Year;

use crate::date_rule::{DateRule, Observance, SharedRule};

/// A single holiday: a display name, a description and the date rule that
/// places it in each year.
///
/// Holiday rules are built once and never mutated.  Cloning is cheap and
/// shares the underlying date rule, so one rule can sit in several rule
/// sets.
#[derive(Debug, Clone)]
pub struct HolidayRule {
    name: String,
    description: String,
    rule: SharedRule,
}

impl HolidayRule {
    /// Create a holiday rule owning `rule`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        rule: impl DateRule + 'static,
    ) -> Self {
        Self::from_shared(name, description, Arc::new(rule))
    }

    /// Create a holiday rule around an already shared date rule.
    pub fn from_shared(
        name: impl Into<String>,
        description: impl Into<String>,
        rule: SharedRule,
    ) -> Self {
        HolidayRule {
            name: name.into(),
            description: description.into(),
            rule,
        }
    }

    /// Display and selection key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The underlying date rule.
    pub fn rule(&self) -> &SharedRule {
        &self.rule
    }

    /// Evaluate the rule for a single year.
    pub fn evaluate_year(&self, year: Year) -> Result<Observance> {
        self.rule.evaluate(year)
    }

    /// Evaluate the rule once per year, preserving input order.
    ///
    /// Nothing is cached here; see `RuleSet` for memoized evaluation.
    pub fn evaluate(&self, years: impl IntoIterator<Item = Year>) -> Result<Vec<Observance>> {
        years.into_iter().map(|y| self.rule.evaluate(y)).collect()
    }
}

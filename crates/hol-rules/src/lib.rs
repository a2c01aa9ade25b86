//! # hol-rules
//!
//! The holiday engine: date rules and their combinators, named holiday
//! rules, cached rule sets answering business-day queries, and a registry
//! for ad hoc named rules.
//!
//! ```
//! use hol_rules::{fixed, DateRuleExt, HolidayRule, RuleSet};
//! use hol_time::Date;
//!
//! let rules = RuleSet::new(vec![
//!     HolidayRule::new("Canada Day", "First of July", fixed(7, 1).roll_forward()),
//! ]);
//! let hols = rules.dates_for_year(2022).unwrap();
//! assert_eq!(hols["20220701"], "Canada Day");
//! assert!(!rules.is_good_day(Date::from_ymd(2022, 7, 1).unwrap()).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rule combinators: fixed dates, weekend rolls, exclusions, rollback.
pub mod combinators;

/// The `DateRule` trait and its `Observance` outcome.
pub mod date_rule;

/// `HolidayRule`: a named date rule.
pub mod holiday_rule;

/// Stock holiday rules.
pub mod library;

/// Flat holiday records and record filtering.
pub mod record;

/// Named-rule registry.
pub mod registry;

/// `RuleSet`: ordered rules with a per-year cache.
pub mod rule_set;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use combinators::{
    easter, exclude_years, fixed, nth_weekday, roll_back_across_year_end, roll_both,
    roll_forward, DateRuleExt, EasterOffset, ExcludeYears, Fixed, NthWeekday,
    RollBackAcrossYearEnd, RollBoth, RollForward,
};
pub use date_rule::{from_fn, DateRule, FnRule, Observance, SharedRule, OBSERVED};
pub use holiday_rule::HolidayRule;
pub use record::{HolidayRecord, RecordFilter};
pub use registry::{RegisteredRule, Registration, RuleRegistry, SharedRules};
pub use rule_set::{DayMask, HolidayMap, RuleSet};

//! # holidayrules
//!
//! Rule-based holiday calendars.  Holidays are described by date rules
//! (fixed dates, weekend rolls, Easter offsets, year exclusions) that are
//! combined into rule sets answering "is this a good business day?".
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `hol-*` crates.
//!
//! ```rust
//! use holidayrules::rules::{library, RuleSet};
//! use holidayrules::time::Date;
//!
//! let rules = RuleSet::new(library::standard_rules());
//! // Christmas 2021 fell on a Saturday and is observed on Monday the 27th.
//! let hols = rules.dates_for_year(2021).unwrap();
//! assert_eq!(hols["20211227"], "Christmas [Observed]");
//! assert!(rules.is_good_day(Date::from_ymd(2021, 12, 24).unwrap()).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and shared aliases.
pub use hol_core as core;

/// Dates, date keys, Easter and the calendar trait.
pub use hol_time as time;

/// Date rules, holiday rules, rule sets and the registry.
pub use hol_rules as rules;

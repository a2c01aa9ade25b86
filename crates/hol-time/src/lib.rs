//! # hol-time
//!
//! Date, weekday, month, date-key, Easter and business-day calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait: business-day queries and date adjustment.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DateKey`: canonical `YYYYMMDD` string form of a date.
pub mod date_key;

/// Western Easter computation.
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use date::Date;
pub use date_key::DateKey;
pub use easter::easter_sunday;
pub use month::Month;
pub use weekday::Weekday;

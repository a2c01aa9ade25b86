//! Rule combinators.
//!
//! Each combinator is a small struct implementing [`DateRule`]; wrappers
//! hold the rule they wrap, so combinators nest freely:
//!
//! ```
//! use hol_rules::{fixed, DateRule, DateRuleExt, Observance};
//! use hol_time::Date;
//!
//! let independence_day = fixed(7, 4).roll_both();
//! assert_eq!(
//!     independence_day.evaluate(2020).unwrap(),
//!     Observance::observed(Date::from_ymd(2020, 7, 3).unwrap()),
//! );
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use hol_core::errors::{Error, Result};
use hol_core::{Days, Year};
use hol_time::{easter_sunday, Date, Weekday};

use crate::date_rule::{DateRule, Observance, SharedRule};

// ── Fixed date ────────────────────────────────────────────────────────────────

/// The same month and day every year, never adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed {
    month: u8,
    day: u8,
}

impl Fixed {
    /// Create the rule.  The date is validated per year on evaluation:
    /// `Fixed::new(2, 29)` evaluates fine in leap years and fails with
    /// `InvalidCalendarDate` in the others.
    pub fn new(month: u8, day: u8) -> Self {
        Fixed { month, day }
    }
}

impl DateRule for Fixed {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        Ok(Observance::on(Date::from_ymd(year, self.month, self.day)?))
    }
}

/// `(year, month, day)` with no note.
pub fn fixed(month: u8, day: u8) -> Fixed {
    Fixed::new(month, day)
}

// ── Weekend adjustment ────────────────────────────────────────────────────────

/// Move a present observance off the weekend by the given day offsets.
fn shift_weekend(observance: Observance, saturday: Days, sunday: Days) -> Result<Observance> {
    let Observance::Present { date, note } = observance else {
        return Ok(Observance::Absent);
    };
    match date.weekday() {
        Weekday::Saturday => Ok(Observance::observed(date.add_days(saturday)?)),
        Weekday::Sunday => Ok(Observance::observed(date.add_days(sunday)?)),
        _ => Ok(Observance::Present { date, note }),
    }
}

/// Saturday and Sunday move forward to the following Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollForward<R> {
    base: R,
}

impl<R: DateRule> RollForward<R> {
    /// Wrap `base`.
    pub fn new(base: R) -> Self {
        RollForward { base }
    }
}

impl<R: DateRule> DateRule for RollForward<R> {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        shift_weekend(self.base.evaluate(year)?, 2, 1)
    }
}

/// Saturday moves back to Friday, Sunday forward to Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollBoth<R> {
    base: R,
}

impl<R: DateRule> RollBoth<R> {
    /// Wrap `base`.
    pub fn new(base: R) -> Self {
        RollBoth { base }
    }
}

impl<R: DateRule> DateRule for RollBoth<R> {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        shift_weekend(self.base.evaluate(year)?, -1, 1)
    }
}

/// Roll weekend dates of `base` forward to Monday.
pub fn roll_forward<R: DateRule>(base: R) -> RollForward<R> {
    RollForward::new(base)
}

/// Roll Saturday dates of `base` back to Friday and Sunday dates to Monday.
pub fn roll_both<R: DateRule>(base: R) -> RollBoth<R> {
    RollBoth::new(base)
}

// ── Year exclusion ────────────────────────────────────────────────────────────

/// `base`, except no holiday in the excluded years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeYears<R> {
    base: R,
    excluded: BTreeSet<Year>,
}

impl<R: DateRule> ExcludeYears<R> {
    /// Wrap `base`, suppressing it in every year of `excluded`.
    pub fn new(base: R, excluded: impl IntoIterator<Item = Year>) -> Self {
        ExcludeYears {
            base,
            excluded: excluded.into_iter().collect(),
        }
    }
}

impl<R: DateRule> DateRule for ExcludeYears<R> {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        if self.excluded.contains(&year) {
            return Ok(Observance::Absent);
        }
        self.base.evaluate(year)
    }
}

/// Suppress `base` in the `excluded` years.
pub fn exclude_years<R: DateRule>(
    base: R,
    excluded: impl IntoIterator<Item = Year>,
) -> ExcludeYears<R> {
    ExcludeYears::new(base, excluded)
}

// ── Rollback across the year end ──────────────────────────────────────────────

/// Next year's holiday, when its observed date has rolled back into this
/// year.
///
/// Models New Year's Day falling on a Saturday and being observed on the
/// preceding Friday, 31 December.  In every other year the rule is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollBackAcrossYearEnd<R> {
    base: R,
}

impl<R: DateRule> RollBackAcrossYearEnd<R> {
    /// Wrap `base`.
    pub fn new(base: R) -> Self {
        RollBackAcrossYearEnd { base }
    }
}

impl<R: DateRule> DateRule for RollBackAcrossYearEnd<R> {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        let next = year
            .checked_add(1)
            .ok_or_else(|| Error::Date(format!("year {year} has no successor")))?;
        match self.base.evaluate(next)? {
            Observance::Present { date, note } if date.year() == year => {
                Ok(Observance::Present { date, note })
            }
            _ => Ok(Observance::Absent),
        }
    }
}

/// Evaluate `base` for the following year and keep the result only if it
/// rolled back into the requested year.
pub fn roll_back_across_year_end<R: DateRule>(base: R) -> RollBackAcrossYearEnd<R> {
    RollBackAcrossYearEnd::new(base)
}

// ── Moveable feasts ───────────────────────────────────────────────────────────

/// A fixed number of days from Western Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EasterOffset {
    offset: Days,
}

impl EasterOffset {
    /// `offset` days after Easter Sunday (negative for before).
    pub fn new(offset: Days) -> Self {
        EasterOffset { offset }
    }
}

impl DateRule for EasterOffset {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        Ok(Observance::on(easter_sunday(year)?.add_days(self.offset)?))
    }
}

/// Easter Sunday plus `offset` days.
pub fn easter(offset: Days) -> EasterOffset {
    EasterOffset::new(offset)
}

/// The `n`-th given weekday of a month, e.g. the first Monday of September.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NthWeekday {
    n: u8,
    weekday: Weekday,
    month: u8,
}

impl NthWeekday {
    /// Create the rule.
    pub fn new(n: u8, weekday: Weekday, month: u8) -> Self {
        NthWeekday { n, weekday, month }
    }
}

impl DateRule for NthWeekday {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        Ok(Observance::on(Date::nth_weekday(
            self.n,
            self.weekday,
            year,
            self.month,
        )?))
    }
}

/// The `n`-th `weekday` of `month`.
pub fn nth_weekday(n: u8, weekday: Weekday, month: u8) -> NthWeekday {
    NthWeekday::new(n, weekday, month)
}

// ── Method syntax ─────────────────────────────────────────────────────────────

/// Method-style access to the wrapping combinators.
pub trait DateRuleExt: DateRule + Sized {
    /// See [`roll_forward`].
    fn roll_forward(self) -> RollForward<Self> {
        RollForward::new(self)
    }

    /// See [`roll_both`].
    fn roll_both(self) -> RollBoth<Self> {
        RollBoth::new(self)
    }

    /// See [`exclude_years`].
    fn exclude_years(self, excluded: impl IntoIterator<Item = Year>) -> ExcludeYears<Self> {
        ExcludeYears::new(self, excluded)
    }

    /// See [`roll_back_across_year_end`].
    fn roll_back_across_year_end(self) -> RollBackAcrossYearEnd<Self> {
        RollBackAcrossYearEnd::new(self)
    }

    /// Type-erase into a [`SharedRule`].
    fn shared(self) -> SharedRule
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<R: DateRule> DateRuleExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_rule::from_fn;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_is_nominal() {
        assert_eq!(fixed(3, 4).evaluate(2020).unwrap(), Observance::on(date(2020, 3, 4)));
    }

    #[test]
    fn fixed_invalid_date_fails_on_evaluation() {
        let rule = fixed(2, 31);
        assert_eq!(
            rule.evaluate(2021),
            Err(Error::InvalidCalendarDate {
                year: 2021,
                month: 2,
                day: 31
            })
        );
        let leap_day = fixed(2, 29);
        assert!(leap_day.evaluate(2024).is_ok());
        assert!(leap_day.evaluate(2023).is_err());
    }

    #[test]
    fn roll_forward_passes_base_note_on_weekdays() {
        let noted = from_fn(|y| Ok(Observance::observed(Date::from_ymd(y, 3, 3)?)));
        // 2021-03-03 is a Wednesday
        assert_eq!(
            noted.roll_forward().evaluate(2021).unwrap(),
            Observance::observed(date(2021, 3, 3))
        );
    }

    #[test]
    fn wrappers_keep_absent() {
        let never = from_fn(|_| Ok(Observance::Absent));
        assert!(roll_forward(&never).evaluate(2020).unwrap().is_absent());
        assert!(roll_both(&never).evaluate(2020).unwrap().is_absent());
        assert!(roll_back_across_year_end(&never)
            .evaluate(2020)
            .unwrap()
            .is_absent());
    }

    #[test]
    fn rollback_needs_a_following_year() {
        let rule = fixed(1, 1).roll_both().roll_back_across_year_end();
        assert!(rule.evaluate(Year::MAX).is_err());
        // year 10000 is outside the date range
        assert!(matches!(rule.evaluate(9999), Err(Error::Date(_))));
        assert!(rule.evaluate(2199).is_ok());
    }

    #[test]
    fn easter_offsets() {
        assert_eq!(easter(-2).evaluate(2023).unwrap(), Observance::on(date(2023, 4, 7)));
        assert_eq!(easter(1).evaluate(2024).unwrap(), Observance::on(date(2024, 4, 1)));
    }

    #[test]
    fn nth_weekday_rule() {
        // Labour Day (Canada): first Monday of September
        let labour = nth_weekday(1, Weekday::Monday, 9);
        assert_eq!(labour.evaluate(2023).unwrap(), Observance::on(date(2023, 9, 4)));
        assert!(nth_weekday(5, Weekday::Monday, 9).evaluate(2023).is_err());
    }
}

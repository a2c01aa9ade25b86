//! The `DateRule` trait.
//!
//! A date rule maps a year to the date a holiday is observed on, or to
//! [`Observance::Absent`] when the holiday does not fall in that year.
//! Rules must be pure: evaluating the same rule for the same year always
//! gives the same answer, which is what lets a `RuleSet` cache results.

use std::fmt;
use std::sync::Arc;

use hol_core::errors::Result;
use hol_core::Year;
use hol_time::Date;

/// Note attached to a date moved off its nominal day.
pub const OBSERVED: &str = "Observed";

/// Outcome of evaluating a [`DateRule`] for one year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Observance {
    /// The holiday falls on `date`.  `note` says how `date` differs from the
    /// nominal date, if it does.
    Present {
        /// Observed date.
        date: Date,
        /// Adjustment note, canonically [`OBSERVED`].
        note: Option<String>,
    },
    /// No holiday this year.
    Absent,
}

impl Observance {
    /// Holiday on its nominal date, without a note.
    pub fn on(date: Date) -> Self {
        Observance::Present { date, note: None }
    }

    /// Holiday moved to `date`, noted as [`OBSERVED`].
    pub fn observed(date: Date) -> Self {
        Observance::Present {
            date,
            note: Some(OBSERVED.to_string()),
        }
    }

    /// The observed date, if any.
    pub fn date(&self) -> Option<Date> {
        match self {
            Observance::Present { date, .. } => Some(*date),
            Observance::Absent => None,
        }
    }

    /// The adjustment note, if any.
    pub fn note(&self) -> Option<&str> {
        match self {
            Observance::Present { note, .. } => note.as_deref(),
            Observance::Absent => None,
        }
    }

    /// `true` for [`Observance::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Observance::Absent)
    }
}

/// A pure function from year to [`Observance`].
///
/// Errors are reserved for dates that cannot exist (31 February, a year
/// outside the supported range); "no holiday" is `Ok(Observance::Absent)`.
pub trait DateRule: fmt::Debug + Send + Sync {
    /// Evaluate the rule for `year`.
    fn evaluate(&self, year: Year) -> Result<Observance>;
}

/// A date rule shared between several holiday rules or rule sets.
pub type SharedRule = Arc<dyn DateRule>;

impl<R: DateRule + ?Sized> DateRule for Arc<R> {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        (**self).evaluate(year)
    }
}

impl<R: DateRule + ?Sized> DateRule for Box<R> {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        (**self).evaluate(year)
    }
}

impl<R: DateRule + ?Sized> DateRule for &R {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        (**self).evaluate(year)
    }
}

/// Adapter turning a closure into a [`DateRule`].
///
/// The closure must be pure for caching to stay correct.
#[derive(Clone)]
pub struct FnRule<F> {
    f: F,
}

/// Wrap a closure `Fn(Year) -> Result<Observance>` as a date rule.
pub fn from_fn<F>(f: F) -> FnRule<F>
where
    F: Fn(Year) -> Result<Observance> + Send + Sync,
{
    FnRule { f }
}

impl<F> DateRule for FnRule<F>
where
    F: Fn(Year) -> Result<Observance> + Send + Sync,
{
    fn evaluate(&self, year: Year) -> Result<Observance> {
        (self.f)(year)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnRule")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observance_accessors() {
        let d = Date::from_ymd(2021, 7, 5).unwrap();
        let obs = Observance::observed(d);
        assert_eq!(obs.date(), Some(d));
        assert_eq!(obs.note(), Some("Observed"));
        assert!(!obs.is_absent());

        assert_eq!(Observance::on(d).note(), None);
        assert_eq!(Observance::Absent.date(), None);
        assert!(Observance::Absent.is_absent());
    }

    #[test]
    fn closure_rule_never_a_holiday() {
        let rule = from_fn(|_| Ok(Observance::Absent));
        assert_eq!(rule.evaluate(1999).unwrap(), Observance::Absent);
        let shared: SharedRule = Arc::new(rule);
        assert_eq!(shared.evaluate(2000).unwrap(), Observance::Absent);
    }
}

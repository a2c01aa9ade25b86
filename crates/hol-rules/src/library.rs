//! Stock holiday rules.
//!
//! The builders return concrete rule types so they can be wrapped further;
//! [`standard_rules`] bundles the common ones as named [`HolidayRule`]s.

use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::Date;

use crate::combinators::{
    easter, fixed, DateRuleExt, EasterOffset, Fixed, RollBackAcrossYearEnd, RollBoth, RollForward,
};
use crate::date_rule::{DateRule, Observance};
use crate::holiday_rule::HolidayRule;

/// 1 January, never adjusted.
pub fn new_year_no_obs() -> Fixed {
    fixed(1, 1)
}

/// A fixed date moved to Monday when it falls on a weekend.
pub fn fixed_date_roll_forward(month: u8, day: u8) -> RollForward<Fixed> {
    fixed(month, day).roll_forward()
}

/// A fixed date moved to Friday from Saturday and to Monday from Sunday.
pub fn fixed_date_roll_both(month: u8, day: u8) -> RollBoth<Fixed> {
    fixed(month, day).roll_both()
}

/// The Friday 31 December preceding a Saturday New Year's Day.
///
/// Absent in every year whose following 1 January is not a Saturday.
pub fn new_year_roll_back() -> RollBackAcrossYearEnd<RollBoth<Fixed>> {
    fixed_date_roll_both(1, 1).roll_back_across_year_end()
}

/// 25 December, rolling forward off the weekend.
pub fn christmas_day() -> RollForward<Fixed> {
    fixed_date_roll_forward(12, 25)
}

/// 26 December, rolling forward off the weekend and past the observed
/// Christmas Day.
pub fn boxing_day() -> BoxingDay {
    BoxingDay {
        christmas: christmas_day(),
    }
}

/// Boxing Day, kept clear of the observed Christmas Day.
///
/// Starting from 26 December, the date moves forward while it is a weekend
/// day or coincides with Christmas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxingDay {
    christmas: RollForward<Fixed>,
}

impl DateRule for BoxingDay {
    fn evaluate(&self, year: Year) -> Result<Observance> {
        let christmas = self.christmas.evaluate(year)?.date();
        let nominal = Date::from_ymd(year, 12, 26)?;
        let mut date = nominal;
        while date.weekday().is_weekend() || Some(date) == christmas {
            date = date.add_days(1)?;
        }
        Ok(if date == nominal {
            Observance::on(date)
        } else {
            Observance::observed(date)
        })
    }
}

/// Easter Monday, western calendar.
pub fn easter_monday() -> EasterOffset {
    easter(1)
}

/// Good Friday, western calendar.
pub fn good_friday() -> EasterOffset {
    easter(-2)
}

/// The stock holidays, in a fixed order.
pub fn standard_rules() -> Vec<HolidayRule> {
    vec![
        HolidayRule::new(
            "NewYear",
            "New Year's day, rolling forward",
            fixed_date_roll_forward(1, 1),
        ),
        HolidayRule::new(
            "Christmas",
            "Christmas day, rolling forward over Boxing day if needed",
            christmas_day(),
        ),
        HolidayRule::new(
            "Boxing",
            "Boxing day, rolling over observed Christmas day if needed",
            boxing_day(),
        ),
        HolidayRule::new("Easter", "Easter Monday, western calendar", easter_monday()),
        HolidayRule::new("GoodFriday", "Good Friday, western calendar", good_friday()),
        HolidayRule::new("CanadaDay", "Canada Day", fixed_date_roll_forward(7, 1)),
        HolidayRule::new(
            "USIndependence",
            "Independence Day (USA)",
            fixed_date_roll_both(7, 4),
        ),
    ]
}

/// Look up a stock holiday by name.
pub fn rule(name: &str) -> Result<HolidayRule> {
    standard_rules()
        .into_iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| Error::UnknownRule(name.to_string()))
}

//! `Calendar` trait.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].  Deciding whether a date is a
//! business day may require evaluating holiday rules, which can fail, so
//! every query returns a [`Result`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use hol_core::errors::Result;
use hol_core::Days;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> Result<bool>;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(!self.is_business_day(date)?)
    }

    /// Return `true` if `date` falls on a non-working day of the week.
    ///
    /// Defaults to Saturday and Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.roll(date, 1),
            BusinessDayConvention::Preceding => self.roll(date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.roll(date, 1)?;
                if adjusted.month() != date.month() {
                    self.roll(date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.roll(date, -1)?;
                if adjusted.month() != date.month() {
                    self.roll(date, 1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date)? {
                    return Ok(date);
                }
                let fwd = self.roll(date, 1)?;
                let bwd = self.roll(date, -1)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
        }
    }

    /// Step from `date` in direction `step` (±1) until a business day is hit.
    /// Returns `date` itself if it is already a business day.
    fn roll(&self, mut date: Date, step: Days) -> Result<Date> {
        while self.is_holiday(date)? {
            date = date.add_days(step)?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` business days.
    fn advance_business_days(&self, mut date: Date, n: Days) -> Result<Date> {
        let step: Days = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date)? {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> Result<Days> {
        if d1 == d2 {
            return Ok(0);
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start;
        while d < end {
            d = d.add_days(1)?;
            if self.is_business_day(d)? {
                count += 1;
            }
        }
        Ok(sign * count)
    }
}

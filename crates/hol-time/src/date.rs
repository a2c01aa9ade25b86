//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch:
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday); earlier dates are zero or negative.
//! * The valid date range is 0001-01-01 to 9999-12-31, proleptic Gregorian.
//!
//! Keeping the date a plain integer makes weekend shifts (`add_days(±n)`)
//! and weekday lookup (`serial mod 7`) trivial.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::{Weekday, WEEKDAYS};
use hol_core::errors::{Error, Result};
use hol_core::{ensure, Days, Year};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(-693_594);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_958_464);

    /// First supported year.
    pub const MIN_YEAR: Year = 1;

    /// Last supported year.
    pub const MAX_YEAR: Year = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// [`Error::Date`] if `year` is outside 1–9999, and
    /// [`Error::InvalidCalendarDate`] if month and day do not name a real
    /// date of that year (e.g. 31 February).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} is outside the supported range {}-{}",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidCalendarDate {
                year: year as i32,
                month,
                day,
            });
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        WEEKDAYS[(self.0 - 1).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Days) -> Result<Self> {
        let serial = self.0.saturating_add(n);
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "{self:?} {n:+} days leaves the supported range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month, or if the month itself is invalid.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        // Days to advance from the 1st to reach the first occurrence
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = Days;
    fn sub(self, rhs: Date) -> Days {
        self.0 - rhs.0
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or_else(bad);
        let year: Year = next()?.parse().map_err(|_| bad())?;
        let month: u8 = next()?.parse().map_err(|_| bad())?;
        let day: u8 = next()?.parse().map_err(|_| bad())?;
        Date::from_ymd(year, month, day)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        match Month::from_number(m) {
            Some(mon) => write!(f, "{d} {mon} {y}"),
            None => write!(f, "{y:04}-{m:02}-{d:02}"),
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year (0 for an invalid month).
pub fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days from 0001-01-01 to January 1 of `year`.
fn days_before_year(year: i32) -> i32 {
    let y = year - 1;
    365 * y + y / 4 - y / 100 + y / 400
}

/// `days_before_year(1900)`, so that 1900-01-01 gets serial 1.
const EPOCH_OFFSET: i32 = 693_595;

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let mut serial = days_before_year(year as i32) - EPOCH_OFFSET;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    let year_start = |y: i32| days_before_year(y) - EPOCH_OFFSET + 1;
    // Estimate from the mean Gregorian year, then correct
    let days = (serial + EPOCH_OFFSET - 1) as i64;
    let mut y = (days * 400 / 146_097 + 1).clamp(1, 9999) as i32;
    while y > 1 && serial < year_start(y) {
        y -= 1;
    }
    while serial >= year_start(y + 1) {
        y += 1;
    }
    let year = y as Year;
    let mut remaining = serial - year_start(y) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(year, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (year, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(Date::from_ymd(1, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(9999, 12, 31).unwrap(), Date::MAX);
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(1899, 12, 31).unwrap().serial(), 0);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2021, 12, 31),
            (2199, 12, 31),
            (2200, 1, 1),
            (1, 1, 1),
            (1600, 2, 29),
            (1899, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(
            Date::from_ymd(2021, 2, 31),
            Err(Error::InvalidCalendarDate {
                year: 2021,
                month: 2,
                day: 31
            })
        );
        assert!(Date::from_ymd(2021, 13, 1).is_err());
        assert!(Date::from_ymd(2021, 4, 0).is_err());
        assert!(Date::from_ymd(2100, 2, 29).is_err());
        assert!(matches!(Date::from_ymd(0, 1, 1), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(10_000, 1, 1), Err(Error::Date(_))));
        assert!(Date::from_ymd(2250, 1, 1).is_ok());
    }

    #[test]
    fn test_weekday() {
        // 2022-01-01 is a Saturday, 2023-01-01 a Sunday
        assert_eq!(Date::from_ymd(2022, 1, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(2023, 1, 1).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn test_add_days_across_year_end() {
        let d = Date::from_ymd(2022, 1, 1).unwrap();
        let prev = d.add_days(-1).unwrap();
        assert_eq!(prev.ymd(), (2021, 12, 31));
        assert_eq!(d - prev, 1);
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Wednesday of March 2024 = March 20
        let d = Date::nth_weekday(3, Weekday::Wednesday, 2024, 3).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 3, 20).unwrap());

        // 5th Monday of January 2024 = January 29
        let d3 = Date::nth_weekday(5, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d3, Date::from_ymd(2024, 1, 29).unwrap());

        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2021-07-05".parse().unwrap();
        assert_eq!(d, Date::from_ymd(2021, 7, 5).unwrap());
        assert_eq!(d.to_string(), "5 July 2021");
        assert_eq!(format!("{d:?}"), "Date(2021-07-05)");
        assert!("2021-07".parse::<Date>().is_err());
        assert!("2021-02-30".parse::<Date>().is_err());
    }
}

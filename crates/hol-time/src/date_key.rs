//! `DateKey`: canonical `YYYYMMDD` encoding of a date.
//!
//! Month and day are always zero padded, so comparing two keys as strings
//! orders them chronologically.  Holiday maps are keyed by `DateKey` and the
//! key doubles as the `date_string` field of flattened records.

use std::borrow::Borrow;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use hol_core::errors::{Error, Result};
use hol_core::Year;

/// A validated `YYYYMMDD` string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Encode a date.
    pub fn from_date(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        DateKey(format!("{y:04}{m:02}{d:02}"))
    }

    /// Parse and validate an eight-digit key naming a real date.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDateKey(s.to_string()));
        }
        let key = DateKey(s.to_string());
        Date::from_ymd(key.year(), key.month(), key.day())
            .map_err(|_| Error::InvalidDateKey(s.to_string()))?;
        Ok(key)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year, read from characters `0..4`.
    pub fn year(&self) -> Year {
        self.digits(0..4) as Year
    }

    /// Month, read from characters `4..6`.
    pub fn month(&self) -> u8 {
        self.digits(4..6) as u8
    }

    /// Day of the month, read from characters `6..8`.
    pub fn day(&self) -> u8 {
        self.digits(6..8) as u8
    }

    /// Decode back into a [`Date`].
    pub fn to_date(&self) -> Result<Date> {
        Date::from_ymd(self.year(), self.month(), self.day())
    }

    // Keys are only built from dates or validated digit strings, so every
    // byte in range is an ASCII digit.
    fn digits(&self, range: std::ops::Range<usize>) -> u32 {
        self.0.as_bytes()[range]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        DateKey::from_date(date)
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateKey::parse(s)
    }
}

impl Borrow<str> for DateKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl std::fmt::Debug for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateKey({})", self.0)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! Error types for holidayrules.
//!
//! All fallible operations in the workspace return [`Result`], whose error
//! is the single `thiserror`-derived [`Error`] enum below.  A rule that has
//! no holiday in a given year is *not* an error; that case is modelled by
//! `Observance::Absent` in `hol-rules`.

use thiserror::Error;

/// The top-level error type used throughout holidayrules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A month/day pair that does not exist in the given year.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate {
        /// Requested year.
        year: i32,
        /// Requested month (1–12).
        month: u8,
        /// Requested day of the month.
        day: u8,
    },

    /// A year outside 1–9999, or date arithmetic leaving that range.
    #[error("date error: {0}")]
    Date(String),

    /// A string that is not a canonical `YYYYMMDD` date key.
    #[error("invalid date key: {0:?}")]
    InvalidDateKey(String),

    /// Weekday index outside `0..=6` (0 = Monday).
    #[error("invalid weekday index {0} (must be 0..=6)")]
    InvalidWeekday(u8),

    /// Lookup of a rule name that has not been registered.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout holidayrules.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn nth(n: u8) -> hol_core::errors::Result<u8> {
///     ensure!(n >= 1, "n must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(nth(1).is_ok());
/// assert!(nth(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_calendar_date_message_is_zero_padded() {
        let err = Error::InvalidCalendarDate {
            year: 2021,
            month: 2,
            day: 31,
        };
        assert_eq!(err.to_string(), "invalid calendar date: 2021-02-31");
    }

    #[test]
    fn ensure_returns_precondition() {
        fn check(x: u8) -> Result<u8> {
            ensure!(x < 7, "index {x} too large");
            Ok(x)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(9),
            Err(Error::Precondition("index 9 too large".into()))
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}

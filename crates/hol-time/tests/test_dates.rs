//! Integration tests for `Date`, `DateKey` and Easter.

use hol_core::Year;
use hol_time::date::{days_in_month, is_leap_year};
use hol_time::{easter_sunday, Date, DateKey, Weekday};
use proptest::prelude::*;

fn date(y: Year, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial())
        .prop_map(|serial| Date::MIN.add_days(serial - Date::MIN.serial()).unwrap())
}

// ─── DateKey ordering ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn key_order_matches_date_order(a in any_date(), b in any_date()) {
        let (ka, kb) = (DateKey::from_date(a), DateKey::from_date(b));
        prop_assert_eq!(a.cmp(&b), ka.as_str().cmp(kb.as_str()));
    }

    #[test]
    fn key_slices_match_date_fields(d in any_date()) {
        let key = DateKey::from_date(d);
        prop_assert_eq!(key.as_str().len(), 8);
        prop_assert_eq!((key.year(), key.month(), key.day()), d.ymd());
    }

    #[test]
    fn weekday_advances_by_one_each_day(d in any_date()) {
        prop_assume!(d < Date::MAX);
        let next = d.add_days(1).unwrap();
        prop_assert_eq!(next.weekday().index(), (d.weekday().index() + 1) % 7);
    }
}

// ─── Calendar facts ───────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn new_year_weekdays_used_by_rule_scenarios() {
    assert_eq!(date(2016, 1, 1).weekday(), Weekday::Friday);
    assert_eq!(date(2017, 1, 1).weekday(), Weekday::Sunday);
    assert_eq!(date(2018, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2021, 1, 1).weekday(), Weekday::Friday);
    assert_eq!(date(2022, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2023, 1, 1).weekday(), Weekday::Sunday);
}

#[test]
fn good_friday_and_easter_monday() {
    // (Good Friday, Easter Monday) pairs
    let expected = [
        ((2000, 4, 21), (2000, 4, 24)),
        ((2001, 4, 13), (2001, 4, 16)),
        ((2002, 3, 29), (2002, 4, 1)),
        ((2003, 4, 18), (2003, 4, 21)),
        ((2004, 4, 9), (2004, 4, 12)),
        ((2005, 3, 25), (2005, 3, 28)),
        ((2006, 4, 14), (2006, 4, 17)),
    ];
    for ((gy, gm, gd), (my, mm, md)) in expected {
        let easter = easter_sunday(gy).unwrap();
        assert_eq!(easter.add_days(-2).unwrap(), date(gy, gm, gd));
        assert_eq!(easter.add_days(1).unwrap(), date(my, mm, md));
    }
}

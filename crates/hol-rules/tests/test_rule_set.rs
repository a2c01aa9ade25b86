//! Integration tests for `RuleSet`: holiday maps, good days and the
//! `Calendar` view.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hol_core::{Error, Year};
use hol_rules::library::{
    fixed_date_roll_both, fixed_date_roll_forward, new_year_roll_back, standard_rules,
};
use hol_rules::{fixed, from_fn, DateRule, DateRuleExt, HolidayRule, RuleSet};
use hol_time::{BusinessDayConvention, Calendar, Date};

fn date(y: Year, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn canada_with_new_years() -> RuleSet {
    RuleSet::new(vec![
        HolidayRule::new(
            "New year, rolling back",
            "New year rolling backwards if a Saturday",
            new_year_roll_back(),
        ),
        HolidayRule::new(
            "New year, rolling forwards on sunday",
            "NY2",
            fixed_date_roll_both(1, 1),
        ),
        HolidayRule::new("Canada Day", "First of July", fixed_date_roll_forward(7, 1)),
    ])
}

// ─── Holiday maps ─────────────────────────────────────────────────────────────

#[test]
fn new_year_and_independence_day() {
    let rules = RuleSet::new(vec![
        HolidayRule::new("NewYears", "New years day", fixed(1, 1).roll_forward()),
        HolidayRule::new("IndependenceDay", "Independence day", fixed(7, 4).roll_forward()),
    ]);

    let y2020 = rules.dates_for_year(2020).unwrap();
    assert_eq!(y2020.len(), 2);
    assert!(y2020.contains_key("20200101"));
    assert!(y2020.contains_key("20200706"));

    let y2019 = rules.dates_for_year(2019).unwrap();
    assert_eq!(y2019.len(), 2);
    assert!(y2019.contains_key("20190101"));
    assert!(y2019.contains_key("20190704"));

    assert_eq!(rules.dates_for_year(2020).unwrap(), y2020);
}

#[test]
fn absent_and_out_of_year_dates_are_skipped() {
    let rules = canada_with_new_years();
    let counts: Vec<usize> = [2019, 2020, 2021, 2022]
        .into_iter()
        .map(|y| rules.dates_for_year(y).unwrap().len())
        .collect();
    assert_eq!(counts, vec![2, 2, 3, 1]);

    let y2021 = rules.dates_for_year(2021).unwrap();
    let keys: Vec<&str> = y2021.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["20211231", "20210101", "20210701"]);
    assert_eq!(y2021["20211231"], "New year, rolling back [Observed]");
    assert_eq!(y2021["20210101"], "New year, rolling forwards on sunday");
}

#[test]
fn good_days() {
    let rules = canada_with_new_years();
    for (m, d) in [(12, 30), (12, 24), (2, 5), (2, 8)] {
        assert!(rules.is_good_day(date(2021, m, d)).unwrap(), "2021-{m}-{d}");
    }
    for (m, d) in [(1, 1), (7, 1), (12, 31), (12, 25), (2, 6), (2, 7)] {
        assert!(!rules.is_good_day(date(2021, m, d)).unwrap(), "2021-{m}-{d}");
    }
}

#[test]
fn multi_year_union() {
    let rules = canada_with_new_years();
    let all = rules.dates_for_years([2022, 2021, 2022]).unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all, rules.dates_for_years([2021, 2022]).unwrap());

    let mut union = rules.dates_for_year(2020).unwrap();
    union.extend(rules.dates_for_year(2021).unwrap());
    assert_eq!(rules.dates_for_years([2020, 2021]).unwrap(), union);
    let keys: Vec<&str> = union.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["20200101", "20200701", "20211231", "20210101", "20210701"]
    );

    let records = RuleSet::flatten_to_records(&rules.dates_for_years(2018..2038).unwrap());
    assert!(records.iter().all(|r| (2018..2038).contains(&r.year)));
    let first = &records[0];
    assert_eq!((first.year, first.month, first.day), (2018, 1, 1));
}

#[test]
fn standard_rules_2024() {
    let rules = RuleSet::new(standard_rules());
    let y2024 = rules.dates_for_year(2024).unwrap();
    assert_eq!(y2024.len(), 7);
    assert_eq!(y2024["20240329"], "GoodFriday");
    assert_eq!(y2024["20240401"], "Easter");
    assert_eq!(y2024["20241226"], "Boxing");
}

#[test]
fn christmas_boxing_labels() {
    let rules = RuleSet::new(standard_rules());
    let y2021 = rules.dates_for_year(2021).unwrap();
    assert_eq!(y2021["20211227"], "Christmas [Observed]");
    assert_eq!(y2021["20211228"], "Boxing [Observed]");
}

// ─── Year range ───────────────────────────────────────────────────────────────

#[test]
fn years_far_from_the_epoch() {
    let rules = canada_with_new_years();
    // the rollback rule looks at 2200-01-01, a Wednesday
    let y2199 = rules.dates_for_year(2199).unwrap();
    let keys: Vec<&str> = y2199.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["21990101", "21990701"]);

    let y2250 = rules.dates_for_year(2250).unwrap();
    assert!(y2250.contains_key("22500101"));
    assert!(y2250.contains_key("22500701"));
    assert!(y2250.keys().all(|k| k.year() == 2250));
    assert!(RuleSet::new(standard_rules()).dates_for_year(2250).is_ok());
    assert!(rules.dates_for_year(1066).is_ok());
}

#[test]
fn year_beyond_the_date_range() {
    let rules = canada_with_new_years();
    assert!(matches!(rules.dates_for_year(9999), Err(Error::Date(_))));
    let plain = RuleSet::new(vec![HolidayRule::new(
        "Canada Day",
        "",
        fixed_date_roll_forward(7, 1),
    )]);
    assert!(plain.dates_for_year(9999).is_ok());
    assert!(matches!(plain.dates_for_year(0), Err(Error::Date(_))));
}

// ─── Caching ──────────────────────────────────────────────────────────────────

#[test]
fn each_year_is_evaluated_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counted = from_fn(move |year| {
        counter.fetch_add(1, Ordering::SeqCst);
        fixed(3, 17).evaluate(year)
    });
    let rules = RuleSet::new(vec![HolidayRule::new("St Patrick", "", counted)]);

    rules.dates_for_year(2020).unwrap();
    rules.dates_for_year(2020).unwrap();
    rules.is_good_day(date(2020, 3, 17)).unwrap();
    rules.dates_for_years([2020, 2021, 2021]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn failed_years_are_not_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let leap_day = from_fn(move |year| {
        counter.fetch_add(1, Ordering::SeqCst);
        fixed(2, 29).evaluate(year)
    });
    let rules = RuleSet::new(vec![HolidayRule::new("Leap", "", leap_day)]);

    assert!(rules.dates_for_year(2023).is_err());
    assert!(rules.dates_for_year(2023).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(rules.dates_for_years([2024, 2023]).is_err());
}

// ─── Calendar view ────────────────────────────────────────────────────────────

#[test]
fn rule_set_as_calendar() {
    let cal = RuleSet::new(standard_rules()).with_name("Toronto");
    assert_eq!(cal.name(), "Toronto");

    let xmas_eve = date(2021, 12, 24);
    assert_eq!(
        cal.adjust(xmas_eve, BusinessDayConvention::Following).unwrap(),
        xmas_eve
    );
    assert_eq!(
        cal.adjust(date(2021, 12, 25), BusinessDayConvention::Following)
            .unwrap(),
        date(2021, 12, 29)
    );
    assert_eq!(
        cal.adjust(date(2021, 12, 27), BusinessDayConvention::Preceding)
            .unwrap(),
        xmas_eve
    );
    assert_eq!(cal.advance_business_days(xmas_eve, 1).unwrap(), date(2021, 12, 29));
    assert_eq!(
        cal.business_days_between(xmas_eve, date(2021, 12, 31)).unwrap(),
        3
    );
    assert!(cal.is_holiday(date(2021, 12, 28)).unwrap());
}

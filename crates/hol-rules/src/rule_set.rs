//! `RuleSet`: an ordered collection of holiday rules with a per-year cache.
//!
//! # Thread safety
//!
//! The cache is filled lazily behind a `RefCell`, so a `RuleSet` is `Send`
//! but not `Sync`.  Use one rule set per thread, or wrap it in a mutex at
//! the call site; the holiday rules themselves are freely shareable.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use tracing::{debug, trace};

use hol_core::errors::Result;
use hol_core::Year;
use hol_time::{Calendar, Date, DateKey, Weekday};

use crate::date_rule::Observance;
use crate::holiday_rule::HolidayRule;
use crate::record::{self, HolidayRecord};

/// Holiday labels keyed by date, in insertion order.
pub type HolidayMap = IndexMap<DateKey, String>;

/// Days of the week that are never business days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMask(BTreeSet<Weekday>);

impl DayMask {
    /// Mask from explicit weekdays.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        DayMask(days.into_iter().collect())
    }

    /// Mask from zero-based indices (0 = Monday … 6 = Sunday).
    pub fn from_indices(indices: &[u8]) -> Result<Self> {
        indices
            .iter()
            .map(|&i| Weekday::from_index(i))
            .collect::<Result<BTreeSet<_>>>()
            .map(DayMask)
    }

    /// `true` if `weekday` is masked out.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0.contains(&weekday)
    }

    /// Masked weekdays in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }
}

impl Default for DayMask {
    /// Saturday and Sunday.
    fn default() -> Self {
        DayMask::new([Weekday::Saturday, Weekday::Sunday])
    }
}

/// Ordered holiday rules, a weekend mask and a memo of computed years.
#[derive(Debug)]
pub struct RuleSet {
    name: String,
    rules: Vec<HolidayRule>,
    day_mask: DayMask,
    cache: RefCell<HashMap<Year, HolidayMap>>,
}

impl RuleSet {
    /// Create a rule set with the default Saturday/Sunday mask.
    pub fn new(rules: impl IntoIterator<Item = HolidayRule>) -> Self {
        RuleSet {
            name: "Rule set".to_string(),
            rules: rules.into_iter().collect(),
            day_mask: DayMask::default(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Replace the weekend mask.
    pub fn with_day_mask(mut self, day_mask: DayMask) -> Self {
        self.day_mask = day_mask;
        self.cache.get_mut().clear();
        self
    }

    /// Set the calendar name reported through [`Calendar::name`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// The weekend mask.
    pub fn day_mask(&self) -> &DayMask {
        &self.day_mask
    }

    /// Holidays falling in `year`, keyed by date.
    ///
    /// Rules are evaluated in order; absent results and dates outside `year`
    /// are skipped.  The label is `"{name} [{note}]"` for noted dates and
    /// `"{name}"` otherwise.  When two rules land on the same date the later
    /// rule's label wins.  The first call for a year computes and caches the
    /// map; later calls return the cached copy.
    pub fn dates_for_year(&self, year: Year) -> Result<HolidayMap> {
        self.with_year(year, HolidayMap::clone)
    }

    /// Union of [`dates_for_year`](Self::dates_for_year) over `years`.
    ///
    /// Years may come in any order and may repeat.
    #[tracing::instrument(level = "debug", skip_all, fields(rule_set = %self.name))]
    pub fn dates_for_years(&self, years: impl IntoIterator<Item = Year>) -> Result<HolidayMap> {
        let mut all = HolidayMap::new();
        for year in years {
            self.with_year(year, |map| {
                all.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())))
            })?;
        }
        Ok(all)
    }

    /// `false` if `date` falls on a masked weekday or is a holiday of its
    /// year, `true` otherwise.
    pub fn is_good_day(&self, date: Date) -> Result<bool> {
        if self.day_mask.contains(date.weekday()) {
            return Ok(false);
        }
        let key = DateKey::from_date(date);
        self.with_year(date.year(), |map| !map.contains_key(&key))
    }

    /// Decompose a holiday map into flat records, in map order.
    pub fn flatten_to_records(map: &HolidayMap) -> Vec<HolidayRecord> {
        record::flatten(map)
    }

    /// Run `f` on the cached map for `year`, computing it first if needed.
    fn with_year<T>(&self, year: Year, f: impl FnOnce(&HolidayMap) -> T) -> Result<T> {
        if let Some(map) = self.cache.borrow().get(&year) {
            trace!(year, "holiday cache hit");
            return Ok(f(map));
        }
        let map = self.compute_year(year)?;
        debug!(year, holidays = map.len(), "computed holidays");
        let mut cache = self.cache.borrow_mut();
        Ok(f(cache.entry(year).or_insert(map)))
    }

    fn compute_year(&self, year: Year) -> Result<HolidayMap> {
        let mut holidays = HolidayMap::new();
        for rule in &self.rules {
            let Observance::Present { date, note } = rule.evaluate_year(year)? else {
                continue;
            };
            if date.year() != year {
                continue;
            }
            let label = match note.as_deref() {
                Some(note) if !note.is_empty() => format!("{} [{}]", rule.name(), note),
                _ => rule.name().to_string(),
            };
            holidays.insert(DateKey::from_date(date), label);
        }
        Ok(holidays)
    }
}

impl Calendar for RuleSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> Result<bool> {
        self.is_good_day(date)
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.day_mask.contains(date.weekday())
    }
}

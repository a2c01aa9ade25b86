//! Flat holiday records, the shape handed to tables and charts.

use serde::{Deserialize, Serialize};

use hol_core::Year;
use hol_time::DateKey;

use crate::rule_set::HolidayMap;

/// One holiday on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// `YYYYMMDD` key.
    pub date_string: DateKey,
    /// Holiday label, e.g. `"Canada Day [Observed]"`.
    pub holiday: String,
    /// Year, from characters `0..4` of the key.
    pub year: Year,
    /// Month, from characters `4..6` of the key.
    pub month: u8,
    /// Day, from characters `6..8` of the key.
    pub day: u8,
}

impl HolidayRecord {
    /// Build a record from a key and its label.
    pub fn new(key: &DateKey, holiday: impl Into<String>) -> Self {
        HolidayRecord {
            date_string: key.clone(),
            holiday: holiday.into(),
            year: key.year(),
            month: key.month(),
            day: key.day(),
        }
    }
}

/// Decompose a holiday map into records, in map order.
pub fn flatten(map: &HolidayMap) -> Vec<HolidayRecord> {
    map.iter()
        .map(|(key, label)| HolidayRecord::new(key, label.as_str()))
        .collect()
}

/// Year and month selection over records.  An empty list selects
/// everything along that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Years to keep.
    pub years: Vec<Year>,
    /// Months (1–12) to keep.
    pub months: Vec<u8>,
}

impl RecordFilter {
    /// `true` if `record` passes both selections.
    pub fn matches(&self, record: &HolidayRecord) -> bool {
        (self.years.is_empty() || self.years.contains(&record.year))
            && (self.months.is_empty() || self.months.contains(&record.month))
    }

    /// Keep the matching records, preserving order.
    pub fn apply(&self, records: impl IntoIterator<Item = HolidayRecord>) -> Vec<HolidayRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

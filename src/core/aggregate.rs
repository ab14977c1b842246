//! Totals and grouped sums of `Dauer` used by the report tables.

use crate::models::{Department, EnrichedRow, Meeting};
use crate::utils::formatting::round2;
use std::collections::BTreeMap;

/// One group of a grouped sum.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSum<K> {
    pub key: K,
    pub dauer: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub rows: usize,
    /// Sum of `Dauer`, rounded to two decimals.
    pub total: f64,
    pub by_department: Vec<GroupSum<Department>>,
    /// `None` collects rows whose project code was not mapped.
    pub by_project: Vec<GroupSum<Option<String>>>,
    pub by_meeting: Vec<GroupSum<Meeting>>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

pub fn summarize(rows: &[EnrichedRow]) -> Summary {
    Summary {
        rows: rows.len(),
        total: round2(rows.iter().map(|r| r.dauer).sum()),
        by_department: group_sum(rows, |r| r.abteilung),
        by_project: group_sum(rows, |r| r.projekt.clone()),
        by_meeting: group_sum(rows, |r| r.meeting),
    }
}

/// Sum `Dauer` per key; groups come back sorted by key.
pub fn group_sum<K, F>(rows: &[EnrichedRow], key: F) -> Vec<GroupSum<K>>
where
    K: Ord,
    F: Fn(&EnrichedRow) -> K,
{
    let mut groups: BTreeMap<K, f64> = BTreeMap::new();
    for row in rows {
        *groups.entry(key(row)).or_insert(0.0) += row.dauer;
    }

    groups
        .into_iter()
        .map(|(key, dauer)| GroupSum {
            key,
            dauer: round2(dauer),
        })
        .collect()
}

/// Share of `part` in `total` in percent, 0 when `total` is 0.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total.abs() < f64::EPSILON {
        0.0
    } else {
        part / total * 100.0
    }
}

//! Month index over an insertion-ordered leave list.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::Leave;

type MonthKey = (i32, u32);

fn month_key(date: NaiveDate) -> MonthKey {
    (date.year(), date.month())
}

/// Maps (year, month) to the positions of records whose start or end date
/// falls in that month. Positions stay in ascending order, matching the
/// insertion order of the underlying list.
#[derive(Debug, Clone, Default)]
pub struct LeaveIndex {
    months: BTreeMap<MonthKey, Vec<usize>>,
}

impl LeaveIndex {
    pub fn build(leaves: &[Leave]) -> Self {
        let mut index = Self::default();
        for (position, leave) in leaves.iter().enumerate() {
            index.insert(position, leave);
        }
        index
    }

    /// Registers the record stored at `position`. Callers append in
    /// increasing position order.
    pub fn insert(&mut self, position: usize, leave: &Leave) {
        let start = leave.start_date.map(month_key);
        let end = leave.end_date.map(month_key);
        for key in [start, end].into_iter().flatten() {
            let positions = self.months.entry(key).or_default();
            if positions.last() != Some(&position) {
                positions.push(position);
            }
        }
    }

    pub fn positions(&self, month: NaiveDate) -> &[usize] {
        self.months
            .get(&month_key(month))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records intersecting `month`, in insertion order.
    pub fn select<'a>(&self, leaves: &'a [Leave], month: NaiveDate) -> Vec<&'a Leave> {
        self.positions(month)
            .iter()
            .filter_map(|&position| leaves.get(position))
            .collect()
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }
}

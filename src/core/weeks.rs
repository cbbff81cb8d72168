use crate::models::WorkEntry;
use crate::utils::date::week_start;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Entries sharing the same Sunday-anchored week, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub entries: Vec<WorkEntry>,
}

impl WeekBucket {
    fn new(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            entries: Vec::new(),
        }
    }

    /// The Saturday closing this week.
    pub fn week_end(&self) -> NaiveDate {
        self.week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(self.week_start)
    }

    /// Sum over closed entries; open entries count as zero.
    pub fn worked_minutes(&self) -> i64 {
        self.entries.iter().filter_map(WorkEntry::worked_minutes).sum()
    }

    pub fn open_entries(&self) -> usize {
        self.entries.iter().filter(|e| e.is_open()).count()
    }
}

/// Week buckets in the order their keys first appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub buckets: Vec<WeekBucket>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    /// Entries in bucket-then-element order.
    pub fn entries(&self) -> impl Iterator<Item = &WorkEntry> {
        self.buckets.iter().flat_map(|b| b.entries.iter())
    }

    pub fn total_worked_minutes(&self) -> i64 {
        self.buckets.iter().map(WeekBucket::worked_minutes).sum()
    }
}

pub struct WeekAggregator;

impl WeekAggregator {
    /// Partition `entries` by week in a single left-to-right pass.
    ///
    /// A bucket is created the first time its week key is seen and later
    /// entries of that week are appended to it. Nothing is re-sorted, so the
    /// same input order always yields the same report.
    pub fn group_by_week(entries: &[WorkEntry]) -> Report {
        let mut buckets: Vec<WeekBucket> = Vec::new();
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();

        for entry in entries {
            let key = week_start(entry.date);
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(WeekBucket::new(key));
                buckets.len() - 1
            });
            buckets[slot].entries.push(entry.clone());
        }

        Report { buckets }
    }
}

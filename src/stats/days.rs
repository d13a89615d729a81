//! Date-grouped history of the journal.
//!
//! The past-days view partitions entries by calendar date, newest first,
//! capped at a fixed number of dates, with per-day summary stats. Today is
//! excluded by default (it has its own live view), and an exact-date filter
//! supports the "yesterday only" view.
//!
//! Dates are zero-padded ISO strings, so descending lexicographic order is
//! descending chronological order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Entry;
use crate::stats::aggregate::{aggregate, Summary};

/// Default number of dates retained in the past-days view.
pub const DEFAULT_MAX_DATES: usize = 30;

/// Options for grouping entries by day.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOptions {
    /// Drop entries dated `today`.
    pub exclude_today: bool,
    /// Retain only entries on this exact date.
    pub only_date: Option<String>,
    /// Keep at most this many dates, newest first.
    pub max_dates: usize,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            exclude_today: true,
            only_date: None,
            max_dates: DEFAULT_MAX_DATES,
        }
    }
}

impl GroupOptions {
    /// Options for the "yesterday only" view.
    pub fn only(date: impl Into<String>) -> Self {
        Self {
            only_date: Some(date.into()),
            ..Self::default()
        }
    }
}

/// One day's entries with their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: String,
    pub entries: Vec<Entry>,
    pub stats: Summary,
}

/// The grouped history, newest date first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayGroups {
    pub groups: Vec<DayGroup>,
}

impl DayGroups {
    /// The most recent retained date.
    ///
    /// The presentation layer default-expands this day on first load when
    /// the user has made no selection; the grouper only makes it
    /// discoverable.
    pub fn latest(&self) -> Option<&str> {
        self.groups.first().map(|g| g.date.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition entries by date, newest first, with per-day stats.
pub fn group_by_day(entries: &[Entry], today: &str, options: &GroupOptions) -> DayGroups {
    // BTreeMap keeps dates sorted; iterate in reverse for newest-first.
    let mut by_date: BTreeMap<&str, Vec<Entry>> = BTreeMap::new();

    for entry in entries {
        if options.exclude_today && entry.date == today {
            continue;
        }
        if let Some(only) = &options.only_date {
            if entry.date != *only {
                continue;
            }
        }
        by_date.entry(entry.date.as_str()).or_default().push(entry.clone());
    }

    let groups = by_date
        .into_iter()
        .rev()
        .take(options.max_dates)
        .map(|(date, entries)| {
            let stats = aggregate(&entries);
            DayGroup {
                date: date.to_string(),
                entries,
                stats,
            }
        })
        .collect();

    DayGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryDraft;

    fn entry(date: &str, lang: &str, minutes: i64) -> Entry {
        EntryDraft::new(date, lang).minutes(minutes).effort(3).create(0)
    }

    #[test]
    fn test_empty_entries_empty_groups() {
        let groups = group_by_day(&[], "2025-01-10", &GroupOptions::default());
        assert!(groups.is_empty());
        assert_eq!(groups.latest(), None);
    }

    #[test]
    fn test_excludes_today_by_default() {
        let entries = vec![entry("2025-01-09", "fr", 30), entry("2025-01-10", "fr", 15)];
        let groups = group_by_day(&entries, "2025-01-10", &GroupOptions::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.groups[0].date, "2025-01-09");
    }

    #[test]
    fn test_today_included_when_not_excluded() {
        let entries = vec![entry("2025-01-09", "fr", 30), entry("2025-01-10", "fr", 15)];
        let options = GroupOptions {
            exclude_today: false,
            ..GroupOptions::default()
        };
        let groups = group_by_day(&entries, "2025-01-10", &options);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.latest(), Some("2025-01-10"));
    }

    #[test]
    fn test_newest_date_first() {
        let entries = vec![
            entry("2025-01-05", "fr", 10),
            entry("2025-01-09", "fr", 20),
            entry("2025-01-07", "fr", 30),
        ];
        let groups = group_by_day(&entries, "2025-01-10", &GroupOptions::default());
        let dates: Vec<&str> = groups.groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-09", "2025-01-07", "2025-01-05"]);
        assert_eq!(groups.latest(), Some("2025-01-09"));
    }

    #[test]
    fn test_only_date_filter() {
        let entries = vec![
            entry("2025-01-08", "fr", 10),
            entry("2025-01-09", "fr", 20),
            entry("2025-01-09", "pt", 40),
        ];
        let groups = group_by_day(&entries, "2025-01-10", &GroupOptions::only("2025-01-09"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.groups[0].entries.len(), 2);
        assert_eq!(groups.groups[0].stats.total_minutes, 60);
    }

    #[test]
    fn test_max_dates_truncation() {
        let entries: Vec<Entry> = (1..=9)
            .map(|d| entry(&format!("2025-01-0{}", d), "fr", 10))
            .collect();
        let options = GroupOptions {
            max_dates: 3,
            ..GroupOptions::default()
        };
        let groups = group_by_day(&entries, "2025-02-01", &options);
        assert_eq!(groups.len(), 3);
        // Truncation keeps the newest dates.
        assert_eq!(groups.latest(), Some("2025-01-09"));
        assert_eq!(groups.groups[2].date, "2025-01-07");
    }

    #[test]
    fn test_per_day_stats() {
        let entries = vec![
            entry("2025-01-09", "fr", 30),
            entry("2025-01-09", "pt", 60),
            entry("2025-01-08", "fr", 10),
        ];
        let groups = group_by_day(&entries, "2025-01-10", &GroupOptions::default());
        assert_eq!(groups.groups[0].stats.total_minutes, 90);
        assert_eq!(groups.groups[0].stats.unique_languages, 2);
        assert_eq!(groups.groups[1].stats.total_minutes, 10);
    }

    #[test]
    fn test_multiple_entries_same_day_one_group() {
        let entries = vec![
            entry("2025-01-09", "fr", 30),
            entry("2025-01-09", "pt", 60),
            entry("2025-01-09", "bg", 15),
        ];
        let groups = group_by_day(&entries, "2025-01-10", &GroupOptions::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.groups[0].entries.len(), 3);
    }
}

//! Summary statistics over study entries.
//!
//! Pure aggregation: no stored state, recomputed in full on every snapshot
//! refresh. Empty input produces an all-zero summary, never an error.

use serde::{Deserialize, Serialize};

use crate::core::Entry;

/// Numeric summary of a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of entries.
    pub total_entries: usize,
    /// Sum of minutes across all entries.
    pub total_minutes: u64,
    /// Mean effort rating; 0.0 for an empty set.
    pub avg_effort: f64,
    /// Number of distinct dates.
    pub unique_dates: usize,
    /// Number of distinct languages.
    pub unique_languages: usize,
    /// Total minutes divided by distinct languages (at least 1).
    pub avg_minutes_per_language: f64,
}

/// Compute the summary for a set of entries.
pub fn aggregate(entries: &[Entry]) -> Summary {
    let total_entries = entries.len();
    let total_minutes: u64 = entries.iter().map(|e| e.minutes as u64).sum();

    let avg_effort = if total_entries == 0 {
        0.0
    } else {
        let effort_sum: u64 = entries.iter().map(|e| e.effort as u64).sum();
        effort_sum as f64 / total_entries as f64
    };

    let unique_dates = distinct(entries.iter().map(|e| e.date.as_str()));
    let unique_languages = distinct(entries.iter().map(|e| e.language_id.as_str()));

    let avg_minutes_per_language = total_minutes as f64 / unique_languages.max(1) as f64;

    Summary {
        total_entries,
        total_minutes,
        avg_effort,
        unique_dates,
        unique_languages,
        avg_minutes_per_language,
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    let set: std::collections::HashSet<&str> = values.collect();
    set.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryDraft;
    use proptest::prelude::*;

    fn entry(date: &str, lang: &str, minutes: i64, effort: i64) -> Entry {
        EntryDraft::new(date, lang)
            .minutes(minutes)
            .effort(effort)
            .create(0)
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(aggregate(&[]), Summary::default());
    }

    #[test]
    fn test_single_day_two_languages() {
        let entries = vec![
            entry("2025-01-10", "fr", 30, 3),
            entry("2025-01-10", "pt", 60, 5),
        ];
        let summary = aggregate(&entries);
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.total_minutes, 90);
        assert!((summary.avg_effort - 4.0).abs() < f64::EPSILON);
        assert_eq!(summary.unique_dates, 1);
        assert_eq!(summary.unique_languages, 2);
        assert!((summary.avg_minutes_per_language - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeat_language_counts_once() {
        let entries = vec![
            entry("2025-01-09", "fr", 10, 2),
            entry("2025-01-10", "fr", 20, 4),
        ];
        let summary = aggregate(&entries);
        assert_eq!(summary.unique_dates, 2);
        assert_eq!(summary.unique_languages, 1);
        assert_eq!(summary.total_minutes, 30);
        assert!((summary.avg_minutes_per_language - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_minutes_entries() {
        let entries = vec![entry("2025-01-10", "fr", 0, 1)];
        let summary = aggregate(&entries);
        assert_eq!(summary.total_minutes, 0);
        assert!((summary.avg_minutes_per_language - 0.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_totals_are_consistent(
            entries in proptest::collection::vec(
                (0u32..400, 1u8..=5, 0u8..4, 0u8..6),
                0..40,
            )
        ) {
            let entries: Vec<Entry> = entries
                .into_iter()
                .map(|(minutes, effort, day, lang)| {
                    entry(
                        &format!("2025-01-0{}", day + 1),
                        &format!("l{}", lang),
                        minutes as i64,
                        effort as i64,
                    )
                })
                .collect();

            let summary = aggregate(&entries);

            prop_assert_eq!(summary.total_entries, entries.len());
            prop_assert!(summary.unique_dates <= entries.len());
            prop_assert!(summary.unique_languages <= entries.len());
            // Average effort stays inside the rating scale for non-empty input.
            if !entries.is_empty() {
                prop_assert!(summary.avg_effort >= 1.0 && summary.avg_effort <= 5.0);
            }
            // avg per language never divides by zero.
            prop_assert!(summary.avg_minutes_per_language.is_finite());
        }
    }
}

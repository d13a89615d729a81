//! Review command: the past-days view.
//!
//! Groups history by date, newest first, capped at a configurable number of
//! dates, with per-day summary stats. Today is excluded by default (the
//! today command covers it); `--yesterday` narrows to just the previous day.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::{group_by_day, DayGroups, GroupOptions};
use crate::storage::{EntryQuery, SnapshotStore};
use crate::util::previous_day;

/// Options for the review command.
#[derive(Debug, Clone, Default)]
pub struct ReviewOptions {
    /// The reference "today", "YYYY-MM-DD".
    pub today: String,
    /// Show only yesterday's entries.
    pub yesterday: bool,
    /// Include today's entries as well.
    pub include_today: bool,
    /// Maximum number of dates shown.
    pub max_dates: usize,
    /// Output as JSON.
    pub json: bool,
}

/// Output of the review command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOutput {
    pub success: bool,
    pub days: DayGroups,
    /// The date the presentation layer should default-expand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReviewOutput {
    fn success(days: DayGroups) -> Self {
        let latest = days.latest().map(String::from);
        Self {
            success: true,
            days,
            latest,
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            days: DayGroups::default(),
            latest: None,
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Review failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        if self.days.is_empty() {
            return "No previous days yet.".to_string();
        }

        let mut lines = vec![format!("Past days ({} shown):", self.days.len())];
        for group in &self.days.groups {
            let marker = if Some(group.date.as_str()) == self.latest.as_deref() {
                "▾"
            } else {
                "▸"
            };
            lines.push(format!(
                "{} {} — {} min · effort {:.2} · {} language{}",
                marker,
                group.date,
                group.stats.total_minutes,
                group.stats.avg_effort,
                group.stats.unique_languages,
                if group.stats.unique_languages == 1 {
                    ""
                } else {
                    "s"
                }
            ));
        }

        lines.join("\n")
    }
}

/// The review command implementation.
pub struct ReviewCommand<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> ReviewCommand<S> {
    /// Create a new review command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the review command.
    pub fn run(&self, options: &ReviewOptions) -> ReviewOutput {
        match self.group(options) {
            Ok(days) => ReviewOutput::success(days),
            Err(e) => ReviewOutput::failure(format!("could not read history: {}", e)),
        }
    }

    fn group(&self, options: &ReviewOptions) -> Result<DayGroups> {
        let entries = self.store.list_entries(&EntryQuery::default())?;

        let mut group_options = GroupOptions {
            exclude_today: !options.include_today,
            only_date: None,
            max_dates: options.max_dates,
        };
        if options.yesterday {
            group_options.only_date = previous_day(&options.today);
        }

        Ok(group_by_day(&entries, &options.today, &group_options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryDraft;
    use crate::storage::MemoryStore;
    use crate::stats::DEFAULT_MAX_DATES;
    use std::sync::Arc;

    fn store_with_history() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for (date, lang, minutes) in [
            ("2025-01-10", "fr", 15),
            ("2025-01-09", "fr", 30),
            ("2025-01-09", "pt", 60),
            ("2025-01-07", "bg", 20),
        ] {
            store
                .put_entry(&EntryDraft::new(date, lang).minutes(minutes).effort(3).create(0))
                .unwrap();
        }
        store
    }

    fn options() -> ReviewOptions {
        ReviewOptions {
            today: "2025-01-10".to_string(),
            yesterday: false,
            include_today: false,
            max_dates: DEFAULT_MAX_DATES,
            json: false,
        }
    }

    #[test]
    fn test_review_excludes_today() {
        let cmd = ReviewCommand::new(store_with_history());
        let output = cmd.run(&options());

        assert!(output.success);
        let dates: Vec<&str> = output.days.groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-09", "2025-01-07"]);
        assert_eq!(output.latest.as_deref(), Some("2025-01-09"));
    }

    #[test]
    fn test_review_include_today() {
        let cmd = ReviewCommand::new(store_with_history());
        let mut opts = options();
        opts.include_today = true;
        let output = cmd.run(&opts);

        assert_eq!(output.days.len(), 3);
        assert_eq!(output.latest.as_deref(), Some("2025-01-10"));
    }

    #[test]
    fn test_review_yesterday_only() {
        let cmd = ReviewCommand::new(store_with_history());
        let mut opts = options();
        opts.yesterday = true;
        let output = cmd.run(&opts);

        assert_eq!(output.days.len(), 1);
        assert_eq!(output.days.groups[0].date, "2025-01-09");
        assert_eq!(output.days.groups[0].stats.total_minutes, 90);
    }

    #[test]
    fn test_review_max_dates() {
        let cmd = ReviewCommand::new(store_with_history());
        let mut opts = options();
        opts.max_dates = 1;
        let output = cmd.run(&opts);

        assert_eq!(output.days.len(), 1);
        assert_eq!(output.latest.as_deref(), Some("2025-01-09"));
    }

    #[test]
    fn test_review_empty_store() {
        let cmd = ReviewCommand::new(Arc::new(MemoryStore::new()));
        let output = cmd.run(&options());

        assert!(output.success);
        assert!(output.days.is_empty());
        assert!(output.format_text().contains("No previous days yet"));
    }

    #[test]
    fn test_format_text_marks_latest() {
        let cmd = ReviewCommand::new(store_with_history());
        let text = cmd.run(&options()).format_text();

        assert!(text.contains("▾ 2025-01-09"));
        assert!(text.contains("▸ 2025-01-07"));
        assert!(text.contains("2 languages"));
    }
}

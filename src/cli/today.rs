//! Today command: the daily review.
//!
//! Shows today's entries with the day summary (total minutes, average
//! effort, average minutes per language), joining language names from the
//! portfolio.

use serde::{Deserialize, Serialize};

use crate::core::{effort_label, Entry, Snapshot};
use crate::error::Result;
use crate::stats::{aggregate, Summary};
use crate::storage::{EntryQuery, SnapshotStore};

/// Options for the today command.
#[derive(Debug, Clone, Default)]
pub struct TodayOptions {
    /// The day to review, "YYYY-MM-DD".
    pub date: String,
    /// Output as JSON.
    pub json: bool,
}

/// One entry with its language's display fields resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLine {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub minutes: u32,
    pub effort: u8,
    pub effort_label: String,
    pub content: String,
}

/// Output of the today command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayOutput {
    pub success: bool,
    pub date: String,
    pub stats: Summary,
    pub lines: Vec<ReviewLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TodayOutput {
    fn success(date: String, stats: Summary, lines: Vec<ReviewLine>) -> Self {
        Self {
            success: true,
            date,
            stats,
            lines,
            error: None,
        }
    }

    fn failure(date: String, error: impl Into<String>) -> Self {
        Self {
            success: false,
            date,
            stats: Summary::default(),
            lines: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Today failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        let mut lines = vec![format!("Today — {}", self.date)];
        lines.push(format!(
            "  {} min total · avg effort {:.2} · {:.1} min/language",
            self.stats.total_minutes, self.stats.avg_effort, self.stats.avg_minutes_per_language
        ));

        if self.lines.is_empty() {
            lines.push("  No entries today (yet).".to_string());
        }

        for line in &self.lines {
            let emoji = line.emoji.as_deref().unwrap_or("🌍");
            lines.push(format!(
                "  {} {} — {} min · effort {} ({})",
                emoji, line.language, line.minutes, line.effort, line.effort_label
            ));
            if !line.content.trim().is_empty() {
                lines.push(format!("      {}", line.content.trim()));
            }
        }

        lines.join("\n")
    }
}

/// The today command implementation.
pub struct TodayCommand<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> TodayCommand<S> {
    /// Create a new today command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the today command.
    pub fn run(&self, options: &TodayOptions) -> TodayOutput {
        match self.load(&options.date) {
            Ok(snapshot) => {
                let stats = aggregate(&snapshot.entries);
                let lines = resolve_lines(&snapshot, &snapshot.entries);
                TodayOutput::success(options.date.clone(), stats, lines)
            }
            Err(e) => TodayOutput::failure(options.date.clone(), e.to_string()),
        }
    }

    fn load(&self, date: &str) -> Result<Snapshot> {
        self.store.snapshot(&EntryQuery::on(date))
    }
}

fn resolve_lines(snapshot: &Snapshot, entries: &[Entry]) -> Vec<ReviewLine> {
    let by_id = snapshot.language_by_id();
    entries
        .iter()
        .map(|entry| {
            let language = by_id.get(entry.language_id.as_str());
            ReviewLine {
                language: language
                    .map(|l| l.name.clone())
                    .unwrap_or_else(|| "Unknown language".to_string()),
                emoji: language.and_then(|l| l.emoji.clone()),
                minutes: entry.minutes,
                effort: entry.effort,
                effort_label: effort_label(entry.effort).to_string(),
                content: entry.content.clone(),
            }
        })
        .collect()
}

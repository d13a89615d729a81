//! Languages command: the portfolio view.
//!
//! Shows every language grouped by maturity bucket, the currently-learning
//! subset, and the all-time summary over every entry in the store.

use serde::{Deserialize, Serialize};

use crate::core::{Language, MaturityBuckets, Snapshot};
use crate::error::Result;
use crate::stats::{aggregate, Summary};
use crate::storage::{EntryQuery, SnapshotStore};

/// Options for the languages command.
#[derive(Debug, Clone, Default)]
pub struct LanguagesOptions {
    /// Output as JSON.
    pub json: bool,
}

/// One bucket of the portfolio for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketView {
    pub label: String,
    pub languages: Vec<LanguageView>,
}

/// Display fields for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub is_learning: bool,
}

impl From<&Language> for LanguageView {
    fn from(language: &Language) -> Self {
        Self {
            name: language.name.clone(),
            emoji: language.emoji.clone(),
            level: language.level.clone(),
            is_learning: language.is_learning,
        }
    }
}

/// Output of the languages command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesOutput {
    pub success: bool,
    pub buckets: Vec<BucketView>,
    pub stats: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LanguagesOutput {
    fn success(buckets: Vec<BucketView>, stats: Summary) -> Self {
        Self {
            success: true,
            buckets,
            stats,
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            buckets: Vec::new(),
            stats: Summary::default(),
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Languages failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        let mut lines = vec![format!(
            "All time: {} entries · {} min · {} days · avg effort {:.2}",
            self.stats.total_entries,
            self.stats.total_minutes,
            self.stats.unique_dates,
            self.stats.avg_effort
        )];

        for bucket in &self.buckets {
            if bucket.languages.is_empty() {
                continue;
            }
            lines.push(format!("{}:", bucket.label));
            for lang in &bucket.languages {
                let emoji = lang.emoji.as_deref().unwrap_or("🌍");
                let mut line = format!("  {} {}", emoji, lang.name);
                if let Some(level) = &lang.level {
                    line.push_str(&format!(" ({})", level));
                }
                if lang.is_learning {
                    line.push_str(" · learning");
                }
                lines.push(line);
            }
        }

        if lines.len() == 1 {
            lines.push("No languages yet.".to_string());
        }

        lines.join("\n")
    }
}

/// The languages command implementation.
pub struct LanguagesCommand<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> LanguagesCommand<S> {
    /// Create a new languages command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the languages command.
    pub fn run(&self, _options: &LanguagesOptions) -> LanguagesOutput {
        match self.load() {
            Ok(snapshot) => {
                let stats = aggregate(&snapshot.entries);
                let buckets = bucket_views(&snapshot.buckets());
                LanguagesOutput::success(buckets, stats)
            }
            Err(e) => LanguagesOutput::failure(format!("could not read portfolio: {}", e)),
        }
    }

    fn load(&self) -> Result<Snapshot> {
        self.store.snapshot(&EntryQuery::default())
    }
}

fn bucket_views(buckets: &MaturityBuckets) -> Vec<BucketView> {
    buckets
        .iter_labeled()
        .map(|(label, languages)| BucketView {
            label: label.to_string(),
            languages: languages.iter().map(LanguageView::from).collect(),
        })
        .collect()
}

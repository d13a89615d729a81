//! Log command: write, update, or delete one day's entry for a language.
//!
//! Writes go through the natural-key upsert: logging twice for the same
//! language and day updates the existing entry in place. `--delete` removes
//! the keyed record instead. Admin-gated, like the lang command.

use serde::{Deserialize, Serialize};

use crate::auth::AdminGate;
use crate::core::{entry_id, Entry, EntryDraft};
use crate::error::Result;
use crate::storage::SnapshotStore;

/// Options for the log command.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Day to log, "YYYY-MM-DD".
    pub date: String,
    /// Language to log against.
    pub language_id: String,
    /// Session note.
    pub content: String,
    /// Minutes spent.
    pub minutes: i64,
    /// Effort rating.
    pub effort: i64,
    /// Delete the keyed entry instead of writing it.
    pub delete: bool,
    /// Caller's subject id for the admin gate.
    pub subject: Option<String>,
    /// Output as JSON.
    pub json: bool,
}

/// Output of the log command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogOutput {
    pub success: bool,
    /// The stored entry after the write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,
    /// Whether the write updated an existing entry.
    pub updated: bool,
    /// Whether the entry was deleted instead of written.
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogOutput {
    fn saved(entry: Entry, updated: bool) -> Self {
        Self {
            success: true,
            entry: Some(entry),
            updated,
            deleted: false,
            error: None,
        }
    }

    fn deleted(entry: Entry) -> Self {
        Self {
            success: true,
            entry: Some(entry),
            updated: false,
            deleted: true,
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            entry: None,
            updated: false,
            deleted: false,
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        match (&self.entry, &self.error) {
            (Some(entry), _) if self.deleted => format!("Deleted {}", entry.id),
            (Some(entry), _) => {
                let verb = if self.updated { "Updated" } else { "Logged" };
                format!(
                    "{} {}: {} min, effort {} ({})",
                    verb, entry.id, entry.minutes, entry.effort, entry.date
                )
            }
            (None, Some(error)) => format!("Log failed: {}", error),
            (None, None) => "Log failed: unknown error".to_string(),
        }
    }
}

/// The log command implementation.
pub struct LogCommand<S: SnapshotStore> {
    store: S,
    gate: AdminGate,
}

impl<S: SnapshotStore> LogCommand<S> {
    /// Create a new log command.
    pub fn new(store: S, gate: AdminGate) -> Self {
        Self { store, gate }
    }

    /// Run the log command.
    pub fn run(&self, options: &LogOptions, now: i64) -> LogOutput {
        if !self.gate.permits(options.subject.as_deref()) {
            return LogOutput::failure("only the admin may write entries");
        }

        if options.delete {
            return match self.remove(options) {
                Ok(Some(entry)) => LogOutput::deleted(entry),
                Ok(None) => LogOutput::failure(format!(
                    "no entry for {}",
                    entry_id(&options.date, &options.language_id)
                )),
                Err(e) => LogOutput::failure(format!("could not delete entry: {}", e)),
            };
        }

        match self.write(options, now) {
            Ok((entry, updated)) => LogOutput::saved(entry, updated),
            Err(e) => LogOutput::failure(format!("could not save entry: {}", e)),
        }
    }

    fn remove(&self, options: &LogOptions) -> Result<Option<Entry>> {
        let id = entry_id(&options.date, &options.language_id);
        match self.store.get_entry(&id)? {
            Some(entry) => {
                self.store.delete_entry(&id)?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    fn write(&self, options: &LogOptions, now: i64) -> Result<(Entry, bool)> {
        let draft = EntryDraft::new(&options.date, &options.language_id)
            .content(&options.content)
            .minutes(options.minutes)
            .effort(options.effort);

        let existed = self.store.get_entry(&draft.id())?.is_some();
        let entry = self.store.upsert_entry(&draft, now)?;
        Ok((entry, existed))
    }
}

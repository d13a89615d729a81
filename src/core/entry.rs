//! Study entries.
//!
//! One entry records one day's study of one language: minutes spent, an
//! effort rating 1..5, and a free-text note. The pair (date, language id)
//! is a natural key: the document id is always `"{date}_{language_id}"`,
//! so a second save for the same day and language is an upsert, never a
//! second entity.

use serde::{Deserialize, Serialize};

/// Effort ratings are clamped into this range on write.
pub const MIN_EFFORT: u8 = 1;
/// Upper bound of the effort scale.
pub const MAX_EFFORT: u8 = 5;

/// Compute the natural document id for a (date, language) pair.
pub fn entry_id(date: &str, language_id: &str) -> String {
    format!("{}_{}", date, language_id)
}

/// A logged study session for one language on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// Document id, always `"{date}_{language_id}"`.
    pub id: String,
    /// Calendar date as a zero-padded ISO string, "YYYY-MM-DD".
    pub date: String,
    /// Id of the language studied.
    pub language_id: String,
    /// Free-text note about the session.
    pub content: String,
    /// Minutes spent.
    pub minutes: u32,
    /// Effort rating, 1..=5.
    pub effort: u8,
    /// When the entry was first saved (epoch milliseconds).
    pub created_at: i64,
    /// When the entry was last saved (epoch milliseconds).
    pub updated_at: i64,
}

/// Write-side shape of an entry, before sanitization and timestamps.
///
/// Out-of-range numbers are coerced rather than rejected, matching the
/// journal's forgiving write policy: negative minutes become 0, effort is
/// clamped into 1..=5 with 0 treated as "not set" and defaulted to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: String,
    pub language_id: String,
    pub content: String,
    pub minutes: i64,
    pub effort: i64,
}

impl EntryDraft {
    /// Create a draft for a (date, language) pair.
    pub fn new(date: impl Into<String>, language_id: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            language_id: language_id.into(),
            content: String::new(),
            minutes: 0,
            effort: MIN_EFFORT as i64,
        }
    }

    /// Set the session note.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set minutes spent.
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Set the effort rating.
    pub fn effort(mut self, effort: i64) -> Self {
        self.effort = effort;
        self
    }

    /// The natural document id this draft writes to.
    pub fn id(&self) -> String {
        entry_id(&self.date, &self.language_id)
    }

    fn sanitized_minutes(&self) -> u32 {
        self.minutes.clamp(0, u32::MAX as i64) as u32
    }

    fn sanitized_effort(&self) -> u8 {
        if self.effort <= 0 {
            MIN_EFFORT
        } else {
            self.effort.min(MAX_EFFORT as i64) as u8
        }
    }

    /// Materialize a brand-new entry; both timestamps are set to `now`.
    pub fn create(&self, now: i64) -> Entry {
        Entry {
            id: self.id(),
            date: self.date.clone(),
            language_id: self.language_id.clone(),
            content: self.content.clone(),
            minutes: self.sanitized_minutes(),
            effort: self.sanitized_effort(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Materialize an upsert over an existing entry with the same key.
    ///
    /// `created_at` is carried forward from the first write; `updated_at`
    /// becomes `now`.
    pub fn apply_to(&self, existing: &Entry, now: i64) -> Entry {
        let mut entry = self.create(now);
        entry.created_at = existing.created_at;
        entry
    }
}

//! Document store traits for Lingo.
//!
//! The journal reads full snapshots from, and issues keyed writes to, an
//! external key/value document store. This module defines that contract.
//! Entry writes go through [`SnapshotStore::upsert_entry`], which enforces
//! the natural-key upsert semantics: one logical entry per language per day,
//! `created_at` preserved across rewrites.

use std::sync::Arc;

use crate::core::{Entry, EntryDraft, Language, Snapshot};
use crate::error::Result;

/// Filters for reading entries.
///
/// `only_date` retains entries on one exact date. Without it, entries come
/// back ordered by date descending, truncated to `limit` when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryQuery {
    pub only_date: Option<String>,
    pub limit: Option<usize>,
}

impl EntryQuery {
    /// Query for one exact date.
    pub fn on(date: impl Into<String>) -> Self {
        Self {
            only_date: Some(date.into()),
            limit: None,
        }
    }

    /// Query for the most recent entries, newest first.
    pub fn recent(limit: usize) -> Self {
        Self {
            only_date: None,
            limit: Some(limit),
        }
    }
}

/// Trait for journal document stores.
///
/// Writes are last-write-wins on the document id; the store performs no
/// conflict resolution beyond that. Callers must treat a subsequent
/// snapshot read as the sole source of truth after any write.
pub trait SnapshotStore: Send + Sync {
    /// List all language records.
    fn list_languages(&self) -> Result<Vec<Language>>;

    /// Read one language by id, `Ok(None)` if absent.
    fn get_language(&self, id: &str) -> Result<Option<Language>>;

    /// Read one entry by its natural key, `Ok(None)` if absent.
    fn get_entry(&self, id: &str) -> Result<Option<Entry>>;

    /// List entries matching the query, ordered by date descending.
    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>>;

    /// Create or replace a language record keyed by its id.
    fn put_language(&self, language: &Language) -> Result<()>;

    /// Create or replace an entry keyed by its id.
    fn put_entry(&self, entry: &Entry) -> Result<()>;

    /// Delete a language. Succeeds even if the id is unknown.
    fn delete_language(&self, id: &str) -> Result<()>;

    /// Delete an entry. Succeeds even if the id is unknown.
    fn delete_entry(&self, id: &str) -> Result<()>;

    /// Upsert an entry draft under its natural key.
    ///
    /// A first write for a (date, language) pair creates the entry with
    /// both timestamps set to `now`; a later write replaces the fields but
    /// carries the original `created_at` forward. Returns the stored entry.
    fn upsert_entry(&self, draft: &EntryDraft, now: i64) -> Result<Entry> {
        let entry = match self.get_entry(&draft.id())? {
            Some(existing) => draft.apply_to(&existing, now),
            None => draft.create(now),
        };
        self.put_entry(&entry)?;
        Ok(entry)
    }

    /// Read a full snapshot: all languages plus entries matching the query.
    fn snapshot(&self, query: &EntryQuery) -> Result<Snapshot> {
        Ok(Snapshot::new(
            self.list_languages()?,
            self.list_entries(query)?,
        ))
    }
}

/// Blanket implementation for Arc-wrapped stores, so `Arc<T>` can be used
/// wherever a store is expected (shared between commands and tests).
impl<T: SnapshotStore + ?Sized> SnapshotStore for Arc<T> {
    fn list_languages(&self) -> Result<Vec<Language>> {
        (**self).list_languages()
    }

    fn get_language(&self, id: &str) -> Result<Option<Language>> {
        (**self).get_language(id)
    }

    fn get_entry(&self, id: &str) -> Result<Option<Entry>> {
        (**self).get_entry(id)
    }

    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>> {
        (**self).list_entries(query)
    }

    fn put_language(&self, language: &Language) -> Result<()> {
        (**self).put_language(language)
    }

    fn put_entry(&self, entry: &Entry) -> Result<()> {
        (**self).put_entry(entry)
    }

    fn delete_language(&self, id: &str) -> Result<()> {
        (**self).delete_language(id)
    }

    fn delete_entry(&self, id: &str) -> Result<()> {
        (**self).delete_entry(id)
    }
}

//! In-memory document store for testing.
//!
//! Thread-safe implementation of [`SnapshotStore`] over `RwLock<HashMap>`,
//! used by unit tests and as a stand-in store for commands.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::{Entry, Language};
use crate::error::Result;
use crate::storage::traits::{EntryQuery, SnapshotStore};

/// In-memory store. Documents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    languages: RwLock<HashMap<String, Language>>,
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn entry_count(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Number of stored languages.
    pub fn language_count(&self) -> usize {
        self.languages.read().unwrap().len()
    }

    /// Remove all documents.
    pub fn clear(&self) {
        self.languages.write().unwrap().clear();
        self.entries.write().unwrap().clear();
    }
}

impl SnapshotStore for MemoryStore {
    fn list_languages(&self) -> Result<Vec<Language>> {
        let languages = self.languages.read().unwrap();
        let mut result: Vec<Language> = languages.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    fn get_language(&self, id: &str) -> Result<Option<Language>> {
        let languages = self.languages.read().unwrap();
        Ok(languages.get(id).cloned())
    }

    fn get_entry(&self, id: &str) -> Result<Option<Entry>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(id).cloned())
    }

    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>> {
        let entries = self.entries.read().unwrap();
        let mut result: Vec<Entry> = match &query.only_date {
            Some(date) => entries.values().filter(|e| e.date == *date).cloned().collect(),
            None => entries.values().cloned().collect(),
        };

        // Newest date first; id as tiebreaker for a stable order.
        result.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        if let Some(limit) = query.limit {
            result.truncate(limit);
        }

        Ok(result)
    }

    fn put_language(&self, language: &Language) -> Result<()> {
        let mut languages = self.languages.write().unwrap();
        languages.insert(language.id.clone(), language.clone());
        Ok(())
    }

    fn put_entry(&self, entry: &Entry) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(entry.id.clone(), entry.clone());
        Ok(())
    }

    fn delete_language(&self, id: &str) -> Result<()> {
        let mut languages = self.languages.write().unwrap();
        languages.remove(id);
        Ok(())
    }

    fn delete_entry(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(id);
        Ok(())
    }
}

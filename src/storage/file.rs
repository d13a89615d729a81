//! File-based document store.
//!
//! Documents are stored one JSON file per record under
//! `<data_dir>/languages/` and `<data_dir>/entries/`, keyed by document id.
//! Atomic writes use the temp file + rename pattern. Listing is lenient:
//! temp files and unparsable documents are skipped with a warning rather
//! than failing the whole read, so one corrupt file never blanks a view.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::data_dir;
use crate::core::{Entry, Language};
use crate::error::{JournalError, Result};
use crate::storage::traits::{EntryQuery, SnapshotStore};

/// File-backed implementation of [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    languages_dir: PathBuf,
    entries_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the default data directory
    /// (`$LINGO_HOME` or `~/.lingo`).
    pub fn new() -> Result<Self> {
        let dir = data_dir().ok_or_else(|| {
            JournalError::config("could not determine data directory (no home directory)")
        })?;
        Self::with_dir(dir)
    }

    /// Create a store rooted at a custom directory.
    pub fn with_dir(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let languages_dir = root.join("languages");
        let entries_dir = root.join("entries");

        for dir in [&languages_dir, &entries_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| JournalError::storage(dir, e))?;
            }
        }

        Ok(Self {
            languages_dir,
            entries_dir,
        })
    }

    fn doc_path(dir: &Path, id: &str) -> PathBuf {
        dir.join(format!("{}.json", id))
    }

    fn temp_path(dir: &Path, id: &str) -> PathBuf {
        dir.join(format!(".{}.json.tmp", id))
    }

    /// Write a document atomically via temp file + rename.
    fn atomic_write<T: Serialize>(dir: &Path, id: &str, doc: &T) -> Result<()> {
        let final_path = Self::doc_path(dir, id);
        let temp_path = Self::temp_path(dir, id);

        let json = serde_json::to_string_pretty(doc)?;

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| JournalError::storage(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| JournalError::storage(&temp_path, e))?;
            file.sync_all()
                .map_err(|e| JournalError::storage(&temp_path, e))?;
        }

        // Atomic on POSIX; the replaced document wins wholesale.
        fs::rename(&temp_path, &final_path).map_err(|e| JournalError::storage(&final_path, e))?;

        Ok(())
    }

    fn read_doc<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| JournalError::storage(path, e))?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn list_docs<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();
        let entries = fs::read_dir(dir).map_err(|e| JournalError::storage(dir, e))?;

        for dirent in entries {
            let dirent = dirent.map_err(|e| JournalError::storage(dir, e))?;
            let path = dirent.path();

            // Skip temp files and anything that isn't a JSON document.
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            if path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with('.'))
                .unwrap_or(true)
            {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<T>(&content) {
                    Ok(doc) => docs.push(doc),
                    Err(err) => {
                        tracing::warn!("skipping unparsable document {}: {}", path.display(), err);
                    }
                },
                Err(err) => {
                    tracing::warn!("skipping unreadable document {}: {}", path.display(), err);
                }
            }
        }

        Ok(docs)
    }

    fn delete_doc(dir: &Path, id: &str) -> Result<()> {
        let path = Self::doc_path(dir, id);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| JournalError::storage(&path, e))?;
        }

        let temp_path = Self::temp_path(dir, id);
        if temp_path.exists() {
            let _ = fs::remove_file(&temp_path);
        }

        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn list_languages(&self) -> Result<Vec<Language>> {
        let mut languages: Vec<Language> = Self::list_docs(&self.languages_dir)?;
        languages.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(languages)
    }

    fn get_language(&self, id: &str) -> Result<Option<Language>> {
        Self::read_doc(&Self::doc_path(&self.languages_dir, id))
    }

    fn get_entry(&self, id: &str) -> Result<Option<Entry>> {
        Self::read_doc(&Self::doc_path(&self.entries_dir, id))
    }

    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = Self::list_docs(&self.entries_dir)?;

        if let Some(date) = &query.only_date {
            entries.retain(|e| e.date == *date);
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        if let Some(limit) = query.limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }

    fn put_language(&self, language: &Language) -> Result<()> {
        Self::atomic_write(&self.languages_dir, &language.id, language)
    }

    fn put_entry(&self, entry: &Entry) -> Result<()> {
        Self::atomic_write(&self.entries_dir, &entry.id, entry)
    }

    fn delete_language(&self, id: &str) -> Result<()> {
        Self::delete_doc(&self.languages_dir, id)
    }

    fn delete_entry(&self, id: &str) -> Result<()> {
        Self::delete_doc(&self.entries_dir, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryDraft;
    use crate::storage::traits::tests::test_snapshot_store_contract;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_dir(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_file_store_contract() {
        let (store, _dir) = create_test_store();
        test_snapshot_store_contract(&store);
    }

    #[test]
    fn test_with_dir_creates_subdirectories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("journal");

        let _store = FileStore::with_dir(&root).unwrap();

        assert!(root.join("languages").is_dir());
        assert!(root.join("entries").is_dir());
    }

    #[test]
    fn test_documents_are_valid_json_on_disk() {
        let (store, dir) = create_test_store();

        let entry = EntryDraft::new("2025-01-10", "fr").minutes(30).create(1000);
        store.put_entry(&entry).unwrap();

        let path = dir.path().join("entries").join("2025-01-10_fr.json");
        let content = fs::read_to_string(&path).unwrap();
        let parsed: Entry = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_temp_file_cleaned_up_after_write() {
        let (store, dir) = create_test_store();

        let entry = EntryDraft::new("2025-01-10", "fr").create(0);
        store.put_entry(&entry).unwrap();

        let temp = dir.path().join("entries").join(".2025-01-10_fr.json.tmp");
        assert!(!temp.exists());
    }

    #[test]
    fn test_list_skips_unparsable_documents() {
        let (store, dir) = create_test_store();

        store
            .put_entry(&EntryDraft::new("2025-01-10", "fr").create(0))
            .unwrap();
        fs::write(dir.path().join("entries").join("broken.json"), "not json").unwrap();

        let entries = store.list_entries(&EntryQuery::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "2025-01-10_fr");
    }

    #[test]
    fn test_list_skips_temp_files() {
        let (store, dir) = create_test_store();

        store
            .put_entry(&EntryDraft::new("2025-01-10", "fr").create(0))
            .unwrap();
        fs::write(dir.path().join("entries").join(".x.json.tmp"), "{}").unwrap();

        let entries = store.list_entries(&EntryQuery::default()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_get_nonexistent_entry() {
        let (store, _dir) = create_test_store();
        assert!(store.get_entry("2025-01-10_fr").unwrap().is_none());
    }

    #[test]
    fn test_delete_nonexistent_succeeds() {
        let (store, _dir) = create_test_store();
        store.delete_entry("nope").unwrap();
        store.delete_language("nope").unwrap();
    }

    #[test]
    fn test_upsert_across_store_instances() {
        // created_at survives even when the second write comes from a fresh
        // store handle over the same directory.
        let dir = TempDir::new().unwrap();

        let store = FileStore::with_dir(dir.path()).unwrap();
        let draft = EntryDraft::new("2025-01-10", "fr").minutes(30).effort(3);
        store.upsert_entry(&draft, 1000).unwrap();

        let store = FileStore::with_dir(dir.path()).unwrap();
        let draft = EntryDraft::new("2025-01-10", "fr").minutes(45).effort(4);
        let updated = store.upsert_entry(&draft, 2000).unwrap();

        assert_eq!(updated.created_at, 1000);
        assert_eq!(updated.updated_at, 2000);
        assert_eq!(updated.minutes, 45);
    }
}

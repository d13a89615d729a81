//! Immutable snapshot of the journal.
//!
//! All derived views (summaries, day groups, maturity buckets) are computed
//! from a full snapshot of languages and entries read from the store. There
//! is no incremental update: every refresh recomputes from scratch, and an
//! empty or partial snapshot yields empty views rather than errors.
//!
//! Classification happens once, here at the data boundary; consumers work
//! with already-classified profiles instead of re-deriving buckets inline.

use std::collections::HashMap;

use crate::core::entry::Entry;
use crate::core::language::Language;
use crate::core::maturity::{Maturity, MaturityBuckets};

/// A read-only view of the current languages and entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub languages: Vec<Language>,
    pub entries: Vec<Entry>,
}

/// A language paired with its maturity tier, classified once per snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    pub language: Language,
    pub maturity: Maturity,
}

impl Snapshot {
    /// Create a snapshot from raw language and entry lists.
    pub fn new(languages: Vec<Language>, entries: Vec<Entry>) -> Self {
        Self { languages, entries }
    }

    /// Index languages by id for display joins.
    pub fn language_by_id(&self) -> HashMap<&str, &Language> {
        self.languages.iter().map(|l| (l.id.as_str(), l)).collect()
    }

    /// Languages currently under active study.
    pub fn learning(&self) -> Vec<&Language> {
        self.languages.iter().filter(|l| l.is_learning).collect()
    }

    /// Classify every language once and return the profiles.
    pub fn profiles(&self) -> Vec<LanguageProfile> {
        self.languages
            .iter()
            .map(|l| LanguageProfile {
                language: l.clone(),
                maturity: Maturity::classify(l),
            })
            .collect()
    }

    /// Group the portfolio into maturity buckets.
    pub fn buckets(&self) -> MaturityBuckets {
        MaturityBuckets::build(&self.languages)
    }

    /// Entries for one exact date.
    pub fn entries_on(&self, date: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::EntryDraft;

    fn snapshot() -> Snapshot {
        let languages = vec![
            Language::new("en", "English").native(),
            Language::new("bg", "Bulgarian").with_level("A2").learning(),
            Language::new("fr", "Français").with_level("C1"),
        ];
        let entries = vec![
            EntryDraft::new("2025-01-10", "bg").minutes(30).create(0),
            EntryDraft::new("2025-01-09", "bg").minutes(20).create(0),
            EntryDraft::new("2025-01-10", "fr").minutes(15).create(0),
        ];
        Snapshot::new(languages, entries)
    }

    #[test]
    fn test_empty_snapshot_is_safe() {
        let snap = Snapshot::default();
        assert!(snap.profiles().is_empty());
        assert!(snap.buckets().is_empty());
        assert!(snap.learning().is_empty());
        assert!(snap.entries_on("2025-01-10").is_empty());
    }

    #[test]
    fn test_language_by_id() {
        let snap = snapshot();
        let index = snap.language_by_id();
        assert_eq!(index.get("bg").unwrap().name, "Bulgarian");
        assert!(!index.contains_key("xx"));
    }

    #[test]
    fn test_learning_filter() {
        let snap = snapshot();
        let learning = snap.learning();
        assert_eq!(learning.len(), 1);
        assert_eq!(learning[0].id, "bg");
    }

    #[test]
    fn test_profiles_classified_once() {
        let snap = snapshot();
        let profiles = snap.profiles();
        assert_eq!(profiles.len(), 3);
        let by_id: HashMap<&str, Maturity> = profiles
            .iter()
            .map(|p| (p.language.id.as_str(), p.maturity))
            .collect();
        assert_eq!(by_id["en"], Maturity::Native);
        assert_eq!(by_id["bg"], Maturity::Kid);
        assert_eq!(by_id["fr"], Maturity::Grown);
    }

    #[test]
    fn test_entries_on_date() {
        let snap = snapshot();
        let on_tenth = snap.entries_on("2025-01-10");
        assert_eq!(on_tenth.len(), 2);
    }
}

//! Maturity classification for languages.
//!
//! Languages are bucketed by how grown-up they are: natives, grown-ups
//! (B2–C2), teens (B1), kids (A2), babies (A1/A0), and newborns with no
//! usable level yet. The native flag always wins over the level label.

use serde::{Deserialize, Serialize};

use crate::core::language::Language;
use crate::core::level::CefrLevel;

/// Maturity tier of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    Native,
    Grown,
    Teen,
    Kid,
    Baby,
    Unknown,
}

impl Maturity {
    /// Classify a language record into its maturity tier.
    ///
    /// Priority order: the native flag first (level is ignored), then the
    /// normalized CEFR level, then `Unknown` for missing or unrecognized
    /// labels. Unrecognized labels never error; they land in `Unknown`.
    pub fn classify(language: &Language) -> Self {
        if language.native {
            return Self::Native;
        }

        let level = language.level.as_deref().and_then(CefrLevel::from_label);
        match level {
            Some(CefrLevel::B2) | Some(CefrLevel::C1) | Some(CefrLevel::C2) => Self::Grown,
            Some(CefrLevel::B1) => Self::Teen,
            Some(CefrLevel::A2) => Self::Kid,
            Some(CefrLevel::A1) | Some(CefrLevel::A0) => Self::Baby,
            None => Self::Unknown,
        }
    }

    /// Display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Grown => "grown-up",
            Self::Teen => "teen",
            Self::Kid => "kid",
            Self::Baby => "baby",
            Self::Unknown => "newborn",
        }
    }
}

/// A portfolio grouped by maturity tier.
///
/// Built once from a snapshot and handed to consumers; buckets are never
/// re-derived at display sites. A native language appears only in `natives`,
/// even when its stored level would also place it in a level bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaturityBuckets {
    pub natives: Vec<Language>,
    pub grown: Vec<Language>,
    pub teens: Vec<Language>,
    pub kids: Vec<Language>,
    pub babies: Vec<Language>,
    pub newborns: Vec<Language>,
}

impl MaturityBuckets {
    /// Group a set of languages into maturity buckets.
    pub fn build(languages: &[Language]) -> Self {
        let mut buckets = Self::default();

        for language in languages {
            // Classification puts natives in their own bucket before the
            // level is consulted, so the level buckets only ever receive
            // non-native languages and no language is listed twice.
            match Maturity::classify(language) {
                Maturity::Native => buckets.natives.push(language.clone()),
                Maturity::Grown => buckets.grown.push(language.clone()),
                Maturity::Teen => buckets.teens.push(language.clone()),
                Maturity::Kid => buckets.kids.push(language.clone()),
                Maturity::Baby => buckets.babies.push(language.clone()),
                Maturity::Unknown => buckets.newborns.push(language.clone()),
            }
        }

        buckets
    }

    /// Total number of languages across all buckets.
    pub fn len(&self) -> usize {
        self.natives.len()
            + self.grown.len()
            + self.teens.len()
            + self.kids.len()
            + self.babies.len()
            + self.newborns.len()
    }

    /// Check whether no languages were bucketed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate buckets in display order with their labels.
    pub fn iter_labeled(&self) -> impl Iterator<Item = (&'static str, &[Language])> {
        [
            (Maturity::Native.label(), self.natives.as_slice()),
            (Maturity::Grown.label(), self.grown.as_slice()),
            (Maturity::Teen.label(), self.teens.as_slice()),
            (Maturity::Kid.label(), self.kids.as_slice()),
            (Maturity::Baby.label(), self.babies.as_slice()),
            (Maturity::Unknown.label(), self.newborns.as_slice()),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(level: Option<&str>, native: bool) -> Language {
        let mut l = Language::new("x", "X");
        l.level = level.map(String::from);
        l.native = native;
        l
    }

    #[test]
    fn test_native_flag_wins() {
        assert_eq!(Maturity::classify(&lang(None, true)), Maturity::Native);
        assert_eq!(Maturity::classify(&lang(Some("A1"), true)), Maturity::Native);
        assert_eq!(Maturity::classify(&lang(Some("C2"), true)), Maturity::Native);
    }

    #[test]
    fn test_grown_levels() {
        for level in ["B2", "C1", "C2"] {
            assert_eq!(Maturity::classify(&lang(Some(level), false)), Maturity::Grown);
        }
    }

    #[test]
    fn test_teen_kid_baby() {
        assert_eq!(Maturity::classify(&lang(Some("B1"), false)), Maturity::Teen);
        assert_eq!(Maturity::classify(&lang(Some("A2"), false)), Maturity::Kid);
        assert_eq!(Maturity::classify(&lang(Some("A1"), false)), Maturity::Baby);
        assert_eq!(Maturity::classify(&lang(Some("A0"), false)), Maturity::Baby);
        assert_eq!(
            Maturity::classify(&lang(Some("Beginner"), false)),
            Maturity::Baby
        );
    }

    #[test]
    fn test_synonym_levels_classify() {
        assert_eq!(
            Maturity::classify(&lang(Some("Intermediate"), false)),
            Maturity::Teen
        );
        assert_eq!(
            Maturity::classify(&lang(Some("Upper-Intermediate"), false)),
            Maturity::Grown
        );
    }

    #[test]
    fn test_missing_or_unrecognized_is_unknown() {
        assert_eq!(Maturity::classify(&lang(None, false)), Maturity::Unknown);
        assert_eq!(
            Maturity::classify(&lang(Some("xyz123"), false)),
            Maturity::Unknown
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Maturity::Native.label(), "native");
        assert_eq!(Maturity::Grown.label(), "grown-up");
        assert_eq!(Maturity::Teen.label(), "teen");
        assert_eq!(Maturity::Kid.label(), "kid");
        assert_eq!(Maturity::Baby.label(), "baby");
        assert_eq!(Maturity::Unknown.label(), "newborn");
    }

    #[test]
    fn test_buckets_group_each_tier() {
        let langs = vec![
            lang(Some("C1"), false),
            lang(Some("B1"), false),
            lang(Some("A2"), false),
            lang(Some("A1"), false),
            lang(None, false),
            lang(None, true),
        ];
        let buckets = MaturityBuckets::build(&langs);
        assert_eq!(buckets.natives.len(), 1);
        assert_eq!(buckets.grown.len(), 1);
        assert_eq!(buckets.teens.len(), 1);
        assert_eq!(buckets.kids.len(), 1);
        assert_eq!(buckets.babies.len(), 1);
        assert_eq!(buckets.newborns.len(), 1);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_native_with_level_not_duplicated() {
        // A native whose level would also match a bucket must only be listed
        // under natives.
        let langs = vec![lang(Some("C2"), true)];
        let buckets = MaturityBuckets::build(&langs);
        assert_eq!(buckets.natives.len(), 1);
        assert!(buckets.grown.is_empty());
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn test_empty_portfolio() {
        let buckets = MaturityBuckets::build(&[]);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_iter_labeled_order() {
        let buckets = MaturityBuckets::build(&[]);
        let labels: Vec<&str> = buckets.iter_labeled().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec!["native", "grown-up", "teen", "kid", "baby", "newborn"]
        );
    }
}

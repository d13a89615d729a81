//! CEFR level normalization.
//!
//! Proficiency levels are stored as free-form labels. This module maps the
//! labels people actually type ("Intermediate", "upper-intermediate", "b2")
//! onto the canonical CEFR scale. Unrecognized labels pass through verbatim
//! rather than erroring, and classify as newborn downstream.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical CEFR proficiency levels, A0 through C2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A0,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// Parse a raw label into a canonical level.
    ///
    /// Matching is case-insensitive and ignores whitespace and hyphens, so
    /// "Upper-Intermediate", "upper intermediate", and "UPPERINTERMEDIATE"
    /// all map to B2. Returns `None` for labels outside the synonym table.
    pub fn from_label(raw: &str) -> Option<Self> {
        let key: String = raw
            .to_uppercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        match key.as_str() {
            "A0" => Some(Self::A0),
            "A1" | "BEGINNER" => Some(Self::A1),
            "A2" | "ELEMENTARY" | "PREINTERMEDIATE" => Some(Self::A2),
            "B1" | "INTERMEDIATE" => Some(Self::B1),
            "B2" | "UPPERINTERMEDIATE" => Some(Self::B2),
            "C1" | "ADVANCED" | "FLUENT" => Some(Self::C1),
            "C2" | "PROFICIENT" | "NATIVE" => Some(Self::C2),
            _ => None,
        }
    }

    /// The canonical code for this level ("A0".."C2").
    pub fn code(&self) -> &'static str {
        match self {
            Self::A0 => "A0",
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalize an optional raw level label.
///
/// Returns the canonical code when the label is recognizable, the original
/// input unchanged when it is not, and `None` when no label was given.
pub fn normalize_level(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    match CefrLevel::from_label(raw) {
        Some(level) => Some(level.code().to_string()),
        None => Some(raw.to_string()),
    }
}

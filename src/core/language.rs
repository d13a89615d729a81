//! Language records.
//!
//! A language is one row of the portfolio: a display name with optional
//! emoji and badge color, a learning flag, a native flag, and a free-form
//! proficiency level. The level label is not guaranteed canonical; see
//! [`crate::core::level`] for normalization.

use serde::{Deserialize, Serialize};

/// A language in the portfolio.
///
/// `id` is assigned by the document store and immutable. When `native` is
/// set, `level` is irrelevant to classification (it may still be stored).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Language {
    /// Store-assigned document id.
    pub id: String,
    /// Display name, e.g. "Português".
    pub name: String,
    /// Flag emoji, e.g. "🇧🇷".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Optional hex color for badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether this is a native language.
    #[serde(default)]
    pub native: bool,
    /// Whether this language is under active study.
    #[serde(default)]
    pub is_learning: bool,
    /// Free-form proficiency label ("B1", "Intermediate", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Language {
    /// Create a language with just an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: None,
            color: None,
            native: false,
            is_learning: false,
            level: None,
        }
    }

    /// Set the proficiency level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Mark as a native language.
    pub fn native(mut self) -> Self {
        self.native = true;
        self
    }

    /// Mark as under active study.
    pub fn learning(mut self) -> Self {
        self.is_learning = true;
        self
    }

    /// Portfolio sort rank: learning first, then the rest, natives last.
    pub fn sort_rank(&self) -> u8 {
        if self.is_learning {
            0
        } else if self.native {
            2
        } else {
            1
        }
    }
}

/// Sort a portfolio in display order (learning, other, native).
pub fn sort_portfolio(languages: &mut [Language]) {
    languages.sort_by_key(Language::sort_rank);
}

//! Lang command: manage the language portfolio.
//!
//! Admin-gated add/edit/delete of language records. Edits are partial: only
//! the fields given change, everything else is carried over. Output includes
//! the portfolio after the write, in display order (learning, other, native).

use serde::{Deserialize, Serialize};

use crate::auth::AdminGate;
use crate::core::{sort_portfolio, Language};
use crate::error::Result;
use crate::storage::SnapshotStore;

/// A single portfolio mutation.
#[derive(Debug, Clone)]
pub enum LangAction {
    /// Create a new language record. Fails when the id is taken.
    Add {
        id: String,
        name: String,
        emoji: Option<String>,
        color: Option<String>,
        level: Option<String>,
        native: bool,
        learning: bool,
    },
    /// Update fields of an existing record; `None` leaves a field unchanged.
    Edit {
        id: String,
        name: Option<String>,
        emoji: Option<String>,
        color: Option<String>,
        level: Option<String>,
        native: Option<bool>,
        learning: Option<bool>,
    },
    /// Remove a record. Succeeds even if the id is unknown.
    Delete { id: String },
}

impl LangAction {
    fn id(&self) -> &str {
        match self {
            Self::Add { id, .. } | Self::Edit { id, .. } | Self::Delete { id } => id,
        }
    }
}

/// Options for the lang command.
#[derive(Debug, Clone)]
pub struct LangOptions {
    pub action: LangAction,
    /// Caller's subject id for the admin gate.
    pub subject: Option<String>,
    /// Output as JSON.
    pub json: bool,
}

/// Output of the lang command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangOutput {
    pub success: bool,
    /// What happened: "Added", "Updated", or "Deleted".
    pub action: String,
    /// Id of the record the action targeted.
    pub id: String,
    /// The record after the write; `None` for deletes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// The portfolio after the write, in display order.
    pub portfolio: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LangOutput {
    fn saved(
        action: &str,
        id: impl Into<String>,
        language: Option<Language>,
        portfolio: Vec<Language>,
    ) -> Self {
        Self {
            success: true,
            action: action.to_string(),
            id: id.into(),
            language,
            portfolio,
            error: None,
        }
    }

    fn failure(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            action: String::new(),
            id: id.into(),
            language: None,
            portfolio: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Portfolio edit failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        let mut lines = vec![match &self.language {
            Some(language) => format!("{} {} ({})", self.action, language.name, language.id),
            None => format!("{} {}", self.action, self.id),
        }];

        if self.portfolio.is_empty() {
            lines.push("Portfolio is empty.".to_string());
        }
        for lang in &self.portfolio {
            let emoji = lang.emoji.as_deref().unwrap_or("🌍");
            let mut line = format!("  {} {}", emoji, lang.name);
            if let Some(level) = &lang.level {
                line.push_str(&format!(" ({})", level));
            }
            if lang.native {
                line.push_str(" · native");
            }
            if lang.is_learning {
                line.push_str(" · learning");
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}

/// The lang command implementation.
pub struct LangCommand<S: SnapshotStore> {
    store: S,
    gate: AdminGate,
}

impl<S: SnapshotStore> LangCommand<S> {
    /// Create a new lang command.
    pub fn new(store: S, gate: AdminGate) -> Self {
        Self { store, gate }
    }

    /// Run the lang command.
    pub fn run(&self, options: &LangOptions) -> LangOutput {
        if !self.gate.permits(options.subject.as_deref()) {
            return LangOutput::failure(options.action.id(), "only the admin may edit languages");
        }

        match self.apply(&options.action) {
            Ok(output) => output,
            Err(e) => LangOutput::failure(
                options.action.id(),
                format!("could not update portfolio: {}", e),
            ),
        }
    }

    fn apply(&self, action: &LangAction) -> Result<LangOutput> {
        match action {
            LangAction::Add {
                id,
                name,
                emoji,
                color,
                level,
                native,
                learning,
            } => {
                if self.store.get_language(id)?.is_some() {
                    return Ok(LangOutput::failure(
                        id,
                        format!("language {} already exists", id),
                    ));
                }
                let mut language = Language::new(id, name);
                language.emoji = emoji.clone();
                language.color = color.clone();
                language.level = level.clone();
                language.native = *native;
                language.is_learning = *learning;
                self.store.put_language(&language)?;
                self.finish("Added", id, Some(language))
            }

            LangAction::Edit {
                id,
                name,
                emoji,
                color,
                level,
                native,
                learning,
            } => {
                let mut language = match self.store.get_language(id)? {
                    Some(language) => language,
                    None => {
                        return Ok(LangOutput::failure(
                            id,
                            format!("no language with id {}", id),
                        ));
                    }
                };
                if let Some(name) = name {
                    language.name = name.clone();
                }
                if emoji.is_some() {
                    language.emoji = emoji.clone();
                }
                if color.is_some() {
                    language.color = color.clone();
                }
                if level.is_some() {
                    language.level = level.clone();
                }
                if let Some(native) = native {
                    language.native = *native;
                }
                if let Some(learning) = learning {
                    language.is_learning = *learning;
                }
                self.store.put_language(&language)?;
                self.finish("Updated", id, Some(language))
            }

            LangAction::Delete { id } => {
                self.store.delete_language(id)?;
                self.finish("Deleted", id, None)
            }
        }
    }

    fn finish(&self, action: &str, id: &str, language: Option<Language>) -> Result<LangOutput> {
        let mut portfolio = self.store.list_languages()?;
        sort_portfolio(&mut portfolio);
        Ok(LangOutput::saved(action, id, language, portfolio))
    }
}

//! Lingo - a study-tracking journal for language learning.
//!
//! Lingo records per-language, per-day study sessions and derives maturity
//! classifications, summary statistics, date-grouped history, and a
//! validated multi-year learning-plan roadmap from them.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod roadmap;
pub mod stats;
pub mod storage;
pub mod util;

pub use auth::AdminGate;
pub use config::Config;
pub use crate::core::{
    effort_help, effort_label, entry_id, normalize_level, sort_portfolio, CefrLevel, Entry,
    EntryDraft, Language, LanguageProfile, Maturity, MaturityBuckets, Snapshot,
};
pub use error::{Degrade, JournalError, Result};
pub use roadmap::{blueprint, flag_for, LangItem, Roadmap, RoadmapBlock};
pub use stats::{aggregate, group_by_day, DayGroup, DayGroups, GroupOptions, Summary};
pub use storage::{EntryQuery, FileStore, MemoryStore, SnapshotStore};

// CLI commands
pub use cli::{
    LangCommand, LanguagesCommand, LogCommand, ReviewCommand, RoadmapCommand, TodayCommand,
};

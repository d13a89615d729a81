//! Core types and classification logic for Lingo.
//!
//! This module contains the journal's data model (languages, entries,
//! snapshots) and the pure classification path: CEFR level normalization
//! and maturity bucketing.

pub mod effort;
pub mod entry;
pub mod language;
pub mod level;
pub mod maturity;
pub mod snapshot;

pub use effort::{effort_help, effort_label};
pub use entry::{entry_id, Entry, EntryDraft, MAX_EFFORT, MIN_EFFORT};
pub use language::{sort_portfolio, Language};
pub use level::{normalize_level, CefrLevel};
pub use maturity::{Maturity, MaturityBuckets};
pub use snapshot::{LanguageProfile, Snapshot};

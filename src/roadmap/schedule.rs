//! Roadmap schedule types and invariant validation.
//!
//! The roadmap is a statically authored sequence of time-boxed blocks. Each
//! block has an active pool of 2–3 languages, exactly one passive incubation
//! seed, and a maintenance pool. Languages graduate from active study into
//! maintenance only at block boundaries, and the maintenance pool only ever
//! grows.
//!
//! Validation runs once, at construction. An inconsistent schedule is a
//! fatal error: the scheduler refuses to serve it rather than render a plan
//! that contradicts itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};

/// Bounds on the active pool size per block.
pub const MIN_ACTIVE: usize = 2;
/// Upper bound of the active pool.
pub const MAX_ACTIVE: usize = 3;

/// A language slot in a block's active or passive pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangItem {
    /// Language name, e.g. "Bulgarian".
    pub name: String,
    /// Level trajectory or other annotation, e.g. "A2→B2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Scheduled to move into maintenance at the end of this block.
    #[serde(default)]
    pub graduate_at_end: bool,
}

impl LangItem {
    /// Create a plain slot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: None,
            graduate_at_end: false,
        }
    }

    /// Attach a trajectory note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Mark this language for graduation at the block boundary.
    pub fn graduates(mut self) -> Self {
        self.graduate_at_end = true;
        self
    }
}

/// One time-boxed block of the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapBlock {
    /// Machine id, e.g. "2025-2026".
    pub id: String,
    /// Human label, e.g. "Block 1".
    pub title: String,
    /// Date range label, e.g. "Now → Aug 2026".
    pub date_range: String,
    /// Languages under focused study this block (2–3).
    pub active: Vec<LangItem>,
    /// The single passive incubation seed.
    pub passive: LangItem,
    /// Maintenance pool during this block.
    pub maintenance: Vec<String>,
    /// Whether this is the block we are currently in.
    #[serde(default)]
    pub is_current: bool,
}

impl RoadmapBlock {
    /// Names flagged to graduate at the end of this block.
    fn graduates(&self) -> BTreeSet<&str> {
        self.active
            .iter()
            .filter(|item| item.graduate_at_end)
            .map(|item| item.name.as_str())
            .collect()
    }

    fn maintenance_set(&self) -> BTreeSet<&str> {
        self.maintenance.iter().map(String::as_str).collect()
    }
}

/// A validated sequence of roadmap blocks.
///
/// Deserialization funnels through [`Roadmap::new`], so a `Roadmap` cannot
/// exist without passing validation, whatever its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoadmap")]
pub struct Roadmap {
    blocks: Vec<RoadmapBlock>,
}

/// Wire shape of a roadmap, before validation.
#[derive(Deserialize)]
struct RawRoadmap {
    blocks: Vec<RoadmapBlock>,
}

impl TryFrom<RawRoadmap> for Roadmap {
    type Error = JournalError;

    fn try_from(raw: RawRoadmap) -> Result<Self> {
        Self::new(raw.blocks)
    }
}

impl Roadmap {
    /// Validate and construct a roadmap.
    ///
    /// Checks, per block and across consecutive blocks:
    /// - active pool holds between 2 and 3 languages;
    /// - maintenance pools are append-only (never lose a language);
    /// - each maintenance pool is exactly the previous pool plus the
    ///   previous block's graduates;
    /// - a graduating language is not already in its own block's
    ///   maintenance pool.
    ///
    /// The passive seed is a single field, so "exactly one per block" holds
    /// by construction.
    pub fn new(blocks: Vec<RoadmapBlock>) -> Result<Self> {
        for block in &blocks {
            validate_block(block)?;
        }
        for pair in blocks.windows(2) {
            validate_transition(&pair[0], &pair[1])?;
        }

        let current_count = blocks.iter().filter(|b| b.is_current).count();
        if current_count > 1 {
            return Err(JournalError::schedule(format!(
                "{} blocks are marked current; at most one may be",
                current_count
            )));
        }

        Ok(Self { blocks })
    }

    /// All blocks in order.
    pub fn blocks(&self) -> &[RoadmapBlock] {
        &self.blocks
    }

    /// The block marked as current, if any.
    pub fn current(&self) -> Option<&RoadmapBlock> {
        self.blocks.iter().find(|b| b.is_current)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn validate_block(block: &RoadmapBlock) -> Result<()> {
    let active = block.active.len();
    if !(MIN_ACTIVE..=MAX_ACTIVE).contains(&active) {
        return Err(JournalError::schedule(format!(
            "{}: active pool has {} languages, expected {}..={}",
            block.id, active, MIN_ACTIVE, MAX_ACTIVE
        )));
    }

    // Graduation happens at the block boundary; a graduating language cannot
    // already be in maintenance during its own block.
    let maintenance = block.maintenance_set();
    for name in block.graduates() {
        if maintenance.contains(name) {
            return Err(JournalError::schedule(format!(
                "{}: {} graduates at end of block but is already in its maintenance pool",
                block.id, name
            )));
        }
    }

    Ok(())
}

fn validate_transition(prev: &RoadmapBlock, next: &RoadmapBlock) -> Result<()> {
    let prev_pool = prev.maintenance_set();
    let next_pool = next.maintenance_set();

    for name in &prev_pool {
        if !next_pool.contains(name) {
            return Err(JournalError::schedule(format!(
                "{}: maintenance pool drops {} (pools are append-only)",
                next.id, name
            )));
        }
    }

    let mut expected = prev_pool;
    expected.extend(prev.graduates());

    if expected != next_pool {
        let unexpected: Vec<&str> = next_pool.difference(&expected).copied().collect();
        let missing: Vec<&str> = expected.difference(&next_pool).copied().collect();
        let mut detail = Vec::new();
        if !missing.is_empty() {
            detail.push(format!("missing graduates: {}", missing.join(", ")));
        }
        if !unexpected.is_empty() {
            detail.push(format!(
                "entered without graduating from {}: {}",
                prev.id,
                unexpected.join(", ")
            ));
        }
        return Err(JournalError::schedule(format!(
            "{}: maintenance pool mismatch ({})",
            next.id,
            detail.join("; ")
        )));
    }

    Ok(())
}

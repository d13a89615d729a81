//! Derived statistics for Lingo.
//!
//! Pure, synchronous aggregation over immutable snapshots: summary numbers
//! and date-grouped history. There are no caches; every view is recomputed
//! from the full entry set.

pub mod aggregate;
pub mod days;

pub use aggregate::{aggregate, Summary};
pub use days::{group_by_day, DayGroup, DayGroups, GroupOptions, DEFAULT_MAX_DATES};

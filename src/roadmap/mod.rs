//! Multi-year learning-plan schedule.
//!
//! Static configuration, evaluated once at load time. See
//! [`schedule::Roadmap`] for the pool-transition invariants.

pub mod blueprint;
pub mod schedule;

pub use blueprint::{blueprint, flag_for};
pub use schedule::{LangItem, Roadmap, RoadmapBlock, MAX_ACTIVE, MIN_ACTIVE};

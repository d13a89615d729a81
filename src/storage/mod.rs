//! Document storage for Lingo.
//!
//! Keyed JSON document stores behind the [`SnapshotStore`] trait, with
//! file-based and in-memory backends.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{EntryQuery, SnapshotStore};

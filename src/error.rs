//! Unified error types for Lingo.
//!
//! Read-path errors degrade gracefully: a missing or partial snapshot yields
//! zero-valued summaries and empty views, never a panic. The one exception is
//! roadmap validation, which is static configuration and must refuse to serve
//! an inconsistent schedule at load time.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Lingo operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O errors from document store operations.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// Roadmap schedule invariant violations. Fatal at load time.
    #[error("schedule invariant violation: {message}")]
    Schedule { message: String },
}

/// A specialized Result type for Lingo operations.
pub type Result<T> = std::result::Result<T, JournalError>;

impl JournalError {
    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a schedule invariant violation.
    pub fn schedule(message: impl Into<String>) -> Self {
        Self::Schedule {
            message: message.into(),
        }
    }

    /// Check whether this error may halt initialization.
    ///
    /// Only schedule validation is allowed to be fatal; everything else is
    /// a per-snapshot condition that downstream consumers absorb.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Schedule { .. })
    }
}

impl From<io::Error> for JournalError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

/// Trait for graceful degradation on read paths.
///
/// Snapshot reads that fail should log a warning and fall back to an empty
/// view rather than propagate, so a partial store never takes down a page.
pub trait Degrade<T> {
    /// Handle an error by logging a warning and returning the default value.
    fn degrade_default(self, context: &str) -> T
    where
        T: Default;

    /// Handle an error by logging a warning and returning the provided fallback.
    fn degrade_with(self, context: &str, fallback: T) -> T;
}

impl<T> Degrade<T> for Result<T> {
    fn degrade_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (degraded: using default)", context, err);
                T::default()
            }
        }
    }

    fn degrade_with(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (degraded: using fallback)", context, err);
                fallback
            }
        }
    }
}

//! Configuration loading for Lingo.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (`LINGO_HOME`, `LINGO_ADMIN_ID`), highest
//! 2. User config (`~/.lingo/config.toml`)
//! 3. Defaults, lowest
//!
//! All configuration is optional; the journal runs with sensible defaults
//! when no config exists, and a malformed config degrades to defaults with
//! a warning rather than refusing to start.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Degrade, JournalError, Result};
use crate::stats::DEFAULT_MAX_DATES;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "LINGO_HOME";
/// Environment variable overriding the admin identifier.
pub const ADMIN_ENV: &str = "LINGO_ADMIN_ID";

/// The journal's home directory: `$LINGO_HOME` or `~/.lingo`.
pub fn data_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var(HOME_ENV) {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }
    dirs::home_dir().map(|home| home.join(".lingo"))
}

/// Path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("config.toml"))
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Write gating configuration.
    pub admin: AdminConfig,
    /// Past-days review configuration.
    pub review: ReviewConfig,
}

/// Admin identity used to gate write commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    /// The one subject id permitted to write. `None` disables gating.
    pub admin_id: Option<String>,
}

/// Options for the past-days review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReviewConfig {
    /// Maximum number of dates shown.
    pub max_dates: usize,
    /// Whether the review hides today's entries.
    pub exclude_today: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_dates: DEFAULT_MAX_DATES,
            exclude_today: true,
        }
    }
}

impl Config {
    /// Load configuration with the full precedence chain.
    ///
    /// A missing config file yields defaults; an unreadable or malformed
    /// one logs a warning and yields defaults.
    pub fn load() -> Self {
        let mut config = match config_path() {
            Some(path) if path.exists() => {
                Self::from_file(&path).degrade_default("loading config")
            }
            _ => Self::default(),
        };
        config.apply_env();
        config
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| JournalError::storage(path, e))?;
        toml::from_str(&content)
            .map_err(|e| JournalError::config(format!("invalid TOML in {}: {}", path.display(), e)))
    }

    /// Apply environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(admin_id) = env::var(ADMIN_ENV) {
            if !admin_id.is_empty() {
                self.admin.admin_id = Some(admin_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.admin.admin_id.is_none());
        assert_eq!(config.review.max_dates, DEFAULT_MAX_DATES);
        assert!(config.review.exclude_today);
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[admin]
admin_id = "uid-123"

[review]
max_dates = 14
exclude_today = false
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.admin.admin_id.as_deref(), Some("uid-123"));
        assert_eq!(config.review.max_dates, 14);
        assert!(!config.review.exclude_today);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[admin]\nadmin_id = \"uid-123\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.admin.admin_id.as_deref(), Some("uid-123"));
        assert_eq!(config.review.max_dates, DEFAULT_MAX_DATES);
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, JournalError::Config { .. }));
    }

    #[test]
    #[serial]
    fn test_env_overrides_admin_id() {
        env::set_var(ADMIN_ENV, "env-admin");
        let config = Config::load();
        env::remove_var(ADMIN_ENV);

        assert_eq!(config.admin.admin_id.as_deref(), Some("env-admin"));
    }

    #[test]
    #[serial]
    fn test_data_dir_env_override() {
        env::set_var(HOME_ENV, "/tmp/lingo-test");
        let dir = data_dir();
        env::remove_var(HOME_ENV);

        assert_eq!(dir, Some(PathBuf::from("/tmp/lingo-test")));
    }

    #[test]
    #[serial]
    fn test_data_dir_defaults_under_home() {
        env::remove_var(HOME_ENV);
        if let Some(dir) = data_dir() {
            assert!(dir.ends_with(".lingo"));
        }
    }
}

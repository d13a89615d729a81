//! Admin identity gate.
//!
//! The journal has exactly one writer. Write-producing call sites check the
//! caller's opaque subject identifier against the configured admin id before
//! running; everything read-only is public. How the subject id is obtained
//! (sign-in flow, session token) is outside this crate.

use crate::config::AdminConfig;

/// Equality gate over a single fixed admin identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminGate {
    admin_id: Option<String>,
}

impl AdminGate {
    /// Build the gate from configuration.
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            admin_id: config.admin_id.clone(),
        }
    }

    /// Gate that allows any subject. Used when no admin id is configured.
    pub fn open() -> Self {
        Self { admin_id: None }
    }

    /// Check whether the given subject may perform writes.
    ///
    /// With no admin id configured, everything is permitted (single-user
    /// local setup). With one configured, only that exact subject passes;
    /// an absent subject never does.
    pub fn permits(&self, subject: Option<&str>) -> bool {
        match &self.admin_id {
            None => true,
            Some(admin_id) => subject == Some(admin_id.as_str()),
        }
    }
}

//! Roadmap command: validate and print the blueprint.
//!
//! Validation failures are fatal: an inconsistent schedule is reported and
//! the command exits non-zero rather than printing a plan that contradicts
//! itself.

use serde::{Deserialize, Serialize};

use crate::roadmap::{flag_for, Roadmap};

/// Output of the roadmap command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Roadmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoadmapOutput {
    fn success(roadmap: Roadmap) -> Self {
        Self {
            success: true,
            roadmap: Some(roadmap),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            roadmap: None,
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        let roadmap = match (&self.roadmap, &self.error) {
            (Some(roadmap), _) => roadmap,
            (None, error) => {
                return format!(
                    "Roadmap invalid: {}",
                    error.as_deref().unwrap_or("unknown error")
                );
            }
        };

        let mut lines = Vec::new();
        for block in roadmap.blocks() {
            let current = if block.is_current { "  ← current" } else { "" };
            lines.push(format!(
                "{} · {} ({}){}",
                block.title, block.id, block.date_range, current
            ));

            lines.push("  Active:".to_string());
            for item in &block.active {
                let mut line = format!("    {} {}", flag_for(&item.name), item.name);
                if let Some(note) = &item.note {
                    line.push_str(&format!(" — {}", note));
                }
                if item.graduate_at_end {
                    line.push_str(" → maintenance after this block");
                }
                lines.push(line);
            }

            let passive = &block.passive;
            let mut line = format!("  Passive: {} {}", flag_for(&passive.name), passive.name);
            if let Some(note) = &passive.note {
                line.push_str(&format!(" — {}", note));
            }
            lines.push(line);

            if block.maintenance.is_empty() {
                lines.push("  Maintenance: (none yet)".to_string());
            } else {
                let pool: Vec<String> = block
                    .maintenance
                    .iter()
                    .map(|name| format!("{} {}", flag_for(name), name))
                    .collect();
                lines.push(format!("  Maintenance: {}", pool.join(", ")));
            }
            lines.push(String::new());
        }

        lines.join("\n").trim_end().to_string()
    }
}

/// The roadmap command implementation.
#[derive(Debug, Default)]
pub struct RoadmapCommand;

impl RoadmapCommand {
    /// Create a new roadmap command.
    pub fn new() -> Self {
        Self
    }

    /// Run the roadmap command over an already-loaded schedule result.
    pub fn run(&self, schedule: crate::error::Result<Roadmap>) -> RoadmapOutput {
        match schedule {
            Ok(roadmap) => RoadmapOutput::success(roadmap),
            Err(e) => RoadmapOutput::failure(e.to_string()),
        }
    }
}

//! Effort scale labels.
//!
//! The 1..5 effort rating has fixed display names and help text, shown next
//! to entries and in the daily review legend.

/// Display name for an effort rating.
///
/// Out-of-range values fall back to the nearest end of the scale, matching
/// the clamping applied on write.
pub fn effort_label(effort: u8) -> &'static str {
    match effort {
        0 | 1 => "Passive",
        2 => "Light",
        3 => "Focused",
        4 => "Intense",
        _ => "Deep",
    }
}

/// One-line description of an effort rating.
pub fn effort_help(effort: u8) -> &'static str {
    match effort {
        0 | 1 => "Passive: podcasts, YouTube, background listening, etc.",
        2 => "Light: low-friction input or short practice.",
        3 => "Focused: deliberate practice with attention.",
        4 => "Intense: challenging drills, output-heavy work.",
        _ => "Deep: long, immersive, highly demanding session.",
    }
}

//! The authored roadmap blueprint.
//!
//! The schedule through August 2028, authored once by hand and validated at
//! load. Live journal data never feeds back into it.

use crate::error::Result;
use crate::roadmap::schedule::{LangItem, Roadmap, RoadmapBlock};

/// Flag emoji for a language name, with a globe fallback.
pub fn flag_for(name: &str) -> &'static str {
    match name {
        "French" => "🇫🇷",
        "Bulgarian" => "🇧🇬",
        "Norwegian" => "🇳🇴",
        "Portuguese" => "🇧🇷",
        "Romanian" => "🇷🇴",
        "Swedish" => "🇸🇪",
        "Russian" => "🇷🇺",
        "Dutch" => "🇳🇱",
        "Polish" => "🇵🇱",
        "Italian" => "🇮🇹",
        "English" => "🇬🇧",
        "Spanish" => "🇪🇸",
        _ => "🌍",
    }
}

/// Build and validate the authored blueprint.
pub fn blueprint() -> Result<Roadmap> {
    Roadmap::new(vec![
        RoadmapBlock {
            id: "2025-2026".to_string(),
            title: "Block 1".to_string(),
            date_range: "Now → Aug 2026".to_string(),
            active: vec![
                LangItem::new("Bulgarian").note("A2→B2").graduates(),
                LangItem::new("Norwegian").note("A1→B1"),
                LangItem::new("Portuguese").note("B1→C1").graduates(),
            ],
            passive: LangItem::new("Romanian").note("A0 (exposure only)"),
            maintenance: vec!["French".to_string()],
            is_current: true,
        },
        RoadmapBlock {
            id: "2026-2027".to_string(),
            title: "Block 2".to_string(),
            date_range: "Sep 2026 → Aug 2027".to_string(),
            active: vec![
                LangItem::new("Norwegian").note("B1→B2").graduates(),
                LangItem::new("Romanian").note("A0/A2→B2").graduates(),
                LangItem::new("Swedish").note("A0→B1"),
            ],
            passive: LangItem::new("Russian").note("A0 (seed)"),
            maintenance: vec![
                "French".to_string(),
                "Bulgarian".to_string(),
                "Portuguese".to_string(),
            ],
            is_current: false,
        },
        RoadmapBlock {
            id: "2027-2028".to_string(),
            title: "Block 3".to_string(),
            date_range: "Sep 2027 → Aug 2028".to_string(),
            active: vec![
                LangItem::new("Russian").note("A0→A2/B1 (Slavic pace; likely B1 max)"),
                LangItem::new("Swedish").note("B1→B2").graduates(),
                LangItem::new("Dutch").note("A0→A2/B1"),
            ],
            passive: LangItem::new("Polish").note("A0 (seed)"),
            maintenance: vec![
                "French".to_string(),
                "Bulgarian".to_string(),
                "Portuguese".to_string(),
                "Norwegian".to_string(),
                "Romanian".to_string(),
            ],
            is_current: false,
        },
    ])
}

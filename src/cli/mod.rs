//! CLI commands for Lingo.
//!
//! Thin presentation layer over the library:
//! - **Write commands**: log (admin-gated entry upsert/delete),
//!   lang (admin-gated portfolio edits)
//! - **Read commands**: today, review, languages
//! - **Static**: roadmap (blueprint validation and display)

pub mod lang;
pub mod languages;
pub mod log;
pub mod review;
pub mod roadmap_cmd;
pub mod today;

pub use lang::LangCommand;
pub use languages::LanguagesCommand;
pub use log::LogCommand;
pub use review::ReviewCommand;
pub use roadmap_cmd::RoadmapCommand;
pub use today::TodayCommand;

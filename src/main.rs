//! Lingo - study-tracking journal for language learning.
//!
//! CLI entry point.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lingo::auth::AdminGate;
use lingo::cli::{
    lang::{LangAction, LangOptions},
    languages::LanguagesOptions,
    log::LogOptions,
    review::ReviewOptions,
    today::TodayOptions,
    LangCommand, LanguagesCommand, LogCommand, ReviewCommand, RoadmapCommand, TodayCommand,
};
use lingo::config::Config;
use lingo::roadmap::blueprint;
use lingo::storage::FileStore;
use lingo::util::{now_ms, today_string};

/// Lingo - study-tracking journal for language learning
#[derive(Parser)]
#[command(name = "lingo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log, update, or delete a study entry for a language
    Log {
        /// Language id to log against
        language_id: String,
        /// Minutes spent
        #[arg(long, short, default_value_t = 0)]
        minutes: i64,
        /// Effort rating 1-5
        #[arg(long, short, default_value_t = 1)]
        effort: i64,
        /// Session note
        #[arg(long, short, default_value = "")]
        content: String,
        /// Day to log ("YYYY-MM-DD", default today)
        #[arg(long)]
        date: Option<String>,
        /// Delete the entry for this date and language
        #[arg(long)]
        delete: bool,
        /// Subject id for the admin gate
        #[arg(long)]
        subject: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Manage the language portfolio
    Lang {
        #[command(subcommand)]
        action: LangCli,
    },

    /// Show today's entries and summary
    Today {
        /// Day to review (default today)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Show the past-days history
    Review {
        /// Show only yesterday
        #[arg(long)]
        yesterday: bool,
        /// Include today's entries
        #[arg(long)]
        include_today: bool,
        /// Maximum number of dates shown
        #[arg(long)]
        max_dates: Option<usize>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Show the portfolio grouped by maturity
    Languages {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Validate and print the roadmap blueprint
    Roadmap {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum LangCli {
    /// Add a language to the portfolio
    Add {
        /// Language id, e.g. "bg"
        id: String,
        /// Display name, e.g. "Bulgarian"
        name: String,
        /// Flag emoji
        #[arg(long)]
        emoji: Option<String>,
        /// Badge color (hex)
        #[arg(long)]
        color: Option<String>,
        /// Proficiency label, e.g. "A2" or "Intermediate"
        #[arg(long)]
        level: Option<String>,
        /// Mark as a native language
        #[arg(long)]
        native: bool,
        /// Mark as under active study
        #[arg(long)]
        learning: bool,
        /// Subject id for the admin gate
        #[arg(long)]
        subject: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Edit a language; only the given fields change
    Edit {
        /// Language id to edit
        id: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New flag emoji
        #[arg(long)]
        emoji: Option<String>,
        /// New badge color (hex)
        #[arg(long)]
        color: Option<String>,
        /// New proficiency label
        #[arg(long)]
        level: Option<String>,
        /// Set or clear the native flag
        #[arg(long)]
        native: Option<bool>,
        /// Set or clear the learning flag
        #[arg(long)]
        learning: Option<bool>,
        /// Subject id for the admin gate
        #[arg(long)]
        subject: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Delete a language
    Delete {
        /// Language id to delete
        id: String,
        /// Subject id for the admin gate
        #[arg(long)]
        subject: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },
}

impl LangCli {
    fn into_options(self) -> LangOptions {
        match self {
            Self::Add {
                id,
                name,
                emoji,
                color,
                level,
                native,
                learning,
                subject,
                json,
            } => LangOptions {
                action: LangAction::Add {
                    id,
                    name,
                    emoji,
                    color,
                    level,
                    native,
                    learning,
                },
                subject,
                json,
            },
            Self::Edit {
                id,
                name,
                emoji,
                color,
                level,
                native,
                learning,
                subject,
                json,
            } => LangOptions {
                action: LangAction::Edit {
                    id,
                    name,
                    emoji,
                    color,
                    level,
                    native,
                    learning,
                },
                subject,
                json,
            },
            Self::Delete { id, subject, json } => LangOptions {
                action: LangAction::Delete { id },
                subject,
                json,
            },
        }
    }
}

fn print_output<T: serde::Serialize>(output: &T, json: bool, text: String) {
    if json {
        match serde_json::to_string_pretty(output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("failed to serialize output: {}", e),
        }
    } else {
        println!("{}", text);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();

    let store = match FileStore::new() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("lingo: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Log {
            language_id,
            minutes,
            effort,
            content,
            date,
            delete,
            subject,
            json,
        } => {
            let options = LogOptions {
                date: date.unwrap_or_else(today_string),
                language_id,
                content,
                minutes,
                effort,
                delete,
                subject,
                json,
            };
            let gate = AdminGate::new(&config.admin);
            let output = LogCommand::new(store, gate).run(&options, now_ms());
            let text = output.format_text();
            print_output(&output, json, text);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        Commands::Lang { action } => {
            let options = action.into_options();
            let gate = AdminGate::new(&config.admin);
            let output = LangCommand::new(store, gate).run(&options);
            let text = output.format_text();
            print_output(&output, options.json, text);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        Commands::Today { date, json } => {
            let options = TodayOptions {
                date: date.unwrap_or_else(today_string),
                json,
            };
            let output = TodayCommand::new(store).run(&options);
            let text = output.format_text();
            print_output(&output, json, text);
            ExitCode::SUCCESS
        }

        Commands::Review {
            yesterday,
            include_today,
            max_dates,
            json,
        } => {
            let options = ReviewOptions {
                today: today_string(),
                yesterday,
                include_today: include_today || !config.review.exclude_today,
                max_dates: max_dates.unwrap_or(config.review.max_dates),
                json,
            };
            let output = ReviewCommand::new(store).run(&options);
            let text = output.format_text();
            print_output(&output, json, text);
            ExitCode::SUCCESS
        }

        Commands::Languages { json } => {
            let options = LanguagesOptions { json };
            let output = LanguagesCommand::new(store).run(&options);
            let text = output.format_text();
            print_output(&output, json, text);
            ExitCode::SUCCESS
        }

        Commands::Roadmap { json } => {
            let output = RoadmapCommand::new().run(blueprint());
            let text = output.format_text();
            print_output(&output, json, text);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

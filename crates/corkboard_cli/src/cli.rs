//! Command-line definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Corkboard - inspect and edit a SQLite-backed board
#[derive(Parser, Debug)]
#[command(name = "corkboard_cli", about = "Inspect and edit a SQLite-backed corkboard", version)]
pub struct Cli {
    /// Board database file, created when missing
    #[arg(short, long, global = true)]
    pub db: Option<PathBuf>,

    /// Absolute directory for rotating log files
    #[arg(long, global = true, env = "CORKBOARD_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Without a command, prints the ping/version check
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print board counts
    Summary,

    /// Print the board blob as JSON
    Export,

    /// Replace the board from a JSON file
    Import {
        /// JSON file holding `items`, `connections` and optionally
        /// `categories`/`background`
        file: PathBuf,
    },

    /// Add a card and print its id
    Add {
        /// Horizontal position; a random spawn spot is used when omitted
        #[arg(requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Vertical position
        #[arg(allow_negative_numbers = true)]
        y: Option<f64>,
    },

    /// Connect two cards and print the connection id
    Link { from: String, to: String },

    /// Print the ids of cards linked to a card
    Links { id: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Export => "export",
            Self::Import { .. } => "import",
            Self::Add { .. } => "add",
            Self::Link { .. } => "link",
            Self::Links { .. } => "links",
        }
    }
}

//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "toolshed")]
#[command(about = "Personal utility suite: daily journal and shared clipboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $TOOLSHED_CONFIG, then ./toolshed.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Daily journal
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Shared clipboard
    Clipboard {
        #[command(subcommand)]
        action: ClipboardAction,
    },

    /// Check cache connectivity
    Check,

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// Save today's entry (replaces an earlier one from today)
    Submit {
        #[arg(long)]
        success: String,

        #[arg(long)]
        regret: String,

        #[arg(long)]
        highlight: String,

        #[arg(long)]
        frog: String,
    },

    /// Show the entry for a date (default: yesterday)
    Show {
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Export recent days as a calendar-grid HTML file
    Export {
        /// Number of days, 1-365
        #[arg(short, long, default_value = "7")]
        period: String,

        /// Output file (default: suggested name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List dates that have a stored entry, newest first
    List,
}

#[derive(Subcommand, Debug)]
pub enum ClipboardAction {
    /// Print the clipboard text
    Show,

    /// Replace the clipboard text
    Set {
        text: String,
    },
}

//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, ClipboardAction, Commands, JournalAction};
pub use output::{exit_code_for_status, format_date_list, format_response};

//! Error types for toolshed

use std::path::PathBuf;
use thiserror::Error;

/// Maximum length of a journal field after trimming
pub const MAX_FIELD_CHARS: usize = 500;

/// Maximum length of the clipboard text after trimming
pub const MAX_CLIPBOARD_CHARS: usize = 10_000;

/// Rejected user input. Messages are safe to show to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a text value")]
    NotText { field: String },

    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("{field} must be at most {max} characters", max = MAX_FIELD_CHARS)]
    FieldTooLong { field: String },

    #[error("{field} contains illegal control characters")]
    IllegalCharacter { field: String },

    #[error("Date must use the YYYY-MM-DD format")]
    BadFormat,

    #[error("'{0}' is not a valid calendar date")]
    InvalidCalendarDate(String),

    #[error("Date cannot be in the future")]
    FutureDate,

    #[error("Date cannot be earlier than 2020-01-01")]
    TooOld,

    #[error("Period must be a whole number of days")]
    NotANumber,

    #[error("Period must be between 1 and 365 days")]
    OutOfRange,

    #[error("Clipboard text must be at most {max} characters", max = MAX_CLIPBOARD_CHARS)]
    TooLong,

    #[error("Request body must be a JSON object")]
    MalformedBody,
}

/// Main error type for the toolshed application
#[derive(Debug, Error)]
pub enum ToolshedError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A storage tier refused a write or read. The cause is kept for logging
    /// only and never rendered.
    #[error("Failed to persist data, please try again later")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Corrupt journal record at {}: {reason}", .path.display())]
    CorruptRecord { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolshedError {
    /// Wrap any storage failure as a persistence error
    pub fn persistence<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ToolshedError::Persistence(Box::new(err))
    }

    /// HTTP-equivalent status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ToolshedError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message that may be shown to a client. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ToolshedError::Validation(e) => e.to_string(),
            ToolshedError::Persistence(_) => self.to_string(),
            ToolshedError::CorruptRecord { .. } => {
                "The stored journal record could not be read".to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolshedError::Validation(_) => 2,
            ToolshedError::CorruptRecord { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ToolshedError::CorruptRecord { path, reason } => {
                format!(
                    "Corrupt journal record: {}\n{}\n\n\
                    Suggestions:\n\
                    • Open the file and fix the TOML by hand\n\
                    • Restore the file from a backup\n\
                    • Delete the file to fall back to an empty entry for that day",
                    path.display(),
                    reason
                )
            }
            ToolshedError::Config(msg) => {
                if msg.contains("REDIS_") {
                    format!(
                        "{}\n\n\
                        Expected: REDIS_PORT=6379, REDIS_TIMEOUT=<seconds>\n\
                        Set TOOLSHED_CACHE=off to run without the cache",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ToolshedError
pub type Result<T> = std::result::Result<T, ToolshedError>;

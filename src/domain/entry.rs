//! Journal entry model

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Text rendered in each field of a day that has no stored entry
pub const PLACEHOLDER_TEXT: &str = "None";

/// Field labels in validation order
pub const FIELD_NAMES: [&str; 4] = ["success", "regret", "highlight", "frog"];

/// Raw, unvalidated journal fields as submitted by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    pub success: String,
    pub regret: String,
    pub highlight: String,
    pub frog: String,
}

impl JournalDraft {
    pub fn new(
        success: impl Into<String>,
        regret: impl Into<String>,
        highlight: impl Into<String>,
        frog: impl Into<String>,
    ) -> Self {
        JournalDraft {
            success: success.into(),
            regret: regret.into(),
            highlight: highlight.into(),
            frog: frog.into(),
        }
    }

    /// Field values paired with their labels, in validation order
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_NAMES[0], self.success.as_str()),
            (FIELD_NAMES[1], self.regret.as_str()),
            (FIELD_NAMES[2], self.highlight.as_str()),
            (FIELD_NAMES[3], self.frog.as_str()),
        ]
    }
}

/// A validated, stored journal entry. One per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub timestamp: DateTime<FixedOffset>,
    pub success: String,
    pub regret: String,
    pub highlight: String,
    pub frog: String,
}

/// The result of looking up a date: the stored entry, or explicit absence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalRecord {
    pub date: NaiveDate,
    pub entry: Option<JournalEntry>,
}

impl JournalRecord {
    pub fn found(entry: JournalEntry) -> Self {
        JournalRecord {
            date: entry.date,
            entry: Some(entry),
        }
    }

    pub fn missing(date: NaiveDate) -> Self {
        JournalRecord { date, entry: None }
    }

    pub fn is_placeholder(&self) -> bool {
        self.entry.is_none()
    }

    /// Serializable view; absent days render every field as `"None"`
    pub fn to_view(&self) -> EntryView {
        match &self.entry {
            Some(entry) => EntryView {
                date: self.date,
                timestamp: Some(entry.timestamp),
                success: entry.success.clone(),
                regret: entry.regret.clone(),
                highlight: entry.highlight.clone(),
                frog: entry.frog.clone(),
            },
            None => EntryView {
                date: self.date,
                timestamp: None,
                success: PLACEHOLDER_TEXT.to_string(),
                regret: PLACEHOLDER_TEXT.to_string(),
                highlight: PLACEHOLDER_TEXT.to_string(),
                frog: PLACEHOLDER_TEXT.to_string(),
            },
        }
    }
}

/// Wire shape of a journal day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub date: NaiveDate,
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub success: String,
    pub regret: String,
    pub highlight: String,
    pub frog: String,
}

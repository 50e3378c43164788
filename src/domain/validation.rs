//! Input validation rules
//!
//! Pure functions: every check takes the current date as an argument when it
//! needs one, so callers decide what "today" means.

use crate::error::{ValidationError, MAX_CLIPBOARD_CHARS, MAX_FIELD_CHARS};
use chrono::NaiveDate;
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::OnceLock;

/// Longest export window in days
pub const MAX_PERIOD_DAYS: i64 = 365;

/// Earliest date the journal accepts
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap())
}

/// Control characters other than tab and newline
fn has_illegal_control(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_control() && c != '\t' && c != '\n')
}

/// Validate one journal field and return it trimmed
pub fn validate_field(value: &str, label: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(ValidationError::EmptyField {
            field: label.to_string(),
        });
    }
    if length > MAX_FIELD_CHARS {
        return Err(ValidationError::FieldTooLong {
            field: label.to_string(),
        });
    }
    if has_illegal_control(trimmed) {
        return Err(ValidationError::IllegalCharacter {
            field: label.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Validate a user-supplied `YYYY-MM-DD` date against `today`
pub fn validate_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !date_regex().is_match(input) {
        return Err(ValidationError::BadFormat);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidCalendarDate(input.to_string()))?;

    if date > today {
        return Err(ValidationError::FutureDate);
    }
    if date < earliest_date() {
        return Err(ValidationError::TooOld);
    }

    Ok(date)
}

/// Validate an export period given in days
pub fn validate_period(input: &str) -> Result<u32, ValidationError> {
    let days: i64 = input.trim().parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfRange,
            _ => ValidationError::NotANumber,
        }
    })?;

    if !(1..=MAX_PERIOD_DAYS).contains(&days) {
        return Err(ValidationError::OutOfRange);
    }

    Ok(days as u32)
}

/// Validate clipboard text and return it trimmed. Empty text is allowed.
pub fn validate_clipboard(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();

    if trimmed.chars().count() > MAX_CLIPBOARD_CHARS {
        return Err(ValidationError::TooLong);
    }
    if has_illegal_control(trimmed) {
        return Err(ValidationError::IllegalCharacter {
            field: "clipboard".to_string(),
        });
    }

    Ok(trimmed.to_string())
}

//! Output formatting utilities

use crate::api::{ApiBody, ApiResponse};
use chrono::NaiveDate;

/// Format a list of stored dates for display
pub fn format_date_list(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for date in dates {
        output.push_str(&format!("{}  {}\n", date.format("%Y-%m-%d"), date.format("%a")));
    }
    output
}

/// Render a JSON response body for the terminal
pub fn format_response(response: &ApiResponse) -> String {
    match &response.body {
        ApiBody::Json(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        ApiBody::Html { filename, .. } => filename.clone(),
    }
}

/// Process exit code for a response status
pub fn exit_code_for_status(status: u16) -> i32 {
    match status {
        200..=299 => 0,
        400..=499 => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_date_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_date_list() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
        ];
        assert_eq!(
            format_date_list(&dates),
            "2025-01-17  Fri\n2025-01-13  Mon\n"
        );
    }

    #[test]
    fn test_format_json_response() {
        let response = ApiResponse::ok(json!({"status": "success"}));
        assert_eq!(format_response(&response), "{\n  \"status\": \"success\"\n}");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for_status(200), 0);
        assert_eq!(exit_code_for_status(400), 2);
        assert_eq!(exit_code_for_status(500), 1);
    }
}

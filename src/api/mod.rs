//! Request layer
//!
//! Transport-agnostic handlers for the journal and clipboard routes. Each
//! handler takes the raw request input and returns a status code with a JSON
//! or HTML body, ready for whatever server or CLI sits in front.

use crate::application::{ClipboardService, ExportService, JournalService};
use crate::domain::entry::FIELD_NAMES;
use crate::domain::JournalDraft;
use crate::error::{ToolshedError, ValidationError};
use serde_json::{json, Map, Value};
use tracing::error;

/// Period used by the export route when none is given
pub const DEFAULT_EXPORT_PERIOD: &str = "7";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Json(Value),
    /// A document meant to be downloaded as `filename`
    Html { filename: String, content: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ApiBody,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        ApiResponse {
            status: 200,
            body: ApiBody::Json(body),
        }
    }

    /// Map an error to its status and a client-safe message
    pub fn from_error(err: &ToolshedError) -> Self {
        let status = err.status_code();
        if status >= 500 {
            error!(error = %err, "request failed");
        }
        ApiResponse {
            status,
            body: ApiBody::Json(json!({
                "status": "error",
                "message": err.client_message(),
            })),
        }
    }

    /// JSON body, if this is a JSON response
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            ApiBody::Json(value) => Some(value),
            ApiBody::Html { .. } => None,
        }
    }
}

/// `POST` journal: body is a JSON object holding the four fields
pub fn submit_journal(service: &JournalService, body: &str) -> ApiResponse {
    let result = parse_draft(body)
        .map_err(ToolshedError::from)
        .and_then(|draft| service.submit(&draft));

    match result {
        Ok(entry) => ApiResponse::ok(json!({
            "status": "success",
            "message": format!("Journal entry for {} saved", entry.date),
        })),
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// `GET` journal: optional `date` query parameter
pub fn fetch_journal(service: &JournalService, date: Option<&str>) -> ApiResponse {
    match service.fetch(date) {
        Ok(record) => ApiResponse::ok(json!({
            "status": "success",
            "data": record.to_view(),
        })),
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// `GET` journal export: optional `period` query parameter, default 7 days
pub fn export_journal(service: &JournalService, period: Option<&str>) -> ApiResponse {
    let period = period.unwrap_or(DEFAULT_EXPORT_PERIOD);

    match ExportService::new(service).render_period(period) {
        Ok(view) => ApiResponse {
            status: 200,
            body: ApiBody::Html {
                content: view.to_html(),
                filename: view.filename,
            },
        },
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// `GET` clipboard
pub fn show_clipboard(service: &ClipboardService) -> ApiResponse {
    match service.show() {
        Ok(text) => ApiResponse::ok(json!({ "status": "success", "data": text })),
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// `POST` clipboard: the new text
pub fn replace_clipboard(service: &ClipboardService, text: &str) -> ApiResponse {
    match service.replace(text) {
        Ok(text) => ApiResponse::ok(json!({ "status": "success", "data": text })),
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// Read the four fields out of a JSON object. Missing fields count as empty.
fn parse_draft(body: &str) -> Result<JournalDraft, ValidationError> {
    let value: Value = serde_json::from_str(body).map_err(|_| ValidationError::MalformedBody)?;
    let object = value.as_object().ok_or(ValidationError::MalformedBody)?;

    Ok(JournalDraft::new(
        text_field(object, FIELD_NAMES[0])?,
        text_field(object, FIELD_NAMES[1])?,
        text_field(object, FIELD_NAMES[2])?,
        text_field(object, FIELD_NAMES[3])?,
    ))
}

fn text_field(object: &Map<String, Value>, name: &str) -> Result<String, ValidationError> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ValidationError::NotText {
            field: name.to_string(),
        }),
    }
}

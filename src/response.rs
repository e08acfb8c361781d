//! Inbound generator responses.
//!
//! The generator answers with JSON when it can and plain text when it cannot.
//! [`ResponsePayload::parse`] never fails: a body that is not valid JSON is
//! kept as raw text.

use serde_json::Value;

use crate::model::Printable;

/// Longest raw body quoted in an error message, in characters.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// A parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    /// Body parsed as JSON
    Json(Value),
    /// Body that is not JSON
    Raw(String),
}

impl ResponsePayload {
    /// Parse a body, falling back to raw text on malformed JSON.
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => ResponsePayload::Json(value),
            Err(_) => ResponsePayload::Raw(body.to_string()),
        }
    }

    /// The `printable.html_a4` / `printable.css_print` pair, if the body has
    /// non-empty printable HTML.
    pub fn printable(&self) -> Option<Printable> {
        let ResponsePayload::Json(value) = self else {
            return None;
        };
        let printable = value.get("printable")?;
        let field = |name: &str| {
            printable
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let result = Printable {
            html_a4: field("html_a4"),
            css_print: field("css_print"),
        };
        result.has_html().then_some(result)
    }

    /// Text content to run through line parsing: the raw body, or the value of
    /// a body that is a single JSON string.
    pub fn text(&self) -> Option<&str> {
        match self {
            ResponsePayload::Raw(text) => Some(text.as_str()),
            ResponsePayload::Json(Value::String(text)) => Some(text.as_str()),
            ResponsePayload::Json(_) => None,
        }
    }

    /// Error text from the body's `error` field, else its `message` field.
    ///
    /// Empty, `null` and `false` values are skipped. Non-string values are
    /// rendered as indented JSON.
    pub fn error_message(&self) -> Option<String> {
        let ResponsePayload::Json(value) = self else {
            return None;
        };
        ["error", "message"]
            .iter()
            .filter_map(|key| value.get(*key))
            .find(|v| !is_falsy(v))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => display_json(other),
            })
    }

    /// True when the body explicitly says `"ok": false`.
    pub fn reported_failure(&self) -> bool {
        matches!(self, ResponsePayload::Json(value) if value.get("ok") == Some(&Value::Bool(false)))
    }

    /// Human-readable rendition for the raw-response viewer.
    pub fn to_display(&self) -> String {
        match self {
            ResponsePayload::Json(value) => display_json(value),
            ResponsePayload::Raw(text) => text.clone(),
        }
    }

    /// Message for a non-success status: the body's error field, else the raw
    /// body (shortened), else `HTTP <status>`.
    pub fn failure_message(&self, status: u16) -> String {
        if let Some(message) = self.error_message() {
            return message;
        }
        match self {
            ResponsePayload::Raw(text) if !text.trim().is_empty() => shorten(text.trim()),
            _ => format!("HTTP {}", status),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn display_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn shorten(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    short.push('…');
    short
}

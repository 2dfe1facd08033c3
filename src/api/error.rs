//! API Errors

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch() rejected: offline, CORS, DNS and the like
    #[error("network error: {0}")]
    Network(String),
    /// Server answered outside 2xx
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Rejected before reaching the network
    #[error("{0}")]
    Invalid(String),
    #[error("browser window unavailable")]
    NoWindow,
}

impl ApiError {
    pub(crate) fn network(value: JsValue) -> Self {
        ApiError::Network(describe_js(&value))
    }

    /// Build a status error, preferring the server's own explanation
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let message = message_from_body(body)
            .or_else(|| Some(status_text.trim().to_string()).filter(|s| !s.is_empty()))
            .unwrap_or_default();
        ApiError::Status { status, message }
    }

    /// Text shown to the user after the "Failed to ..." prefix
    pub fn user_message(&self) -> String {
        let message = match self {
            ApiError::Network(m) | ApiError::Decode(m) | ApiError::Encode(m) | ApiError::Invalid(m) => m.clone(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NoWindow => String::new(),
        };
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

/// Extract a human-readable message from a JSON error body.
///
/// Looks at `message`, then `description`, then per-field validation lists
/// such as `{"title": ["Missing data for required field."]}`.
pub fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["message", "description", "error"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }

    let fields: Vec<String> = object
        .iter()
        .filter_map(|(field, errors)| {
            let list: Vec<&str> = errors.as_array()?.iter().filter_map(Value::as_str).collect();
            (!list.is_empty()).then(|| format!("{}: {}", field, list.join(" ")))
        })
        .collect();
    (!fields.is_empty()).then(|| fields.join("; "))
}

fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let body = r#"{"message": "Title is required.", "description": "ignored"}"#;
        assert_eq!(message_from_body(body).as_deref(), Some("Title is required."));
    }

    #[test]
    fn test_description_field() {
        let body = r#"{"description": "No input data provided."}"#;
        assert_eq!(message_from_body(body).as_deref(), Some("No input data provided."));
    }

    #[test]
    fn test_field_validation_errors() {
        let body = r#"{"description": ["Longer than maximum length 500."], "title": ["Missing data for required field."]}"#;
        assert_eq!(
            message_from_body(body).as_deref(),
            Some("description: Longer than maximum length 500.; title: Missing data for required field.")
        );
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(message_from_body("<html>500</html>"), None);
        assert_eq!(message_from_body(""), None);
    }

    #[test]
    fn test_from_status_falls_back_to_status_text() {
        let err = ApiError::from_status(404, "NOT FOUND", "<html></html>");
        assert_eq!(err, ApiError::Status { status: 404, message: "NOT FOUND".into() });
        assert_eq!(err.user_message(), "NOT FOUND");
    }

    #[test]
    fn test_user_message_unknown_fallback() {
        assert_eq!(ApiError::from_status(500, "", "").user_message(), "Unknown error");
        assert_eq!(ApiError::NoWindow.user_message(), "Unknown error");
        assert_eq!(ApiError::Invalid("Title cannot be empty.".into()).user_message(), "Title cannot be empty.");
    }
}

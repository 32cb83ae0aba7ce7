//! Error types for SamaySetu API calls.
//!
//! Every fallible client operation returns [`ApiError`]. Only the
//! [`ApiError::Response`] variant carries an HTTP response; the others are
//! failures that happened before or after the exchange (no connection,
//! client-side validation, undecodable success body, session storage).

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use validator::ValidationErrors;

/// Body of a failed HTTP response.
///
/// JSON bodies are parsed; anything that is not JSON (plain text, HTML error
/// pages, constraint messages) is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Empty,
    Text(String),
    Json(Value),
}

impl ErrorBody {
    /// Classifies a raw response body.
    pub fn from_text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Null) => Self::Empty,
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw),
        }
    }

    /// The body as a plain string, when the backend sent one.
    ///
    /// A JSON string literal counts as text, the same way a decoded
    /// `"..."` body would.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            Self::Json(Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// The `message` member of a JSON object body.
    ///
    /// Non-string messages are rendered as JSON. Empty strings, `null` and
    /// `false` count as absent.
    pub fn message(&self) -> Option<String> {
        match self.field("message")? {
            Value::String(message) if message.is_empty() => None,
            Value::String(message) => Some(message.clone()),
            Value::Null | Value::Bool(false) => None,
            other => Some(other.to_string()),
        }
    }

    /// A member of a JSON object body.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Json(Value::Object(map)) => map.get(name),
            _ => None,
        }
    }

    /// The values of the `errors` member joined with `", "`.
    ///
    /// `errors` is usually the field → message map produced by the
    /// backend's bean validation handler.
    pub fn joined_errors(&self) -> Option<String> {
        let values: Vec<String> = match self.field("errors")? {
            Value::Object(map) => map.values().map(render_error_value).collect(),
            Value::Array(items) => items.iter().map(render_error_value).collect(),
            _ => return None,
        };
        let joined = values.join(", ");
        (!joined.is_empty()).then_some(joined)
    }

    /// Whether the backend answered with an HTML error page.
    pub fn is_html(&self) -> bool {
        match self {
            Self::Text(text) => text.contains("<!DOCTYPE") || text.contains("<html"),
            _ => false,
        }
    }

    /// The text a heuristic should inspect: a string `message`, else the raw
    /// string body. A `message` of any other type yields nothing.
    pub fn inspectable_text(&self) -> Option<&str> {
        match self.field("message") {
            Some(Value::String(message)) => Some(message),
            Some(_) => None,
            None => self.text(),
        }
    }
}

fn render_error_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_error_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A non-success HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: ErrorBody,
}

impl ErrorResponse {
    pub fn new(status: u16, body: ErrorBody) -> Self {
        Self { status, body }
    }
}

/// Field → message map produced by client-side form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Records a message for a field, replacing any earlier one.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merges validator-derived errors, keeping messages already recorded.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise the errors as an [`ApiError`].
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self))
        }
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errors) in errors.field_errors() {
            for error in errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                fields.add(camel_case(&field), message);
            }
        }
        fields
    }
}

/// Payload fields are snake_case in Rust and camelCase on the wire; form
/// errors are keyed by the wire name.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Errors returned by every SamaySetu client operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Request failed with status {}", .0.status)]
    Response(ErrorResponse),

    /// Client-side validation rejected the input before anything was sent.
    #[error("{0}")]
    Validation(FieldErrors),

    /// A success response could not be decoded into the expected type.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The persisted session could not be read or written.
    #[error("Session storage error: {0}")]
    Session(String),
}

impl ApiError {
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    pub fn from_status(status: u16, body: ErrorBody) -> Self {
        Self::Response(ErrorResponse::new(status, body))
    }

    /// Builds a single-field validation error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        Self::Validation(errors)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_text_classifies_bodies() {
        assert_eq!(ErrorBody::from_text(""), ErrorBody::Empty);
        assert_eq!(ErrorBody::from_text("   "), ErrorBody::Empty);
        assert_eq!(ErrorBody::from_text("null"), ErrorBody::Empty);
        assert_eq!(
            ErrorBody::from_text(r#"{"message":"nope"}"#),
            ErrorBody::Json(json!({"message": "nope"}))
        );
        assert_eq!(
            ErrorBody::from_text("Duplicate entry 'x' for key 'y'"),
            ErrorBody::Text("Duplicate entry 'x' for key 'y'".to_string())
        );
    }

    #[test]
    fn test_json_string_counts_as_text() {
        let body = ErrorBody::from_text(r#""Email already registered""#);
        assert_eq!(body.text(), Some("Email already registered"));
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(
            ErrorBody::Json(json!({"message": "bad"})).message().as_deref(),
            Some("bad")
        );
        assert_eq!(ErrorBody::Json(json!({"message": ""})).message(), None);
        assert_eq!(ErrorBody::Json(json!({"message": null})).message(), None);
        assert_eq!(
            ErrorBody::Json(json!({"message": 42})).message().as_deref(),
            Some("42")
        );
        assert_eq!(ErrorBody::Text("plain".into()).message(), None);
    }

    #[test]
    fn test_joined_errors_keeps_backend_order() {
        let body = ErrorBody::from_text(
            r#"{"errors":{"name":"Name is required","code":"Code is required"}}"#,
        );
        assert_eq!(
            body.joined_errors().as_deref(),
            Some("Name is required, Code is required")
        );
    }

    #[test]
    fn test_joined_errors_empty_map_is_absent() {
        let body = ErrorBody::Json(json!({"errors": {}}));
        assert_eq!(body.joined_errors(), None);
    }

    #[test]
    fn test_is_html() {
        assert!(ErrorBody::Text("<!DOCTYPE html><html></html>".into()).is_html());
        assert!(ErrorBody::Text("<html><body>403</body></html>".into()).is_html());
        assert!(!ErrorBody::Text("Forbidden".into()).is_html());
        assert!(!ErrorBody::Json(json!({"message": "<html>"})).is_html());
    }

    #[test]
    fn test_field_errors_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Only college email addresses are allowed");
        assert_eq!(errors.get("email"), Some("Email is required"));

        errors.set("email", "Only college email addresses are allowed");
        assert_eq!(
            errors.get("email"),
            Some("Only college email addresses are allowed")
        );
    }

    #[test]
    fn test_field_errors_display_joins_messages() {
        let mut errors = FieldErrors::new();
        errors.add("code", "Code is required");
        errors.add("name", "Name is required");
        assert_eq!(errors.to_string(), "Code is required, Name is required");
    }

    #[test]
    fn test_validator_errors_keyed_by_wire_name() {
        use validator::Validate;

        #[derive(Validate)]
        struct Payload {
            #[validate(range(min = 1, message = "Hours per week must be at least 1"))]
            hours_per_week: i32,
        }

        let errors: FieldErrors = Payload { hours_per_week: 0 }.validate().unwrap_err().into();
        assert_eq!(
            errors.get("hoursPerWeek"),
            Some("Hours per week must be at least 1")
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required");
        let err = errors.into_result().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_only_for_responses() {
        let err = ApiError::from_status(404, ErrorBody::Empty);
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Network("connection refused".into()).status(), None);
    }
}

//! Turns failed API calls into the one-line messages shown to users.
//!
//! The backend reports failures in several shapes: a plain string, a JSON
//! object with `message` or `errors`, an HTML error page from the servlet
//! container, or raw database constraint text. [`error_message`] folds all of
//! them into a single display string and never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{ApiError, ErrorBody, ErrorResponse};

pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const HTML_FORBIDDEN: &str =
    "Access forbidden. This might be due to a duplicate entry or permission issue.";
pub const INVALID_DATA: &str = "Invalid data provided. Please check your input.";
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";
pub const DUPLICATE_IN_DATABASE: &str = "This entry already exists in the database.";
pub const NO_PERMISSION: &str = "You do not have permission to perform this action.";
pub const NOT_FOUND: &str = "Resource not found.";
pub const CONFLICT: &str = "This entry already exists.";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";

static DUPLICATE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Duplicate entry '(.+?)' for key '(.+?)'").expect("valid duplicate-entry regex")
});

static NOT_NULL_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Column '(.+?)' cannot be null").expect("valid not-null regex")
});

static KEY_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\.").expect("valid key-qualifier regex"));

/// The user-facing message for any client error.
///
/// Errors without an HTTP response report their own reason, falling back to
/// [`NETWORK_ERROR`] when the reason is empty.
pub fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::Response(response) => response_message(response),
        other => {
            let reason = other.to_string();
            debug!(error = %reason, "Request failed without a response");
            if reason.trim().is_empty() {
                NETWORK_ERROR.to_string()
            } else {
                reason
            }
        }
    }
}

/// The user-facing message for a non-success response.
pub fn response_message(response: &ErrorResponse) -> String {
    let status = response.status;
    let body = &response.body;

    debug!(status, body = ?body, "Normalizing error response");

    if body.is_html() {
        if status == 403 {
            return HTML_FORBIDDEN.to_string();
        }
        return format!("Server error ({}). Please try again or contact support.", status);
    }

    match status {
        400 => body
            .text()
            .map(str::to_string)
            .or_else(|| body.message())
            .or_else(|| body.joined_errors())
            .unwrap_or_else(|| INVALID_DATA.to_string()),
        401 => SESSION_EXPIRED.to_string(),
        403 => forbidden_message(body),
        404 => NOT_FOUND.to_string(),
        409 => text_or_message(body).unwrap_or_else(|| CONFLICT.to_string()),
        500 => server_error_message(body),
        _ => text_or_message(body)
            .unwrap_or_else(|| format!("Error: {}. Please try again.", status)),
    }
}

/// Whether the error reports a record that already exists.
pub fn is_duplicate_error(error: &ApiError) -> bool {
    let message = error_message(error).to_lowercase();
    message.contains("duplicate") || message.contains("already exists") || error.status() == Some(409)
}

/// Whether the backend rejected the request as malformed (HTTP 400).
pub fn is_validation_error(error: &ApiError) -> bool {
    error.status() == Some(400)
}

/// What the backend said about a failed request, else `fallback`.
///
/// Screens with their own wording use this instead of [`error_message`]: the
/// string body or `message` wins, HTML pages and empty bodies give
/// `fallback`, and client-side failures keep their own reason.
pub fn message_or(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Response(response) if !response.body.is_html() => {
            text_or_message(&response.body).unwrap_or_else(|| fallback.to_string())
        }
        ApiError::Response(_) => fallback.to_string(),
        other => error_message(other),
    }
}

fn text_or_message(body: &ErrorBody) -> Option<String> {
    body.text().map(str::to_string).or_else(|| body.message())
}

/// 403 is also what the backend sends for constraint violations it failed to map.
fn forbidden_message(body: &ErrorBody) -> String {
    if let Some(text) = body.text() {
        return duplicate_entry_message(text, forbidden_key).unwrap_or_else(|| text.to_string());
    }
    if let Some(message) = body.message() {
        return duplicate_entry_message(&message, forbidden_key).unwrap_or(message);
    }
    NO_PERMISSION.to_string()
}

fn server_error_message(body: &ErrorBody) -> String {
    if let Some(text) = body.text() {
        if let Some(message) = duplicate_entry_message(text, server_key) {
            return message;
        }
        if text.contains("cannot be null") {
            if let Some(captures) = NOT_NULL_COLUMN.captures(text) {
                return format!("{} is required.", captures[1].replacen('_', " ", 1));
            }
        }
    }
    body.message().unwrap_or_else(|| SERVER_ERROR.to_string())
}

/// `None` unless the text mentions a duplicate entry.
fn duplicate_entry_message(text: &str, key_label: fn(&str) -> String) -> Option<String> {
    if !text.contains("Duplicate entry") {
        return None;
    }
    let message = match DUPLICATE_ENTRY.captures(text) {
        Some(captures) => format!(
            "A record with {} \"{}\" already exists.",
            key_label(&captures[2]),
            &captures[1]
        ),
        None => DUPLICATE_IN_DATABASE.to_string(),
    };
    Some(message)
}

/// `courses.code_UNIQUE` becomes `code UNIQUE`.
fn forbidden_key(key: &str) -> String {
    KEY_QUALIFIER.replace(key, "").replace('_', " ")
}

/// Only the known table prefixes are stripped; underscores stay.
fn server_key(key: &str) -> String {
    ["rooms.", "courses.", "departments."]
        .iter()
        .fold(key.to_string(), |key, prefix| key.replacen(prefix, "", 1))
}

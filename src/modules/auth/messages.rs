//! Wording for failed sign-in and account flows.
//!
//! These screens speak to people who are not logged in yet, so they override
//! the generic normalizer for the statuses that mean something specific here.

use std::sync::LazyLock;

use regex::Regex;

use samaysetu_core::{ApiError, ErrorBody, error_message, message_or};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const REGISTER_SUCCESS: &str =
    "Registration successful! Please check your email to verify your account.";
pub const RESET_LINK_SENT: &str = "Password reset link sent to your email!";
pub const RESET_SUCCESS: &str = "Password reset successful! You can now login.";

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const INCORRECT_PASSWORD: &str = "Incorrect password. Please try again.";
pub const ACCOUNT_NOT_FOUND: &str = "Account not found. Please check your email or register.";
pub const EMAIL_NOT_VERIFIED: &str =
    "Email not verified. Please check your inbox and verify your email.";
pub const ACCOUNT_NOT_VERIFIED: &str = "Account not verified. Please verify your email first.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const FORGOT_PASSWORD_FAILED: &str = "Failed to send reset link. Please try again.";
pub const RESET_FAILED: &str =
    "Password reset failed. Please try again or request a new reset link.";

static UNEXPECTED_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^An unexpected error occurred:\s*\d+\s*[A-Z_]+\s*"?"#)
        .expect("valid unexpected-error regex")
});

static TRAILING_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']$"#).expect("valid trailing-quote regex"));

pub fn login_error_message(error: &ApiError) -> String {
    let Some(response) = error.response() else {
        return error_message(error);
    };
    match response.status {
        401 => INCORRECT_PASSWORD.to_string(),
        404 => ACCOUNT_NOT_FOUND.to_string(),
        403 => {
            // Only a plain-string body is checked for the verification hint.
            let mentions_verify = match &response.body {
                ErrorBody::Text(text) => text.to_lowercase().contains("verify"),
                ErrorBody::Json(serde_json::Value::String(text)) => {
                    text.to_lowercase().contains("verify")
                }
                _ => false,
            };
            if mentions_verify {
                EMAIL_NOT_VERIFIED.to_string()
            } else {
                ACCOUNT_NOT_VERIFIED.to_string()
            }
        }
        _ => message_or(error, LOGIN_FAILED),
    }
}

pub fn register_error_message(error: &ApiError) -> String {
    message_or(error, REGISTER_FAILED)
}

pub fn forgot_password_error_message(error: &ApiError) -> String {
    message_or(error, FORGOT_PASSWORD_FAILED)
}

/// Strips the backend's wrapped-exception prefix from reset failures.
///
/// `An unexpected error occurred: 400 BAD_REQUEST "Reset token expired"`
/// reads as `Reset token expired`.
pub fn reset_password_error_message(error: &ApiError) -> String {
    let Some(response) = error.response() else {
        return error_message(error);
    };
    let body = &response.body;
    if let Some(text) = body.text() {
        let cleaned = UNEXPECTED_PREFIX.replace(text, "");
        return TRAILING_QUOTE.replace(&cleaned, "").into_owned();
    }
    body.message()
        .or_else(|| match body.field("error") {
            Some(serde_json::Value::String(error)) if !error.is_empty() => Some(error.clone()),
            _ => None,
        })
        .unwrap_or_else(|| RESET_FAILED.to_string())
}

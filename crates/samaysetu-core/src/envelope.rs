//! Structured error envelope.
//!
//! Backends that know about the envelope answer failures with
//! `{"kind": "...", "message": "...", "details": {...}}`; the client then
//! takes the kind at face value. For everything else the kind is derived from
//! the status code and the message from [`error_message`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_message::error_message;
use crate::errors::{ApiError, ErrorBody};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Validation,
    SessionExpired,
    Permission,
    Conflict,
    NotFound,
    Server,
    Unknown,
}

impl ErrorKind {
    /// Kinds that end the current session.
    pub fn ends_session(self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Validation => "validation",
            Self::SessionExpired => "session_expired",
            Self::Permission => "permission",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    /// Reads an envelope the backend sent explicitly.
    ///
    /// Returns `None` when the body is not a JSON object with a known `kind`.
    pub fn from_body(body: &ErrorBody) -> Option<Self> {
        match body {
            ErrorBody::Json(value @ Value::Object(map)) if map.contains_key("kind") => {
                serde_json::from_value(value.clone()).ok()
            }
            _ => None,
        }
    }

    /// Builds the envelope for any client error.
    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::Response(response) => {
                if let Some(envelope) = Self::from_body(&response.body) {
                    return envelope;
                }
                let message = error_message(error);
                let kind = kind_for_status(response.status, &message);
                Self {
                    kind,
                    message,
                    details: response.body.field("errors").cloned(),
                }
            }
            ApiError::Network(_) => Self::new(ErrorKind::Network, error_message(error)),
            ApiError::Validation(fields) => Self {
                kind: ErrorKind::Validation,
                message: error_message(error),
                details: serde_json::to_value(fields.clone().into_map()).ok(),
            },
            ApiError::Decode(_) | ApiError::Session(_) => {
                Self::new(ErrorKind::Unknown, error_message(error))
            }
        }
    }

    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }
}

/// Constraint violations the backend reports as 403 or 500 count as conflicts.
fn kind_for_status(status: u16, message: &str) -> ErrorKind {
    let lowered = message.to_lowercase();
    let duplicate = lowered.contains("duplicate") || lowered.contains("already exists");
    match status {
        400 => ErrorKind::Validation,
        401 => ErrorKind::SessionExpired,
        403 | 500 if duplicate => ErrorKind::Conflict,
        403 => ErrorKind::Permission,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        500..=599 => ErrorKind::Server,
        _ => ErrorKind::Unknown,
    }
}

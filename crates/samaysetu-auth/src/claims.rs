//! Claims carried by the backend's access tokens.

use serde::{Deserialize, Serialize};

/// Access token claims as issued by the SamaySetu backend.
///
/// The subject is the account email. `role` is only present on newer backends;
/// the login response carries it otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account email (subject claim)
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
    /// Issued-at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
}

//! Token inspection.
//!
//! The client never holds the signing secret, so tokens are decoded without
//! signature verification. This is only used to show who is logged in and to
//! notice a locally expired token before the backend rejects it; the backend
//! remains the authority.

use std::collections::HashSet;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, Validation, decode};

use samaysetu_core::ApiError;

use crate::claims::Claims;

/// Decodes the claims of a token without checking its signature or expiry.
///
/// # Errors
///
/// Returns [`ApiError::Session`] when the token is not a well-formed JWT.
pub fn decode_claims(token: &str) -> Result<Claims, ApiError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| ApiError::Session(format!("Malformed token: {}", e)))
}

/// Whether the token's `exp` lies in the past.
///
/// Tokens without `exp`, and tokens that cannot be decoded, are left for the
/// backend to judge.
pub fn is_expired(token: &str) -> bool {
    match decode_claims(token) {
        Ok(Claims { exp: Some(exp), .. }) => (exp as i64) <= Utc::now().timestamp(),
        _ => false,
    }
}

//! Decides when a failed response ends the session.

use samaysetu_core::{ErrorBody, ErrorEnvelope, ErrorKind};

const AUTH_MARKERS: [&str; 3] = ["token", "unauthorized", "forbidden"];

/// Whether a failed response means the session is no longer valid.
///
/// A 401 always does. A 403 only does when the backend says so: either an
/// explicit `session_expired`/`permission` envelope, or a message that talks
/// about the token or authorization. Other 403s are constraint violations
/// the backend reports as forbidden and leave the session alone.
pub fn ends_session(status: u16, body: &ErrorBody) -> bool {
    match status {
        401 => true,
        403 => forbidden_ends_session(body),
        _ => false,
    }
}

fn forbidden_ends_session(body: &ErrorBody) -> bool {
    if let Some(envelope) = ErrorEnvelope::from_body(body)
        && matches!(envelope.kind, ErrorKind::SessionExpired | ErrorKind::Permission)
    {
        return envelope.kind.ends_session();
    }

    body.inspectable_text().is_some_and(|text| {
        let lowered = text.to_lowercase();
        AUTH_MARKERS.iter().any(|marker| lowered.contains(marker))
    })
}

//! Shared plumbing for client-side form validation.
//!
//! Each form first checks presence and cross-field rules, recording one
//! message per field. Only a form that passes those checks is turned into a
//! payload, which is then checked against the backend's column constraints
//! with `validator`.

use samaysetu_core::{ApiError, FieldErrors};
use validator::Validate;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if is_blank(value) {
        errors.add(field, message);
    }
}

pub(crate) fn require_some<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<T>,
    message: &str,
) {
    if value.is_none() {
        errors.add(field, message);
    }
}

/// Blank text becomes `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Fails with the recorded form errors, or builds and validates the payload.
pub(crate) fn finish<P, F>(errors: FieldErrors, build: F) -> Result<P, ApiError>
where
    P: Validate,
    F: FnOnce() -> P,
{
    errors.into_result()?;
    let payload = build();
    payload.validate()?;
    Ok(payload)
}

/// Minutes from `HH:MM[:SS]` `start` to `end`, negative when `end` is earlier.
pub fn minutes_between(start: &str, end: &str) -> Option<i32> {
    Some(minutes_of_day(end)? - minutes_of_day(start)?)
}

pub(crate) fn minutes_of_day(time: &str) -> Option<i32> {
    let mut parts = time.trim().split(':');
    let hour: i32 = parts.next()?.parse().ok()?;
    let minute: i32 = parts.next()?.parse().ok()?;
    if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
        return None;
    }
    Some(hour * 60 + minute)
}

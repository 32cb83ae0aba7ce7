//! # SamaySetu Core
//!
//! Error types and error-message normalization shared by every SamaySetu crate.
//!
//! - [`errors`]: [`ApiError`], the error every client operation returns
//! - [`error_message`]: one display string per failure, plus duplicate and
//!   validation checks
//! - [`envelope`]: the structured `{kind, message, details}` error record
//! - [`serde`]: serde helpers for blank optional strings and audit timestamps
//!
//! # Example
//!
//! ```ignore
//! use samaysetu_core::{ApiError, ErrorBody, error_message};
//!
//! let err = ApiError::from_status(
//!     403,
//!     ErrorBody::from_text("Duplicate entry 'CS101' for key 'courses.code_UNIQUE'"),
//! );
//! assert_eq!(
//!     error_message(&err),
//!     "A record with code UNIQUE \"CS101\" already exists."
//! );
//! ```

pub mod envelope;
pub mod error_message;
pub mod errors;
pub mod serde;

pub use envelope::{ErrorEnvelope, ErrorKind};
pub use error_message::{
    error_message, is_duplicate_error, is_validation_error, message_or, response_message,
};
pub use errors::{ApiError, ErrorBody, ErrorResponse, FieldErrors};

//! # SamaySetu Auth
//!
//! Session handling for the SamaySetu client.
//!
//! - [`session`]: the [`Session`] record and the [`SessionStore`] trait with
//!   in-memory and file-backed implementations
//! - [`claims`] and [`jwt`]: reading identity and expiry out of a token
//! - [`navigator`]: the [`Navigator`] seam used for login landing and forced
//!   logout
//!
//! # Example
//!
//! ```ignore
//! use samaysetu_auth::{FileSessionStore, SessionStore, is_expired};
//!
//! let store = FileSessionStore::open(".samaysetu/session.json");
//! if let Some(token) = store.token() {
//!     if is_expired(&token) {
//!         store.clear()?;
//!     }
//! }
//! ```

pub mod claims;
pub mod jwt;
pub mod navigator;
pub mod session;

pub use claims::Claims;
pub use jwt::{decode_claims, is_expired};
pub use navigator::{LOGIN_PATH, Navigator, TracingNavigator, landing_path};
pub use session::{FileSessionStore, MemorySessionStore, ROLE_ADMIN, ROLE_TEACHER, Session, SessionStore};

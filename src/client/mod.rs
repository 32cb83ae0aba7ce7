//! The authenticated HTTP client and its session guard.

pub mod guard;
pub mod http;

pub use guard::ends_session;
pub use http::ApiClient;

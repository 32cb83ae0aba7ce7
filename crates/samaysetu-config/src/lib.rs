//! # SamaySetu Config
//!
//! Configuration types for the SamaySetu client.
//!
//! Each structure is loaded from environment variables with sensible defaults:
//!
//! - [`api`]: backend base URL and request timeout
//! - [`session`]: where the login session is persisted
//! - [`college`]: the institutional email domain accepted by the forms
//! - [`logging`]: log level and log file directory
//!
//! # Example
//!
//! ```ignore
//! use samaysetu_config::{ApiConfig, CollegeConfig, LogConfig, SessionConfig};
//!
//! dotenvy::dotenv().ok();
//! let api = ApiConfig::from_env();
//! let session = SessionConfig::from_env();
//! let college = CollegeConfig::from_env();
//! let logging = LogConfig::from_env();
//! ```

pub mod api;
pub mod college;
pub mod logging;
pub mod session;

pub use api::ApiConfig;
pub use college::CollegeConfig;
pub use logging::LogConfig;
pub use session::SessionConfig;

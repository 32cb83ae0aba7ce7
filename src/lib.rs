//! # SamaySetu Client
//!
//! A typed client and console for the SamaySetu college timetable backend.
//! It signs staff in, keeps their session on disk, manages the admin
//! catalogue (departments, courses, rooms, divisions, academic years, time
//! slots, staff) and reads the published timetable.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── samaysetu-core/    # ApiError, error-message normalization, envelope
//! ├── samaysetu-config/  # Environment-driven configuration
//! ├── samaysetu-auth/    # Session store, token claims, navigation seam
//! └── samaysetu-models/  # Entities, forms and their validation
//! src/
//! ├── client/            # Authenticated HTTP client and session guard
//! ├── modules/           # One service per backend resource
//! ├── cli/               # samaysetu-cli commands
//! ├── logging.rs         # Console and rolling-file tracing
//! └── state.rs           # Wiring for the console
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `mod.rs`: module exports
//! - `service.rs`: calls against the backend
//!
//! ## Sessions
//!
//! The bearer token lives in a [`SessionStore`](samaysetu_auth::SessionStore)
//! injected into [`ApiClient`](client::ApiClient). A 401, or a 403 that reads
//! like an auth failure, clears the store and navigates to `/login`.
//!
//! ## Quick Start
//!
//! ```bash
//! SAMAYSETU_API_URL=http://localhost:8083
//! SAMAYSETU_COLLEGE_DOMAIN=@mitaoe.ac.in
//! ```
//!
//! ```bash
//! cargo run --bin samaysetu-cli -- login
//! cargo run --bin samaysetu-cli -- dashboard
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: console commands
//! - [`client`]: HTTP client and forced-logout guard
//! - [`logging`]: tracing setup
//! - [`modules`]: resource services (auth, teachers, rooms, timetable, ...)
//! - [`state`]: shared application state

pub mod cli;
pub mod client;
pub mod logging;
pub mod modules;
pub mod state;

// Re-export workspace crates for convenience
pub use samaysetu_auth;
pub use samaysetu_config;
pub use samaysetu_core;
pub use samaysetu_models;

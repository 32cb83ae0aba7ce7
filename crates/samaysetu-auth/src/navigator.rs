//! Where the user goes after login and after a forced logout.

use tracing::info;

use crate::session::ROLE_ADMIN;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Receives navigation requests from the client.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Landing page after a successful login.
pub fn landing_path(role: &str) -> &'static str {
    if role.eq_ignore_ascii_case(ROLE_ADMIN) {
        ADMIN_DASHBOARD_PATH
    } else {
        DASHBOARD_PATH
    }
}

/// Logs each navigation and goes nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "Navigating");
    }
}

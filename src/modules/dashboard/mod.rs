pub mod service;

pub use service::{DashboardService, STATS_FAILED};

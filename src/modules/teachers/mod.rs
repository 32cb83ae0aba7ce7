pub mod service;

pub use service::{CHANGE_PASSWORD_FAILED, PROFILE_UPDATE_FAILED, TeacherService};

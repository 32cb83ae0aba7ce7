pub mod messages;
pub mod service;

pub use messages::{
    forgot_password_error_message, login_error_message, register_error_message,
    reset_password_error_message,
};
pub use service::AuthService;

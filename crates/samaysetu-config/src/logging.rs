use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Directive used when `RUST_LOG` is unset.
    pub level: String,
    pub directory: PathBuf,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            directory: env::var("SAMAYSETU_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/logs")),
        }
    }
}

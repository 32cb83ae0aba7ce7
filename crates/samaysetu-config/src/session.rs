use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            file: env::var("SAMAYSETU_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".samaysetu/session.json")),
        }
    }
}

//! Login session persistence.
//!
//! The session is the bearer token plus the identity shown in the console.
//! Stores are injected into the HTTP client; nothing reads a global.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use samaysetu_core::ApiError;

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_TEACHER: &str = "TEACHER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub name: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ROLE_ADMIN)
    }
}

/// Where the current session lives.
pub trait SessionStore: Send + Sync {
    /// The bearer token, if logged in.
    fn token(&self) -> Option<String>;

    fn session(&self) -> Option<Session>;

    fn save(&self, session: Session) -> Result<(), ApiError>;

    /// Removes both the token and the session record.
    fn clear(&self) -> Result<(), ApiError>;
}

/// Session kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    fn session(&self) -> Option<Session> {
        self.session.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, session: Session) -> Result<(), ApiError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| ApiError::Session("session lock poisoned".to_string()))?;
        *guard = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| ApiError::Session("session lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// On-disk layout. The token and the identity are stored under separate keys
/// so that a stale identity never outlives its token.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "jwt_token", default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(rename = "auth-storage", default, skip_serializing_if = "Option::is_none")]
    auth_storage: Option<AuthStorage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AuthStorage {
    state: AuthState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthState {
    user: Option<StoredUser>,
    token: Option<String>,
    #[serde(default)]
    is_authenticated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    email: String,
    role: String,
    #[serde(default)]
    name: String,
}

/// Session persisted as a JSON file so it survives between console runs.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<SessionFile>,
}

impl FileSessionStore {
    /// Opens the store, reading any session already on disk.
    ///
    /// An unreadable or corrupt file is treated as logged out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring corrupt session file");
                SessionFile::default()
            }),
            Err(_) => SessionFile::default(),
        };
        Self {
            path,
            cached: RwLock::new(cached),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, file: &SessionFile) -> Result<(), ApiError> {
        if file.token.is_none() && file.auth_storage.is_none() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(ApiError::Session(e.to_string())),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ApiError::Session(e.to_string()))?;
        }
        let raw =
            serde_json::to_string_pretty(file).map_err(|e| ApiError::Session(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| ApiError::Session(e.to_string()))?;
        debug!(path = %self.path.display(), "Session file written");
        Ok(())
    }

    fn update(&self, file: SessionFile) -> Result<(), ApiError> {
        self.persist(&file)?;
        let mut guard = self
            .cached
            .write()
            .map_err(|_| ApiError::Session("session lock poisoned".to_string()))?;
        *guard = file;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.cached.read().ok().and_then(|file| file.token.clone())
    }

    fn session(&self) -> Option<Session> {
        let file = self.cached.read().ok()?;
        let token = file.token.clone()?;
        let user = file.auth_storage.as_ref()?.state.user.clone()?;
        Some(Session {
            token,
            email: user.email,
            role: user.role,
            name: user.name,
        })
    }

    fn save(&self, session: Session) -> Result<(), ApiError> {
        let file = SessionFile {
            token: Some(session.token.clone()),
            auth_storage: Some(AuthStorage {
                state: AuthState {
                    user: Some(StoredUser {
                        email: session.email,
                        role: session.role,
                        name: session.name,
                    }),
                    token: Some(session.token),
                    is_authenticated: true,
                },
                version: 0,
            }),
        };
        self.update(file)
    }

    /// Forgets the session in memory first, so a failed file removal still
    /// stops the token from being sent.
    fn clear(&self) -> Result<(), ApiError> {
        let mut guard = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        *guard = SessionFile::default();
        drop(guard);
        self.persist(&SessionFile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "header.payload.signature".to_string(),
            email: "asha.patil@mitaoe.ac.in".to_string(),
            role: ROLE_TEACHER.to_string(),
            name: "asha patil".to_string(),
        }
    }

    #[test]
    fn test_memory_store_save_and_clear() {
        let store = MemorySessionStore::new();
        assert!(store.token().is_none());

        store.save(session()).unwrap();
        assert_eq!(store.token().as_deref(), Some("header.payload.signature"));
        assert_eq!(store.session(), Some(session()));

        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_is_admin_ignores_case() {
        let mut s = session();
        assert!(!s.is_admin());
        s.role = "admin".to_string();
        assert!(s.is_admin());
    }

    #[test]
    fn test_file_store_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileSessionStore::open(&path);
        store.save(session()).unwrap();
        assert!(path.exists());

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.session(), Some(session()));
        assert_eq!(reopened.token().as_deref(), Some("header.payload.signature"));
    }

    #[test]
    fn test_file_store_layout_uses_two_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        FileSessionStore::open(&path).save(session()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["jwt_token"], "header.payload.signature");
        assert_eq!(raw["auth-storage"]["state"]["user"]["role"], "TEACHER");
        assert_eq!(raw["auth-storage"]["state"]["isAuthenticated"], true);
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.save(session()).unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert!(store.token().is_none());
        assert!(FileSessionStore::open(&path).session().is_none());
    }

    #[test]
    fn test_file_store_clear_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("missing.json"));
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::open(&path);
        assert!(store.token().is_none());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_failed_clear_still_forgets_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(&path);
        store.save(session()).unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(store.clear(), Err(ApiError::Session(_))));
        assert!(store.token().is_none());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_token_without_identity_is_not_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"jwt_token":"abc"}"#).unwrap();

        let store = FileSessionStore::open(&path);
        assert_eq!(store.token().as_deref(), Some("abc"));
        assert!(store.session().is_none());
    }
}

//! In-process mock of the SamaySetu backend.
//!
//! Every request is recorded and answered from a table of canned replies
//! keyed by method and path. Unknown routes answer 404 with an empty body.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use fake::Fake;
use fake::faker::internet::en::Username;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use samaysetu::client::ApiClient;
use samaysetu::samaysetu_auth::{MemorySessionStore, Navigator, Session, SessionStore};
use samaysetu::samaysetu_config::{ApiConfig, CollegeConfig};

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
}

#[derive(Debug, Default)]
struct MockInner {
    replies: HashMap<(String, String), Reply>,
    requests: Vec<RecordedRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<MockInner>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .replies
            .insert((method.to_string(), path.to_string()), reply);
        self
    }

    /// Answers `method path` with a JSON body.
    pub fn json(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.on(
            method,
            path,
            Reply {
                status,
                content_type: "application/json",
                body: body.to_string(),
            },
        )
    }

    /// Answers `method path` with a plain-text body.
    pub fn text(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.on(
            method,
            path,
            Reply {
                status,
                content_type: "text/plain",
                body: body.to_string(),
            },
        )
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Requests that hit `method path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method.as_str() && r.path == path)
            .collect()
    }

    /// Starts serving on an ephemeral port and returns the base URL.
    pub async fn serve(&self) -> String {
        let app = Router::new().fallback(respond).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn respond(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header = |name| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body,
    };

    let mut inner = backend.inner.lock().unwrap();
    let reply = inner
        .replies
        .get(&(recorded.method.clone(), recorded.path.clone()))
        .cloned();
    inner.requests.push(recorded);
    drop(inner);

    match reply {
        Some(reply) => (
            StatusCode::from_u16(reply.status).unwrap(),
            [(CONTENT_TYPE, reply.content_type)],
            reply.body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serves one connection with `status_line` and a body shorter than its
/// declared `Content-Length`, then hangs up.
#[allow(dead_code)]
pub async fn truncated_reply(status_line: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 8192];
        let _ = socket.read(&mut request).await;
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: 100\r\n\r\nexpired",
            status_line
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    format!("http://{}", addr)
}

/// Remembers every navigation instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

#[allow(dead_code)]
pub struct TestClient {
    pub backend: MockBackend,
    pub client: ApiClient,
    pub session: Arc<MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// A client pointed at `backend`, optionally already logged in.
pub async fn client_for(backend: &MockBackend, session: Option<Session>) -> TestClient {
    let base_url = backend.serve().await;
    build_client(backend.clone(), base_url, session)
}

/// A client pointed at a server the test runs itself.
#[allow(dead_code)]
pub fn client_at(base_url: String, session: Option<Session>) -> TestClient {
    build_client(MockBackend::new(), base_url, session)
}

fn build_client(backend: MockBackend, base_url: String, session: Option<Session>) -> TestClient {
    let store = Arc::new(match session {
        Some(session) => MemorySessionStore::with_session(session),
        None => MemorySessionStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        ApiConfig::with_base_url(base_url),
        store.clone(),
        navigator.clone(),
    )
    .unwrap();

    TestClient {
        backend,
        client,
        session: store,
        navigator,
    }
}

#[allow(dead_code)]
pub fn admin_session() -> Session {
    Session {
        token: "admin-token".to_string(),
        email: "admin@mitaoe.ac.in".to_string(),
        role: "ADMIN".to_string(),
        name: "Admin".to_string(),
    }
}

#[allow(dead_code)]
pub fn college() -> CollegeConfig {
    CollegeConfig::default()
}

/// A fresh address on the college domain.
#[allow(dead_code)]
pub fn college_email() -> String {
    let user: String = Username().fake();
    format!("{}@mitaoe.ac.in", user.to_lowercase())
}

#[allow(dead_code)]
pub fn stored_token(client: &TestClient) -> Option<String> {
    client.session.token()
}

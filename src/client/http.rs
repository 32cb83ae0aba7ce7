use std::sync::Arc;
use std::time::Instant;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use samaysetu_auth::{LOGIN_PATH, Navigator, SessionStore};
use samaysetu_config::ApiConfig;
use samaysetu_core::{ApiError, ErrorBody};

use crate::client::guard::ends_session;

/// HTTP client for the SamaySetu backend.
///
/// Every request carries the stored bearer token. Failed responses come back
/// as [`ApiError::Response`] after the session guard has run: a 401, or a 403
/// that is really an auth failure, clears the session and sends the user to
/// the login page.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            config,
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send(Method::GET, path, |req| req).await?;
        decode(&text)
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let text = self.send(Method::GET, path, |req| req.query(query)).await?;
        decode(&text)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.send(Method::POST, path, |req| req.json(body)).await?;
        decode(&text)
    }

    /// POSTs a JSON body and ignores the response body.
    ///
    /// Admin endpoints answer a save with either the stored record or a
    /// confirmation string; callers refetch instead of reading either.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, |req| req.json(body)).await?;
        Ok(())
    }

    /// PUTs a JSON body and ignores the response body.
    pub async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, |req| req.json(body)).await?;
        Ok(())
    }

    /// Sends a JSON body to an endpoint that answers with a plain message.
    pub async fn post_for_message<B>(&self, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let text = self.send(Method::POST, path, |req| req.json(body)).await?;
        Ok(message_text(text))
    }

    /// GETs an endpoint that answers with a plain message.
    pub async fn get_message<Q>(&self, path: &str, query: &Q) -> Result<String, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let text = self.send(Method::GET, path, |req| req.query(query)).await?;
        Ok(message_text(text))
    }

    /// POSTs a raw text body and ignores the response body.
    pub async fn post_text(&self, path: &str, body: String) -> Result<(), ApiError> {
        self.send(Method::POST, path, |req| {
            req.header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(body)
        })
        .await?;
        Ok(())
    }

    /// POSTs without a body and ignores the response body.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::POST, path, |req| req).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, |req| req).await?;
        Ok(())
    }

    async fn send<F>(&self, method: Method, path: &str, build: F) -> Result<String, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let start = Instant::now();

        let mut request = self.http.request(method.clone(), self.config.url(path));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        let request = build(request);

        debug!(request_id = %request_id, method = %method, path = %path, "Sending request");

        let response = request.send().await.map_err(|e| {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Request failed before a response"
            );
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if (200..=299).contains(&status) => {
                return Err(ApiError::Network(e.to_string()));
            }
            // The status alone still has to reach the session guard.
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    status = %status,
                    error = %e,
                    "Failed to read error response body"
                );
                String::new()
            }
        };
        let latency = start.elapsed();

        match status {
            200..=299 => {
                info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status,
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
                return Ok(text);
            }
            500..=599 => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status,
                    latency_ms = %latency.as_millis(),
                    "Server error"
                );
            }
            _ => {
                warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status,
                    latency_ms = %latency.as_millis(),
                    "Client error"
                );
            }
        }

        let body = ErrorBody::from_text(text);
        if ends_session(status, &body) {
            self.force_logout(status);
        }
        Err(ApiError::from_status(status, body))
    }

    fn force_logout(&self, status: u16) {
        warn!(status, "Session rejected by backend, logging out");
        if let Err(e) = self.session.clear() {
            error!(error = %e, "Failed to clear session");
        }
        self.navigator.navigate(LOGIN_PATH);
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// A plain-text message, or a JSON string literal unwrapped.
fn message_text(text: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(serde_json::Value::String(message)) => message,
        _ => text,
    }
}

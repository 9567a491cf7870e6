//! HTTP client for storefront API communication.
//!
//! This module provides the [`HttpClient`] type: a single shared
//! request-executing object wrapping the base URL, the fixed timeout, and
//! the default headers. It attaches the stored credential to outgoing
//! requests and reacts to the response categories that carry auth side
//! effects.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{AuthData, Credential, TokenStore, AUTHORIZATION_HEADER};
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::notify::{Notify, TracingNotify};
use crate::clients::status;
use crate::config::StorefrontConfig;
use crate::paths;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the storefront backend.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and JSON content negotiation
/// - Attaching the stored [`Credential`] as the `Authorization` header
/// - Auth side effects on login/register/logout responses
/// - Clearing stored auth state and raising the session-expired hook on
///   unauthorized responses
///
/// This is the only component permitted to mutate the [`TokenStore`] as a
/// result of network activity.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storefront_api::{HttpClient, HttpMethod, HttpRequest, StorefrontConfig, TokenStore};
///
/// let config = StorefrontConfig::builder().build()?;
/// let store = Arc::new(TokenStore::new());
/// let client = HttpClient::new(&config, store);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "categories").build()?;
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api-ecom.duthanhduoc.com`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Shared auth state, mutated only by the response pipeline.
    store: Arc<TokenStore>,
    /// Sink for user-visible notifications.
    notify: Arc<dyn Notify>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with the default `tracing`-backed notifier.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &StorefrontConfig, store: Arc<TokenStore>) -> Self {
        Self::with_notifier(config, store, Arc::new(TracingNotify))
    }

    /// Creates a new HTTP client with a custom notification sink.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, as with
    /// [`new`](Self::new).
    #[must_use]
    pub fn with_notifier(
        config: &StorefrontConfig,
        store: Arc<TokenStore>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            store,
            notify,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the shared token store.
    #[must_use]
    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Returns the notification sink.
    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn Notify> {
        &self.notify
    }

    /// Sends an HTTP request to the storefront backend.
    ///
    /// Before the request is sent, the stored credential (if any) is attached
    /// as the `Authorization` header. After a 2xx response, auth side effects
    /// are applied for the login, register, and logout paths. After a non-2xx
    /// response:
    ///
    /// - status other than 422 raises a best-effort [`Notify::error`] with
    ///   the server's message,
    /// - status 401 additionally clears the token store and raises
    ///   [`Notify::session_expired`],
    ///
    /// and the call returns [`HttpError::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network or timeout error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let path = request.path.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url, path);

        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Attach the credential read at send time; absence of a credential
        // sends the request unauthenticated.
        if let Some(credential) = self.store.credential() {
            if !credential.is_empty() {
                req_builder = req_builder.header(AUTHORIZATION_HEADER, credential.as_str());
            }
        }

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        let response = HttpResponse::new(code, headers, body);

        if response.is_ok() {
            self.apply_auth_side_effects(path, &response);
            return Ok(response);
        }

        let message = response.message().map(ToString::to_string);

        if code != status::UNPROCESSABLE_ENTITY {
            self.notify
                .error(message.as_deref().unwrap_or("request failed"));
        }

        if code == status::UNAUTHORIZED {
            tracing::warn!("unauthorized response from {path}; clearing stored auth state");
            self.store.clear_all();
            self.notify.session_expired();
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            data: response.data().cloned(),
        }))
    }

    /// Applies login/register/logout side effects to the token store.
    fn apply_auth_side_effects(&self, path: &str, response: &HttpResponse) {
        if path == paths::LOGIN || path == paths::REGISTER {
            let Some(data) = response.data() else {
                tracing::warn!("{path} response carried no auth data; nothing persisted");
                return;
            };
            match serde_json::from_value::<AuthData>(data.clone()) {
                Ok(auth) => {
                    self.store.save_credential(Credential::new(auth.access_token));
                    self.store.save_profile(auth.user);
                    tracing::debug!("persisted credential and profile from {path} response");
                }
                Err(e) => {
                    tracing::warn!("{path} response did not match the auth envelope: {e}");
                }
            }
        } else if path == paths::LOGOUT {
            self.store.clear_all();
            tracing::debug!("cleared stored credential and profile after logout");
        }
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as for [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(crate::clients::http_request::HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// The body is optional because the logout endpoint takes none.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as for [`request`](Self::request).
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder =
            HttpRequest::builder(crate::clients::http_request::HttpMethod::Post, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as for [`request`](Self::request).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(crate::clients::http_request::HttpMethod::Put, path)
            .body(body)
            .build()?;
        self.request(request).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// The batch purchase delete sends its identifier list as the body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as for [`request`](Self::request).
    pub async fn delete(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder =
            HttpRequest::builder(crate::clients::http_request::HttpMethod::Delete, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

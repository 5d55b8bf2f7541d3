//! Inkwell API client
//!
//! Every request built through [`ApiClient::request`] asks the configured
//! [`TokenSource`] for the current access token and, when one exists, sends it
//! as a bearer credential. Responses are never inspected for auth failures:
//! a 401 is returned to the caller as [`ClientError::AuthenticationFailed`]
//! and nothing is retried or refreshed.

pub mod auth;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default auth service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Supplies the access token attached to outgoing requests
///
/// Read on every request, so a token stored after the client was built is
/// picked up by the next call.
pub trait TokenSource {
    fn access_token(&self) -> Option<String>;
}

/// Inkwell API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Option<Rc<dyn TokenSource>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token_source", &self.tokens.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, attaching the bearer token if one is stored
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method.clone(), url);

        match self.tokens.as_ref().and_then(|t| t.access_token()) {
            Some(token) => {
                debug!(%method, path, "Dispatching authenticated request");
                request.header(header::AUTHORIZATION, format!("Bearer {token}"))
            }
            None => {
                debug!(%method, path, "Dispatching anonymous request");
                request
            }
        }
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    tokens: Option<Rc<dyn TokenSource>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set where bearer tokens are read from
    pub fn token_source(mut self, tokens: Rc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration(
                "base_url cannot be empty".into(),
            ));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("inkwell-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens: self.tokens,
        })
    }
}

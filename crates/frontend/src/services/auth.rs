//! Authentication API service
//!
//! Failures of any kind (transport, rejected credentials, bad payloads) are
//! logged here with their cause and reported upward as a single generic error.

use inkwell_core::{AuthResponse, LoginRequest, RegisterRequest};
use inkwell_http::client::{ApiClient, error::ClientError};
use thiserror::Error;

/// Generic failure surfaced to the forms
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User login failed!")]
    LoginFailed(#[source] ClientError),

    #[error("User registration failed!")]
    RegistrationFailed(#[source] ClientError),
}

/// Authentication API service
#[derive(Clone, Debug)]
pub struct AuthApiService {
    client: ApiClient,
}

impl AuthApiService {
    /// Create a new auth API service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Sign in with email and password
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        self.client.login(request).await.map_err(|e| {
            tracing::error!(error = %e, "User login failed!");
            AuthError::LoginFailed(e)
        })
    }

    /// Create an account
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.client.register(request).await.map_err(|e| {
            tracing::error!(error = %e, "User registration failed!");
            AuthError::RegistrationFailed(e)
        })
    }
}

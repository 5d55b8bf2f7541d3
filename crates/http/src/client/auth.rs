//! Authentication endpoints

use super::{ApiClient, error::ClientError};
use inkwell_core::{AuthConfig, AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    /// Exchange credentials for a token pair and identity
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, AuthConfig::LOGIN_ENDPOINT)
            .json(request);
        self.execute(req).await
    }

    /// Create an account; the service answers with the same shape as login
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, AuthConfig::REGISTER_ENDPOINT)
            .json(request);
        self.execute(req).await
    }
}

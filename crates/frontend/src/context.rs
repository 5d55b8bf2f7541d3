//! Session context: the one owned bundle of session state
//!
//! Created once at the composition root and handed to whatever needs the
//! current user, the tokens or an API client. Clones share the same jar and
//! stores.

use crate::config::FrontendConfig;
use crate::cookies::{CookieStore, MemoryCookieStore};
use crate::credentials::CredentialStore;
use crate::session::SessionStore;
use inkwell_core::{AuthResponse, User};
use inkwell_http::client::{ApiClient, error::ClientError};
use std::rc::Rc;

/// Cookie jar plus the stores persisted into it
#[derive(Clone)]
pub struct SessionContext {
    jar: Rc<dyn CookieStore>,
    session: Rc<SessionStore>,
    credentials: Rc<CredentialStore>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// A fresh context over an empty jar
    pub fn new() -> Self {
        Self::rehydrate(Rc::new(MemoryCookieStore::new()))
    }

    /// Load a session from whatever the jar holds
    ///
    /// Never fails: missing cookies read as no tokens and an anonymous user,
    /// and so does a `user` cookie that does not decode.
    pub fn rehydrate(jar: Rc<dyn CookieStore>) -> Self {
        let context = Self {
            session: Rc::new(SessionStore::new(jar.clone())),
            credentials: Rc::new(CredentialStore::new(jar.clone())),
            jar,
        };

        tracing::debug!(
            authenticated = context.is_authenticated(),
            "Session context rehydrated"
        );
        context
    }

    pub fn jar(&self) -> &Rc<dyn CookieStore> {
        &self.jar
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The current identity, anonymous if nobody signed in
    pub fn user(&self) -> User {
        self.session.get()
    }

    /// Whether an access token is available to send
    pub fn is_authenticated(&self) -> bool {
        self.credentials.access().is_some()
    }

    /// Overwrite the session with a successful login or registration
    pub fn apply(&self, response: &AuthResponse) {
        let token = &response.token;
        self.session.set(response.user.clone());
        self.credentials
            .set_access(&token.access_token, token.expires_in);
        self.credentials
            .set_refresh(&token.refresh_token, token.expires_in);
    }

    /// Value for the `Cookie` header of a page navigation
    pub fn cookie_header(&self) -> Option<String> {
        self.jar.header_value()
    }

    /// Build an API client that reads its bearer token from this context
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is unusable
    pub fn api_client(&self, config: &FrontendConfig) -> Result<ApiClient, ClientError> {
        ApiClient::builder()
            .base_url(config.api.base_url.clone())
            .timeout(config.api.timeout())
            .token_source(self.credentials.clone())
            .build()
    }
}

//! Client-side session layer for Inkwell
//!
//! Everything hangs off a [`SessionContext`] built at the composition root:
//! the cookie jar, the identity store, the token store, and the API client
//! whose requests carry the stored access token.

pub mod auth;
pub mod config;
pub mod context;
pub mod cookies;
pub mod credentials;
pub mod navigation;
pub mod services;
pub mod session;

pub use auth::{AuthController, SubmitOutcome};
pub use config::{ApiConfig, FrontendConfig};
pub use context::SessionContext;
pub use cookies::{CookieStore, MemoryCookieStore};
pub use credentials::CredentialStore;
pub use navigation::{History, Navigator};
pub use services::{AuthApiService, AuthError};
pub use session::SessionStore;

//! Remote service wrappers

pub mod auth;

pub use auth::{AuthApiService, AuthError};

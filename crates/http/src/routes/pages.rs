//! Placeholder page handlers

use crate::error::HttpError;
use axum::http::Uri;

pub async fn home() -> &'static str {
    "Inkwell"
}

pub async fn sign_in() -> &'static str {
    "Sign in"
}

pub async fn sign_up() -> &'static str {
    "Sign up"
}

pub async fn dashboard() -> &'static str {
    "Dashboard"
}

pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(uri.path().to_string())
}

//! Page router
//!
//! The pages themselves are placeholders; the interesting part is that every
//! request, including unknown paths, passes through the route guard first.

pub mod health;
pub mod pages;

use crate::middleware::route_guard_middleware;
use crate::middleware::guard::RouteGuard;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the page router with the guard installed
pub fn router(guard: RouteGuard) -> Router {
    let guard = Arc::new(guard);

    Router::new()
        .route("/", get(pages::home))
        .route("/sign-in", get(pages::sign_in))
        .route("/sign-up", get(pages::sign_up))
        .route("/dashboard", get(pages::dashboard))
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
        .layer(middleware::from_fn_with_state(guard, route_guard_middleware))
        .layer(TraceLayer::new_for_http())
}

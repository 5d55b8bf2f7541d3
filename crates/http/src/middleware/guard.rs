//! Route guard for protected pages
//!
//! The guard only looks for the presence of the access token cookie. It does
//! not decode, verify or check the expiry of the token: any value, even an
//! empty one, lets the request through.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use inkwell_core::AuthConfig;
use std::sync::Arc;

/// Outcome of checking one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Fixed list of paths that need a session cookie
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected: Vec<String>,
    redirect_to: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(AuthConfig::PROTECTED_ROUTES.iter().copied())
    }
}

impl RouteGuard {
    /// Create a guard for the given paths, redirecting to the home page
    pub fn new<I, S>(protected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected: protected.into_iter().map(Into::into).collect(),
            redirect_to: AuthConfig::HOME_PATH.to_string(),
        }
    }

    /// Paths this guard protects
    pub fn protected_routes(&self) -> &[String] {
        &self.protected
    }

    /// Exact match against the protected list
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected.iter().any(|p| p == path)
    }

    /// Decide whether a navigation to `path` may proceed
    pub fn check(&self, path: &str, has_access_cookie: bool) -> GuardDecision {
        if self.is_protected(path) && !has_access_cookie {
            GuardDecision::Redirect(self.redirect_to.clone())
        } else {
            GuardDecision::Allow
        }
    }
}

/// Middleware running [`RouteGuard::check`] on every request
pub async fn route_guard_middleware(
    State(guard): State<Arc<RouteGuard>>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let has_access_cookie = jar.get(AuthConfig::ACCESS_TOKEN_COOKIE).is_some();

    match guard.check(req.uri().path(), has_access_cookie) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::Redirect(location) => {
            info!(
                path = %req.uri().path(),
                location = %location,
                "Redirecting anonymous visitor away from protected route"
            );
            Redirect::temporary(&location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_protects_dashboard_only() {
        let guard = RouteGuard::default();
        assert_eq!(guard.protected_routes().to_vec(), vec!["/dashboard".to_string()]);
        assert!(guard.is_protected("/dashboard"));
        assert!(!guard.is_protected("/"));
        assert!(!guard.is_protected("/sign-in"));
    }

    #[test]
    fn test_redirects_without_cookie() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.check("/dashboard", false),
            GuardDecision::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_allows_with_cookie() {
        let guard = RouteGuard::default();
        assert_eq!(guard.check("/dashboard", true), GuardDecision::Allow);
    }

    #[test]
    fn test_public_paths_always_allowed() {
        let guard = RouteGuard::default();
        assert_eq!(guard.check("/", false), GuardDecision::Allow);
        assert_eq!(guard.check("/sign-up", false), GuardDecision::Allow);
    }

    #[test]
    fn test_match_is_exact() {
        let guard = RouteGuard::default();
        assert_eq!(guard.check("/dashboard/", false), GuardDecision::Allow);
        assert_eq!(guard.check("/dashboards", false), GuardDecision::Allow);
    }
}

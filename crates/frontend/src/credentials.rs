//! Access and refresh token storage
//!
//! Each token is kept in memory and mirrored into its own cookie. Reads
//! prefer the in-memory value and fall back to the cookie; neither path looks
//! at the token's expiry.

use crate::cookies::CookieStore;
use cookie::{Cookie, SameSite};
use inkwell_core::AuthConfig;
use inkwell_http::client::TokenSource;
use std::cell::RefCell;
use std::rc::Rc;
use time::Duration;

/// Holder of the bearer credentials for the current session
pub struct CredentialStore {
    access: RefCell<String>,
    refresh: RefCell<String>,
    jar: Rc<dyn CookieStore>,
}

impl CredentialStore {
    /// A store with nothing in memory; reads fall back to the jar
    pub fn new(jar: Rc<dyn CookieStore>) -> Self {
        Self {
            access: RefCell::new(String::new()),
            refresh: RefCell::new(String::new()),
            jar,
        }
    }

    /// Store the access token, cookie max-age `ttl_secs`
    pub fn set_access(&self, token: &str, ttl_secs: i64) {
        *self.access.borrow_mut() = token.to_string();
        self.jar.set(token_cookie(
            AuthConfig::ACCESS_TOKEN_COOKIE,
            token,
            ttl_secs,
        ));
    }

    /// Store the refresh token, cookie max-age `ttl_secs`
    pub fn set_refresh(&self, token: &str, ttl_secs: i64) {
        *self.refresh.borrow_mut() = token.to_string();
        self.jar.set(token_cookie(
            AuthConfig::REFRESH_TOKEN_COOKIE,
            token,
            ttl_secs,
        ));
    }

    pub fn access(&self) -> Option<String> {
        read(&self.access, self.jar.as_ref(), AuthConfig::ACCESS_TOKEN_COOKIE)
    }

    pub fn refresh(&self) -> Option<String> {
        read(&self.refresh, self.jar.as_ref(), AuthConfig::REFRESH_TOKEN_COOKIE)
    }
}

impl TokenSource for CredentialStore {
    fn access_token(&self) -> Option<String> {
        self.access()
    }
}

fn read(memory: &RefCell<String>, jar: &dyn CookieStore, name: &str) -> Option<String> {
    let value = memory.borrow();
    if value.is_empty() {
        jar.get(name)
    } else {
        Some(value.clone())
    }
}

fn token_cookie(name: &'static str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name, token.to_string()))
        .path("/")
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

//! Browser-style cookie jar
//!
//! Cookies are kept with an absolute expiry computed from their max-age when
//! they are set. Like a browser, the jar stops returning a cookie once that
//! moment has passed; callers above the jar never check expiry themselves.

use cookie::{Cookie, CookieJar};
use std::cell::RefCell;
use time::{Duration, OffsetDateTime};

/// Longest lifetime a jar grants, whatever Max-Age asks for (400 days)
pub const MAX_COOKIE_LIFETIME: Duration = Duration::days(400);

/// Storage the session and credential stores persist into
pub trait CookieStore {
    /// Value of a live cookie
    fn get(&self, name: &str) -> Option<String> {
        self.cookie(name).map(|c| c.value().to_string())
    }

    /// A live cookie with all of its attributes
    fn cookie(&self, name: &str) -> Option<Cookie<'static>>;

    /// Store a cookie, replacing any cookie with the same name
    fn set(&self, cookie: Cookie<'static>);

    /// Drop a cookie
    fn remove(&self, name: &str);

    /// All live cookies
    fn cookies(&self) -> Vec<Cookie<'static>>;

    /// Render live cookies as a `Cookie` request header value
    fn header_value(&self) -> Option<String> {
        let pairs: Vec<String> = self
            .cookies()
            .iter()
            .map(|c| c.encoded().stripped().to_string())
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }
}

/// In-process cookie jar
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    jar: RefCell<CookieJar>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a jar from a `Cookie` header value, e.g. one sent by a browser
    ///
    /// Pairs that fail to parse are skipped.
    pub fn from_header(header: &str) -> Self {
        let store = Self::new();
        for cookie in Cookie::split_parse_encoded(header.to_string()).flatten() {
            store.jar.borrow_mut().add_original(cookie.into_owned());
        }
        store
    }

    fn is_expired(cookie: &Cookie<'_>, now: OffsetDateTime) -> bool {
        cookie.expires_datetime().is_some_and(|at| at <= now)
    }

    fn evict_expired(&self) {
        let now = OffsetDateTime::now_utc();
        let expired: Vec<Cookie<'static>> = self
            .jar
            .borrow()
            .iter()
            .filter(|c| Self::is_expired(c, now))
            .map(|c| c.clone().into_owned())
            .collect();

        if expired.is_empty() {
            return;
        }

        let mut jar = self.jar.borrow_mut();
        for cookie in expired {
            tracing::trace!(name = cookie.name(), "Evicting expired cookie");
            jar.force_remove(cookie.name().to_string());
        }
    }
}

impl CookieStore for MemoryCookieStore {
    fn cookie(&self, name: &str) -> Option<Cookie<'static>> {
        self.evict_expired();
        self.jar.borrow().get(name).map(|c| c.clone().into_owned())
    }

    fn set(&self, mut cookie: Cookie<'static>) {
        if let Some(max_age) = cookie.max_age() {
            // Max-Age of zero or less expires the cookie immediately
            let expires = if max_age <= Duration::ZERO {
                OffsetDateTime::UNIX_EPOCH
            } else {
                OffsetDateTime::now_utc() + max_age.min(MAX_COOKIE_LIFETIME)
            };
            cookie.set_expires(expires);
        }

        self.jar.borrow_mut().add_original(cookie);
    }

    fn remove(&self, name: &str) {
        self.jar.borrow_mut().force_remove(name.to_string());
    }

    fn cookies(&self) -> Vec<Cookie<'static>> {
        self.evict_expired();
        let mut cookies: Vec<Cookie<'static>> = self
            .jar
            .borrow()
            .iter()
            .map(|c| c.clone().into_owned())
            .collect();
        cookies.sort_by(|a, b| a.name().cmp(b.name()));
        cookies
    }
}

//! Current user identity, persisted to the `user` cookie

use crate::cookies::CookieStore;
use cookie::Cookie;
use inkwell_core::{AuthConfig, User};
use std::cell::RefCell;
use std::rc::Rc;
use time::Duration;

/// Holder of the signed-in user's identity record
pub struct SessionStore {
    user: RefCell<Option<User>>,
    jar: Rc<dyn CookieStore>,
}

impl SessionStore {
    /// A store with nothing in memory; reads fall back to the jar
    pub fn new(jar: Rc<dyn CookieStore>) -> Self {
        Self {
            user: RefCell::new(None),
            jar,
        }
    }

    /// Replace the identity and persist it for a week
    pub fn set(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(encoded) => {
                let cookie = Cookie::build((AuthConfig::USER_COOKIE, encoded))
                    .path("/")
                    .max_age(Duration::seconds(AuthConfig::USER_COOKIE_MAX_AGE_SECS))
                    .build();
                self.jar.set(cookie);
            }
            Err(e) => tracing::error!("Failed to encode user cookie: {}", e),
        }

        *self.user.borrow_mut() = Some(user);
    }

    /// The identity in memory, else the one in the cookie, else the anonymous placeholder
    ///
    /// A cookie that does not decode to a user is treated as absent.
    pub fn get(&self) -> User {
        if let Some(user) = self.user.borrow().as_ref() {
            return user.clone();
        }

        self.from_cookie().unwrap_or_else(User::anonymous)
    }

    fn from_cookie(&self) -> Option<User> {
        let raw = self.jar.get(AuthConfig::USER_COOKIE)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed user cookie: {}", e);
                None
            }
        }
    }
}

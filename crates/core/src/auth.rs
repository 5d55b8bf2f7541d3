//! Cookie names, lifetimes and paths shared by the client and the page server

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Cookie holding the bearer access token
    pub const ACCESS_TOKEN_COOKIE: &'static str = "access_token";

    /// Cookie holding the refresh token
    pub const REFRESH_TOKEN_COOKIE: &'static str = "refresh_token";

    /// Cookie holding the JSON encoded identity record
    pub const USER_COOKIE: &'static str = "user";

    /// Retention of the identity cookie
    pub const USER_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

    /// Where a successful sign-in lands, and where the guard sends strangers
    pub const HOME_PATH: &'static str = "/";

    /// Paths that require the access token cookie
    pub const PROTECTED_ROUTES: &'static [&'static str] = &["/dashboard"];

    /// Auth service endpoints
    pub const LOGIN_ENDPOINT: &'static str = "/auth/login";
    pub const REGISTER_ENDPOINT: &'static str = "/auth/register";
}

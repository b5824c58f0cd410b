//! Frontend configuration

/// Session handling configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Cookie that carries the session token
    pub const SESSION_COOKIE: &'static str = "session-token";

    /// Path of the login view
    pub const LOGIN_PATH: &'static str = "/login";
}

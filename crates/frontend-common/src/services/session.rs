//! Session API service

use crate::client::{create_public_client, set_session_token};
use crate::config::SessionConfig;
use crate::cookies;
use photovault_http::types::LoginRequest;

/// Outcome of validating the stored session token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token cookie is present
    Missing,
    /// The backend accepted the token
    Valid,
    /// The backend rejected the token; the cookie has been cleared
    Rejected,
    /// The backend could not be reached; the cookie is left in place
    Unreachable,
}

impl SessionStatus {
    /// Classify a validation round trip: accepted, rejected, or unreachable
    fn from_check(outcome: Option<bool>) -> Self {
        match outcome {
            Some(true) => Self::Valid,
            Some(false) => Self::Rejected,
            None => Self::Unreachable,
        }
    }

    /// Whether the stored token should be discarded for this outcome
    pub fn clears_stored_token(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Session API service
#[derive(Clone)]
pub struct SessionService;

impl SessionService {
    /// Create a new session service
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionService {
    /// Log in with a username and password, returning the issued session token
    pub async fn login(&self, username: String, password: String) -> Result<String, String> {
        let client = create_public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        let request = LoginRequest { username, password };
        let response = client.login(request).await.map_err(|e| e.to_string())?;
        Ok(response.token)
    }

    /// Validate the token stored in the session cookie
    ///
    /// Classifies the outcome without navigating; redirect decisions belong
    /// to the caller. A rejected token clears the cookie, an unreachable
    /// backend leaves it in place for the next attempt.
    pub async fn validate_stored(&self) -> SessionStatus {
        let Some(token) = cookies::get(SessionConfig::SESSION_COOKIE) else {
            return SessionStatus::Missing;
        };

        let status = SessionStatus::from_check(self.check_token(&token).await);

        if status == SessionStatus::Valid {
            let _ = set_session_token(Some(&token));
        }
        if status.clears_stored_token() {
            cookies::remove(SessionConfig::SESSION_COOKIE);
        }

        status
    }

    /// Single validation round trip: accepted, rejected, or unreachable
    ///
    /// Transport failures are reported on the console and come back as
    /// `None`.
    async fn check_token(&self, token: &str) -> Option<bool> {
        let client = match create_public_client() {
            Ok(client) => client,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to get client: {e}").into());
                return None;
            }
        };

        match client.validate_token(token).await {
            Ok(valid) => Some(valid),
            Err(e) => {
                web_sys::console::error_1(&format!("Token validation failed: {e}").into());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_outcomes_map_to_statuses() {
        assert_eq!(SessionStatus::from_check(Some(true)), SessionStatus::Valid);
        assert_eq!(
            SessionStatus::from_check(Some(false)),
            SessionStatus::Rejected
        );
        assert_eq!(SessionStatus::from_check(None), SessionStatus::Unreachable);
    }

    #[test]
    fn only_rejected_tokens_clear_the_cookie() {
        assert!(SessionStatus::Rejected.clears_stored_token());
        assert!(!SessionStatus::Valid.clears_stored_token());
        assert!(!SessionStatus::Unreachable.clears_stored_token());
        assert!(!SessionStatus::Missing.clears_stored_token());
    }
}

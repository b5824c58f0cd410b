//! Client configuration and initialization

pub use photovault_http::client::error::ClientError;
use photovault_http::client::VaultClient;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use web_sys::window;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<VaultClient>>> = Lazy::new(|| Mutex::new(None));
static SESSION_CLIENT: Lazy<Mutex<Option<VaultClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<VaultClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if client_lock.is_none() {
        let client = VaultClient::builder().base_url(get_base_url()).build()?;
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Public client should be initialized")
            .clone())
    }
}

/// Get the session-authenticated client instance (returns None if no token
/// is installed)
pub fn create_session_client() -> Result<Option<VaultClient>, ClientError> {
    let client_lock = SESSION_CLIENT
        .lock()
        .expect("Failed to acquire session client lock");
    Ok(client_lock.clone())
}

/// Install or clear the session token on the shared client
pub fn set_session_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut session_lock = SESSION_CLIENT
        .lock()
        .expect("Failed to acquire session client lock");

    if let Some(token) = token {
        let client = VaultClient::builder()
            .base_url(get_base_url())
            .session_token(token)
            .build()?;
        *session_lock = Some(client);
    } else {
        // Clear the authenticated client
        *session_lock = None;
    }

    Ok(())
}

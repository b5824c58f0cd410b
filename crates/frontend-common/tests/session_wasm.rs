//! Browser-only tests for the cookie accessor and shared clients

#![cfg(target_arch = "wasm32")]

use photovault_frontend_common::{
    cookies, create_session_client, set_session_token, SessionConfig,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_cookie_roundtrip() {
    cookies::set(SessionConfig::SESSION_COOKIE, "abc123");
    assert_eq!(
        cookies::get(SessionConfig::SESSION_COOKIE),
        Some("abc123".to_string())
    );

    cookies::remove(SessionConfig::SESSION_COOKIE);
    assert_eq!(cookies::get(SessionConfig::SESSION_COOKIE), None);
}

#[wasm_bindgen_test]
fn other_cookies_are_untouched() {
    cookies::set("theme", "dark");
    cookies::set(SessionConfig::SESSION_COOKIE, "abc123");

    cookies::remove(SessionConfig::SESSION_COOKIE);
    assert_eq!(cookies::get("theme"), Some("dark".to_string()));

    cookies::remove("theme");
}

#[wasm_bindgen_test]
fn session_client_follows_installed_token() {
    set_session_token(Some("abc123")).unwrap();
    assert!(create_session_client().unwrap().is_some());

    set_session_token(None).unwrap();
    assert!(create_session_client().unwrap().is_none());
}

//! Cookie accessor for the session token
//!
//! Thin wrapper over `document.cookie`; values are stored verbatim, so the
//! token must stay cookie-safe (the backend issues URL-safe tokens).

use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

/// Read a cookie by name
pub fn get(name: &str) -> Option<String> {
    let cookie = html_document()?.cookie().ok()?;
    find_cookie(&cookie, name).map(ToOwned::to_owned)
}

/// Set a cookie scoped to the whole site
pub fn set(name: &str, value: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{name}={value}; path=/; samesite=strict"));
    }
}

/// Delete a cookie
pub fn remove(name: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{name}=; path=/; max-age=0"));
    }
}

/// Look a cookie up in a `document.cookie` string
fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal keeps three values across reloads: the bearer token, the
//! selected project, and the UI language. These helpers centralize the
//! hydrate-only read/write glue; on the server every read is `None` and every
//! write is a no-op so SSR output stays deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Bearer token returned by `POST /api/auth/login`.
pub const TOKEN_KEY: &str = "portal_token";
/// ID of the project the selector last pointed at.
pub const SELECTED_PROJECT_KEY: &str = "portal_selected_project";
/// `de` or `en`.
pub const LANGUAGE_KEY: &str = "portal_language";
/// Last ticket filter, as JSON.
pub const TICKET_FILTER_KEY: &str = "portal_ticket_filter";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_string(key, &raw);
}

//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is nothing more than a bearer token echoed from local storage.
//! Route components apply identical unauthenticated redirect behavior, and
//! every request path reads the token through [`load_token`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::storage::{self, TOKEN_KEY};

/// Stored bearer token, if any. Blank values count as absent.
pub fn load_token() -> Option<String> {
    storage::load_string(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

pub fn save_token(token: &str) {
    storage::save_string(TOKEN_KEY, token);
}

pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Drop the session: forget the token and the user.
pub fn sign_out(auth: RwSignal<AuthState>) {
    clear_token();
    auth.update(|a| {
        a.user = None;
        a.loading = false;
    });
}

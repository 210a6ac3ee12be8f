//! Tri-state fetch results for views.
//!
//! Every page fetches its collections independently and renders a loading
//! line, an inline error, or the data. A 401 additionally drops the session
//! so the route guard sends the user back to the login page.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::auth::AuthState;

/// Fetch state of one collection or record.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Failed(message) => Loadable::Failed(message),
            Self::Ready(value) => Loadable::Ready(f(value)),
        }
    }
}

impl<T: Clone> Loadable<Vec<T>> {
    /// The items when ready, otherwise empty.
    pub fn items(&self) -> Vec<T> {
        self.ready().cloned().unwrap_or_default()
    }
}

impl<T> From<Result<T, ApiError>> for Loadable<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Reset `target` to loading and fill it from `request` in the background.
///
/// Must be called inside a component (it reads the auth context). On the
/// server the request is dropped and the view renders its loading state.
pub fn spawn_load<T, Fut>(target: RwSignal<Loadable<T>>, request: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Loadable::Loading);
    let auth = use_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = request.await;
        if let (Err(ApiError::Unauthorized), Some(auth)) = (&result, auth) {
            crate::util::auth::sign_out(auth);
        }
        if let Err(err) = &result {
            log::warn!("fetch failed: {err}");
        }
        let _ = target.try_set(Loadable::from(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, auth);
    }
}

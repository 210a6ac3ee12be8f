//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the outbound HTTP client used by the API proxy; the backend owns
//! all portal data.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        // No total timeout: chat replies stream for as long as the backend
        // keeps sending.
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, api_url: Arc::from(config.api_url.as_str()) })
    }
}

//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin that `/api/*` is forwarded to, without trailing slash.
    pub api_url: String,
    /// Longest pause between upstream body chunks before the proxy gives up.
    pub proxy_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ServerConfig {
    /// Build the config from environment variables.
    ///
    /// Required:
    /// - `PORTAL_API_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_PROXY_TIMEOUT_SECS`: default 120
    /// - `PORTAL_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ServerError> {
        let api_url = parse_api_url(std::env::var("PORTAL_API_URL").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let proxy_timeout = parse_secs(
            "PORTAL_PROXY_TIMEOUT_SECS",
            std::env::var("PORTAL_PROXY_TIMEOUT_SECS").ok().as_deref(),
            DEFAULT_PROXY_TIMEOUT_SECS,
        )?;
        let connect_timeout = parse_secs(
            "PORTAL_CONNECT_TIMEOUT_SECS",
            std::env::var("PORTAL_CONNECT_TIMEOUT_SECS").ok().as_deref(),
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;
        Ok(Self { port, api_url, proxy_timeout, connect_timeout })
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ServerError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).ok_or(ServerError::MissingVar("PORTAL_API_URL"))?;
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed.strip_prefix("https://").or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ServerError::InvalidVar { var: "PORTAL_API_URL", value: raw.to_owned() }),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ServerError::InvalidVar { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_secs(var: &'static str, raw: Option<&str>, default: u64) -> Result<Duration, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(Duration::from_secs(default)),
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ServerError::InvalidVar { var, value: value.to_owned() }),
    }
}

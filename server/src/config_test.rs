use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_portal_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("PORTAL_API_URL");
        std::env::remove_var("PORTAL_PROXY_TIMEOUT_SECS");
        std::env::remove_var("PORTAL_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_applies_defaults() {
    unsafe {
        clear_portal_env();
        std::env::set_var("PORTAL_API_URL", "https://api.agency.test/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, "https://api.agency.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

    unsafe { clear_portal_env() };
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_portal_env();
        std::env::set_var("PORTAL_API_URL", "http://127.0.0.1:8080");
        std::env::set_var("PORT", "8000");
        std::env::set_var("PORTAL_PROXY_TIMEOUT_SECS", "300");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(300));

    unsafe { clear_portal_env() };
}

#[test]
fn from_env_requires_api_url() {
    unsafe { clear_portal_env() };
    assert!(matches!(ServerConfig::from_env(), Err(ServerError::MissingVar("PORTAL_API_URL"))));
}

// =============================================================
// parsers
// =============================================================

#[test]
fn parse_api_url_rejects_missing_scheme() {
    assert!(matches!(parse_api_url(Some("api.agency.test")), Err(ServerError::InvalidVar { .. })));
    assert!(matches!(parse_api_url(Some("https://")), Err(ServerError::InvalidVar { .. })));
    assert!(matches!(parse_api_url(Some("   ")), Err(ServerError::MissingVar(_))));
}

#[test]
fn parse_port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert!(parse_port(Some("abc")).is_err());
    assert!(parse_port(Some("0")).is_err());
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_secs_rejects_zero() {
    assert!(parse_secs("X", Some("0"), 5).is_err());
    assert_eq!(parse_secs("X", Some(" 7 "), 5).unwrap(), Duration::from_secs(7));
}

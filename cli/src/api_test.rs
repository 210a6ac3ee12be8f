use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("http://localhost:3000//").expect("valid"), "http://localhost:3000");
    assert_eq!(normalize_base_url(" https://portal.example.de ").expect("valid"), "https://portal.example.de");
}

#[test]
fn normalize_base_url_rejects_missing_scheme_or_host() {
    for raw in ["localhost:3000", "ftp://host", "https://", ""] {
        assert!(matches!(normalize_base_url(raw), Err(CliError::InvalidBaseUrl(_))), "{raw}");
    }
}

#[test]
fn url_joins_base_and_path() {
    let api = ApiClient::new("http://127.0.0.1:3000/", None, Duration::from_secs(5)).expect("client");
    assert_eq!(api.url(endpoints::PROJECTS), "http://127.0.0.1:3000/api/projects");
}

#[test]
fn blank_token_counts_as_missing() {
    let api = ApiClient::new("http://127.0.0.1:3000", Some("  ".to_owned()), Duration::from_secs(5)).expect("client");
    assert!(matches!(api.require_token(), Err(CliError::MissingToken)));
    let api = ApiClient::new("http://127.0.0.1:3000", Some("tok".to_owned()), Duration::from_secs(5)).expect("client");
    assert!(api.require_token().is_ok());
}

// =============================================================
// error bodies
// =============================================================

#[test]
fn error_message_prefers_json_fields() {
    assert_eq!(error_message(r#"{"error":"project not found"}"#), "project not found");
    assert_eq!(error_message(r#"{"message":"forbidden"}"#), "forbidden");
}

#[test]
fn error_message_falls_back_to_trimmed_text() {
    assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
}

#[test]
fn error_message_shortens_long_bodies() {
    let long = "x".repeat(MAX_ERROR_BODY + 50);
    let shown = error_message(&long);
    assert_eq!(shown.chars().count(), MAX_ERROR_BODY + 1);
    assert!(shown.ends_with('…'));
}

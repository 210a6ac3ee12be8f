use super::*;
use axum::http::HeaderValue;

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("https://api.agency.test", "/api/tickets?state=open"),
        "https://api.agency.test/api/tickets?state=open"
    );
}

#[test]
fn upstream_url_tolerates_trailing_slash_on_base() {
    assert_eq!(upstream_url("http://backend:8080/", "/api/auth/me"), "http://backend:8080/api/auth/me");
    assert_eq!(upstream_url("http://backend:8080", "api/auth/me"), "http://backend:8080/api/auth/me");
}

// =============================================================
// headers
// =============================================================

#[test]
fn hop_by_hop_headers_are_recognized() {
    assert!(is_hop_by_hop(&header::CONNECTION));
    assert!(is_hop_by_hop(&header::HOST));
    assert!(is_hop_by_hop(&HeaderName::from_static("keep-alive")));
    assert!(!is_hop_by_hop(&header::AUTHORIZATION));
    assert!(!is_hop_by_hop(&header::CONTENT_TYPE));
}

#[test]
fn forwardable_keeps_auth_and_drops_transport_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::HOST, HeaderValue::from_static("portal.test"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.append(header::ACCEPT, HeaderValue::from_static("text/event-stream"));
    headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));

    let out = forwardable(&headers);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer tok");
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::TRANSFER_ENCODING).is_none());
    assert_eq!(out.get_all(header::ACCEPT).iter().count(), 2);
}

#[test]
fn has_body_follows_length_and_chunking() {
    let mut headers = HeaderMap::new();
    assert!(!has_body(&headers));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
    assert!(!has_body(&headers));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("42"));
    assert!(has_body(&headers));

    let mut chunked = HeaderMap::new();
    chunked.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    assert!(has_body(&chunked));
}

//! Backend API passthrough.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser and the CLI talk to `/api/*` on this origin; every such request
//! is forwarded to the portal backend unchanged apart from hop-by-hop headers.
//! Bodies stream in both directions so uploads and chat replies are never
//! buffered here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const HOP_BY_HOP: [HeaderName; 10] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
    header::CONTENT_LENGTH,
];

/// `/api/{*path}` handler.
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&state.api_url, path_and_query);

    let mut builder = state.http.request(parts.method.clone(), &url).headers(forwardable(&parts.headers));
    if has_body(&parts.headers) {
        builder = builder.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }
    let upstream = builder.send().await;

    match upstream {
        Ok(resp) => {
            let status = resp.status();
            let headers = forwardable(resp.headers());
            tracing::debug!(method = %parts.method, %url, %status, "proxied");
            let mut out = Response::new(Body::from_stream(resp.bytes_stream()));
            *out.status_mut() = status;
            *out.headers_mut() = headers;
            out
        }
        Err(err) => {
            tracing::warn!(method = %parts.method, %url, error = %err, "upstream request failed");
            let status = if err.is_timeout() { StatusCode::GATEWAY_TIMEOUT } else { StatusCode::BAD_GATEWAY };
            (status, "backend unavailable").into_response()
        }
    }
}

/// Backend URL for an incoming `/api/...` path, query string included.
pub(crate) fn upstream_url(api_url: &str, path_and_query: &str) -> String {
    let base = api_url.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

pub(crate) fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

/// Whether the incoming request declares a body worth forwarding.
pub(crate) fn has_body(headers: &HeaderMap) -> bool {
    headers.contains_key(header::TRANSFER_ENCODING)
        || headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .is_some_and(|len| len > 0)
}

/// Copy of `headers` without hop-by-hop entries.
fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

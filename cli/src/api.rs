//! Authenticated HTTP access to the portal backend.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{ChatRequest, UploadFields, UploadedDocument, endpoints};
use workflow::chat::TransportError;

use crate::CliError;

/// Chat response body as raw chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, TransportError>> + Send>>;

/// Longest server message echoed back in an error.
const MAX_ERROR_BODY: usize = 300;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, CliError> {
        let base_url = normalize_base_url(base_url)?;
        // Chat replies stream for a long time; only the connect phase is bounded.
        let http = reqwest::Client::builder().connect_timeout(timeout).build()?;
        Ok(Self { http, base_url, token: token.filter(|t| !t.trim().is_empty()) })
    }

    /// Fail early for commands that need a session.
    pub fn require_token(&self) -> Result<(), CliError> {
        if self.token.is_none() {
            return Err(CliError::MissingToken);
        }
        Ok(())
    }

    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let resp = checked(self.request(Method::GET, path).send().await?).await?;
        Ok(resp.json().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CliError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = checked(self.request(Method::POST, path).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, CliError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = checked(self.request(Method::PATCH, path).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// POST without a request body, ignoring any response body.
    pub async fn post_empty(&self, path: &str) -> Result<(), CliError> {
        checked(self.request(Method::POST, path).send().await?).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), CliError> {
        checked(self.request(Method::DELETE, path).send().await?).await?;
        Ok(())
    }

    /// Health probe; any 2xx counts as up.
    pub async fn ping(&self) -> Result<(), CliError> {
        checked(self.http.get(self.url(endpoints::HEALTH)).send().await?).await?;
        Ok(())
    }

    /// Open a streaming chat turn and hand back the body as chunks.
    pub async fn open_chat(&self, project_id: &str, request: &ChatRequest) -> Result<ByteStream, TransportError> {
        let resp = self
            .request(Method::POST, &endpoints::rag_chat(project_id))
            .header(ACCEPT, "text/event-stream")
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(TransportError::Status(resp.status().as_u16()));
        }
        let chunks = resp
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(|e| TransportError::Network(e.to_string())));
        Ok(Box::pin(chunks))
    }

    /// Upload a file as multipart form data.
    pub async fn upload(&self, file: &Path, fields: &UploadFields) -> Result<UploadedDocument, CliError> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .map_or_else(|| fields.name.clone(), str::to_owned);
        let mut form = reqwest::multipart::Form::new().part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
        for (name, value) in fields.parts() {
            form = form.text(name, value.to_owned());
        }
        let resp = checked(self.request(Method::POST, endpoints::DOCUMENT_UPLOAD).multipart(form).send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Strip trailing slashes and require an http(s) scheme.
fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed.strip_prefix("https://").or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(CliError::InvalidBaseUrl(raw.to_owned())),
    }
}

async fn checked(resp: Response) -> Result<Response, CliError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(CliError::Unauthorized);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(CliError::Status { status: status.as_u16(), message: error_message(&body) })
}

/// The `error`/`message` field of a JSON error body, or the body itself,
/// shortened for display.
fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body).ok().and_then(|v| {
        ["error", "message", "detail"]
            .into_iter()
            .find_map(|key| v.get(key).and_then(serde_json::Value::as_str).map(str::to_owned))
    });
    let text = from_json.unwrap_or_else(|| body.trim().to_owned());
    if text.chars().count() <= MAX_ERROR_BODY {
        return text;
    }
    let mut short: String = text.chars().take(MAX_ERROR_BODY).collect();
    short.push('…');
    short
}

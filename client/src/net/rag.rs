//! Project assistant endpoints: streaming chat, knowledge base, document
//! generation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat reply arrives as a chunked `data: {json}` body. `gloo-net` only
//! exposes whole bodies, so the chat request goes through `fetch` directly
//! (web-sys) with an `AbortController` attached, and the body's
//! `ReadableStream` is adapted into a `futures` byte stream for
//! `workflow::chat::drive`. Once the driver returns (done marker, stop, or
//! failure) the underlying fetch is aborted so no body keeps downloading.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rag_test.rs"]
mod rag_test;

use wire::{
    ChatRequest, GenerateDocumentsRequest, GenerateDocumentsResponse, GeneratedDocument, KnowledgeItem,
    NewKnowledgeItem, StreamEvent, endpoints,
};
use workflow::chat::{Outcome, StopSignal};

use crate::net::api::{self, ApiError};

// =============================================================================
// KNOWLEDGE AND GENERATION
// =============================================================================

pub async fn fetch_knowledge(project_id: &str) -> Result<Vec<KnowledgeItem>, ApiError> {
    api::get_json(&endpoints::rag_knowledge(project_id)).await
}

pub async fn add_knowledge(project_id: &str, item: &NewKnowledgeItem) -> Result<KnowledgeItem, ApiError> {
    api::post_json(&endpoints::rag_knowledge(project_id), item).await
}

pub async fn delete_knowledge(project_id: &str, item_id: &str) -> Result<(), ApiError> {
    api::delete(&endpoints::rag_knowledge_item(project_id, item_id)).await
}

/// Generate documents of the given kinds from the project's knowledge.
pub async fn generate_documents(project_id: &str, kinds: &[String]) -> Result<Vec<GeneratedDocument>, ApiError> {
    let body = generation_request(kinds);
    let resp: GenerateDocumentsResponse = api::post_json(&endpoints::rag_generate_documents(project_id), &body).await?;
    Ok(resp.documents)
}

/// Deduplicated, non-blank kinds in the order given.
fn generation_request(kinds: &[String]) -> GenerateDocumentsRequest {
    let mut unique: Vec<String> = Vec::new();
    for kind in kinds.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
        if !unique.iter().any(|k| k == kind) {
            unique.push(kind.to_owned());
        }
    }
    GenerateDocumentsRequest { kinds: unique }
}

// =============================================================================
// STREAMING CHAT
// =============================================================================

/// Send one chat turn and feed decoded events to `on_event` until the reply
/// completes, fails, or `stop` fires.
pub async fn stream_chat<F>(project_id: &str, request: &ChatRequest, stop: StopSignal, on_event: F) -> Outcome
where
    F: FnMut(StreamEvent),
{
    #[cfg(feature = "hydrate")]
    {
        let controller = match web_sys::AbortController::new() {
            Ok(controller) => controller,
            Err(err) => return Outcome::Failed(js_message(&err)),
        };
        let body = match serde_json::to_string(request) {
            Ok(body) => body,
            Err(err) => return Outcome::Failed(err.to_string()),
        };
        let url = endpoints::rag_chat(project_id);
        let open = browser::open(url, body, controller.signal());
        let outcome = workflow::chat::drive(open, stop, on_event).await;
        // The driver returns at the done marker or on stop, possibly before
        // the body ends; release the fetch either way. A no-op once it is done.
        controller.abort();
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, request, stop, on_event);
        Outcome::Failed(ApiError::Unavailable.to_string())
    }
}

/// Readable message from a thrown JS value.
#[cfg(feature = "hydrate")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::pin::Pin;

    use futures::Stream;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AbortSignal, Headers, ReadableStreamDefaultReader, RequestInit, Response};
    use wire::endpoints;
    use workflow::chat::TransportError;

    use super::js_message;

    pub(super) type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, TransportError>>>>;

    /// POST the chat request and return its body as a byte stream.
    pub(super) async fn open(url: String, body: String, signal: AbortSignal) -> Result<ByteStream, TransportError> {
        let window = web_sys::window().ok_or_else(|| TransportError::Network("no window".to_owned()))?;

        let headers = Headers::new().map_err(|e| transport(&e))?;
        headers.set("Content-Type", "application/json").map_err(|e| transport(&e))?;
        headers.set("Accept", "text/event-stream").map_err(|e| transport(&e))?;
        if let Some(token) = crate::util::auth::load_token() {
            headers
                .set("Authorization", &endpoints::bearer(&token))
                .map_err(|e| transport(&e))?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        init.set_signal(Some(&signal));

        let request = web_sys::Request::new_with_str_and_init(&url, &init).map_err(|e| transport(&e))?;
        let resp: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport(&e))?
            .dyn_into()
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(TransportError::Status(resp.status()));
        }
        let reader: ReadableStreamDefaultReader = resp
            .body()
            .ok_or_else(|| TransportError::Network("response has no body".to_owned()))?
            .get_reader()
            .dyn_into()
            .map_err(|e| transport(&e))?;

        let chunks = futures::stream::unfold(Some(reader), |reader| async move {
            let reader = reader?;
            match read_chunk(&reader).await {
                Ok(Some(bytes)) => Some((Ok(bytes), Some(reader))),
                Ok(None) => None,
                Err(err) => Some((Err(err), None)),
            }
        });
        Ok(Box::pin(chunks))
    }

    /// Next chunk, or `None` once the stream reports `done`.
    async fn read_chunk(reader: &ReadableStreamDefaultReader) -> Result<Option<Vec<u8>>, TransportError> {
        let result = JsFuture::from(reader.read()).await.map_err(|e| transport(&e))?;
        let done = js_sys::Reflect::get(&result, &"done".into())
            .map_err(|e| transport(&e))?
            .as_bool()
            .unwrap_or(true);
        if done {
            return Ok(None);
        }
        let value = js_sys::Reflect::get(&result, &"value".into()).map_err(|e| transport(&e))?;
        Ok(Some(js_sys::Uint8Array::new(&value).to_vec()))
    }

    /// `AbortError` means the caller stopped the turn; anything else is a
    /// network failure.
    fn transport(err: &JsValue) -> TransportError {
        let name = js_sys::Reflect::get(err, &"name".into()).ok().and_then(|n| n.as_string());
        if name.as_deref() == Some("AbortError") {
            TransportError::Aborted
        } else {
            TransportError::Network(js_message(err))
        }
    }
}

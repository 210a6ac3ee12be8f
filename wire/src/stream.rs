//! Decoder for the streaming chat response body.
//!
//! WIRE FORMAT
//! ===========
//! The chat endpoint answers with a chunked body of newline-terminated lines.
//! Lines of interest carry a `data: ` prefix followed by one JSON envelope:
//!
//! ```text
//! data: {"content": "Hel"}
//! data: {"content": "lo", "sources": [{"title": "Brief.pdf"}]}
//! data: {"done": true}
//! ```
//!
//! Network chunk boundaries are arbitrary: a line (or a multi-byte UTF-8
//! character) can be split across two chunks. [`StreamDecoder`] buffers raw
//! bytes and only decodes complete lines, so callers can feed chunks exactly
//! as they arrive.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::WireError;

const DATA_PREFIX: &str = "data:";

/// A retrieval source the assistant cited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One decoded item of the chat stream.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamEvent {
    /// Incremental assistant text to append.
    Content(String),
    /// Sources attached to the current answer.
    Sources(Vec<SourceRef>),
    /// Server-side failure reported in-band; ends the turn.
    Error(String),
    /// End-of-answer marker.
    Done,
    /// A `data:` line whose payload could not be decoded. Carries the raw
    /// payload for logging; consumers skip it.
    Malformed(String),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    sources: Vec<SourceRef>,
}

/// Incremental line decoder over raw body chunks.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one body chunk and return the events of every line it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.pending.extend_from_slice(chunk);
        let mut events = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            events.extend(decode_line(&String::from_utf8_lossy(&line[..pos])));
        }
        events
    }

    /// Flush a trailing line that was not newline-terminated.
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        if self.pending.is_empty() {
            return Vec::new();
        }
        let line = std::mem::take(&mut self.pending);
        decode_line(&String::from_utf8_lossy(&line))
    }
}

/// Decode one complete line. Lines without the `data:` prefix (blank
/// keep-alives, `event:`/`id:` fields) produce nothing.
#[must_use]
pub fn decode_line(line: &str) -> Vec<StreamEvent> {
    let line = line.trim_end_matches('\r');
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Vec::new();
    };
    let payload = payload.trim();
    if payload.is_empty() {
        return Vec::new();
    }
    if payload == "[DONE]" {
        return vec![StreamEvent::Done];
    }
    parse_payload(payload).unwrap_or_else(|_| vec![StreamEvent::Malformed(payload.to_owned())])
}

/// Parse the JSON envelope after `data:`.
///
/// # Errors
///
/// Returns [`WireError::Json`] for invalid JSON or mistyped fields and
/// [`WireError::NotAnObject`] for non-object payloads.
pub fn parse_payload(payload: &str) -> Result<Vec<StreamEvent>, WireError> {
    let value: Value = serde_json::from_str(payload)?;
    if !value.is_object() {
        return Err(WireError::NotAnObject);
    }
    let envelope: Envelope = serde_json::from_value(value)?;

    let mut events = Vec::new();
    if let Some(content) = envelope.content.filter(|c| !c.is_empty()) {
        events.push(StreamEvent::Content(content));
    }
    if !envelope.sources.is_empty() {
        events.push(StreamEvent::Sources(envelope.sources));
    }
    if let Some(error) = envelope.error {
        events.push(StreamEvent::Error(error));
    }
    if envelope.done {
        events.push(StreamEvent::Done);
    }
    Ok(events)
}

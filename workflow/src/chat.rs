//! Streaming chat session and its transport-agnostic driver.
//!
//! DESIGN
//! ======
//! A chat turn has two halves. [`ChatSession`] is plain state: the visible
//! message list plus a streaming flag, mutated optimistically when a turn
//! begins and incrementally as events arrive. [`drive`] is the read loop: it
//! opens the request, feeds body chunks through a [`StreamDecoder`], forwards
//! decoded events, and races every await point against a [`StopSignal`].
//!
//! The driver is generic over any `futures` byte stream so the browser
//! (`ReadableStream` via web-sys) and the CLI (`reqwest::Response`) share the
//! same parse and cancellation semantics.
//!
//! FAILURE SEMANTICS
//! =================
//! - A malformed line is logged and skipped; the turn continues.
//! - An in-band `{"error": ..}`, a non-OK status, or a transport failure
//!   ends the turn as [`Outcome::Failed`]; the session replaces the
//!   assistant reply with the caller's localized error text.
//! - Stopping ends the turn as [`Outcome::Aborted`]; the partial reply
//!   stays and no error is shown.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::future::Future;
use std::pin::{Pin, pin};
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::{Either, select};
use futures::{FutureExt, Stream, StreamExt};
use wire::{ChatRequest, HistoryEntry, SourceRef, StreamDecoder, StreamEvent};

// =============================================================================
// SESSION STATE
// =============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Wire name used in `conversation_history`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A message in the visible conversation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// True while the assistant reply is still receiving content.
    pub streaming: bool,
    /// True when the reply was replaced by an error text.
    pub failed: bool,
    pub sources: Vec<SourceRef>,
}

/// Handle returned by [`ChatSession::begin`] describing the request to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    /// ID of the placeholder assistant message that receives the reply.
    pub assistant_id: String,
    pub request: ChatRequest,
}

/// Accumulating conversation state for one project chat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    streaming: bool,
    next_id: u64,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Start a turn: append the user message and an empty assistant
    /// placeholder, and return the request to send.
    ///
    /// Returns `None` without touching state while a turn is streaming or
    /// when `text` is blank.
    pub fn begin(&mut self, text: &str) -> Option<ChatTurn> {
        if self.streaming {
            return None;
        }
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        let conversation_history = self.history();
        let user_id = self.allocate_id();
        let assistant_id = self.allocate_id();
        self.messages.push(ChatMessage {
            id: user_id,
            role: ChatRole::User,
            content: message.to_owned(),
            streaming: false,
            failed: false,
            sources: Vec::new(),
        });
        self.messages.push(ChatMessage {
            id: assistant_id.clone(),
            role: ChatRole::Assistant,
            content: String::new(),
            streaming: true,
            failed: false,
            sources: Vec::new(),
        });
        self.streaming = true;

        Some(ChatTurn {
            assistant_id,
            request: ChatRequest { message: message.to_owned(), conversation_history },
        })
    }

    /// Apply one decoded stream event to the assistant message `assistant_id`.
    /// Events for a message that no longer exists (after [`clear`](Self::clear))
    /// are dropped.
    pub fn apply(&mut self, assistant_id: &str, event: &StreamEvent) {
        let Some(message) = self.message_mut(assistant_id) else {
            return;
        };
        match event {
            StreamEvent::Content(chunk) => message.content.push_str(chunk),
            StreamEvent::Sources(sources) => message.sources.clone_from(sources),
            StreamEvent::Done => message.streaming = false,
            StreamEvent::Error(_) | StreamEvent::Malformed(_) => {}
        }
    }

    /// Close the turn. A failed outcome overwrites the assistant reply with
    /// `error_text`; completed and aborted turns keep whatever arrived.
    pub fn settle(&mut self, assistant_id: &str, outcome: &Outcome, error_text: &str) {
        self.streaming = false;
        let Some(message) = self.message_mut(assistant_id) else {
            return;
        };
        message.streaming = false;
        if matches!(outcome, Outcome::Failed(_)) {
            error_text.clone_into(&mut message.content);
            message.failed = true;
        }
    }

    /// Drop every message. An in-flight turn keeps streaming into nothing
    /// until it settles.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Prior exchange sent with the next request. Failed replies and empty
    /// placeholders are not part of the conversation.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .filter(|m| !m.failed && !m.content.is_empty())
            .map(|m| HistoryEntry { role: m.role.as_str().to_owned(), content: m.content.clone() })
            .collect()
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("msg-{}", self.next_id)
    }

    fn message_mut(&mut self, id: &str) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}

// =============================================================================
// CANCELLATION
// =============================================================================

/// Stop side of a turn. Cloning is not supported; move it to whoever owns
/// the stop button or signal handler.
#[derive(Debug)]
pub struct StopHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl StopHandle {
    /// Request the turn to stop. Calling it again is a no-op.
    pub fn stop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Future side of a turn; resolves once [`StopHandle::stop`] is called.
/// Dropping the handle without stopping leaves the signal pending forever.
#[derive(Debug)]
pub struct StopSignal {
    rx: oneshot::Receiver<()>,
    detached: bool,
}

impl Future for StopSignal {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        if this.detached {
            return Poll::Pending;
        }
        match this.rx.poll_unpin(cx) {
            Poll::Ready(Ok(())) => Poll::Ready(()),
            Poll::Ready(Err(oneshot::Canceled)) => {
                this.detached = true;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Create a connected stop handle and signal.
#[must_use]
pub fn stop_pair() -> (StopHandle, StopSignal) {
    let (tx, rx) = oneshot::channel();
    (StopHandle { tx: Some(tx) }, StopSignal { rx, detached: false })
}

// =============================================================================
// DRIVER
// =============================================================================

/// Failure while opening or reading the response body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request was aborted by the caller.
    #[error("request aborted")]
    Aborted,
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// Connection or body read failure.
    #[error("network error: {0}")]
    Network(String),
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Done marker received or the body ended.
    Completed,
    /// Stopped by the caller.
    Aborted,
    /// Ended by an error; carries a diagnostic message for logs.
    Failed(String),
}

/// Run one turn: open the request, then pump its body until done, end of
/// stream, failure, or stop. Every decoded event other than malformed lines
/// and in-band errors is passed to `on_event`.
pub async fn drive<O, S, F>(open: O, stop: StopSignal, on_event: F) -> Outcome
where
    O: Future<Output = Result<S, TransportError>>,
    S: Stream<Item = Result<Vec<u8>, TransportError>> + Unpin,
    F: FnMut(StreamEvent),
{
    let mut stop = stop;
    let open = pin!(open);
    let body = match select(open, &mut stop).await {
        Either::Left((Ok(body), _)) => body,
        Either::Left((Err(err), _)) => return failure(err),
        Either::Right(((), _)) => return Outcome::Aborted,
    };
    pump(body, stop, on_event).await
}

/// Read an already-open body. See [`drive`].
pub async fn pump<S, F>(mut body: S, mut stop: StopSignal, mut on_event: F) -> Outcome
where
    S: Stream<Item = Result<Vec<u8>, TransportError>> + Unpin,
    F: FnMut(StreamEvent),
{
    let mut decoder = StreamDecoder::new();
    loop {
        let next = match select(body.next(), &mut stop).await {
            Either::Left((next, _)) => next,
            Either::Right(((), _)) => return Outcome::Aborted,
        };
        let (events, ended) = match next {
            Some(Ok(chunk)) => (decoder.push(&chunk), false),
            Some(Err(err)) => {
                // A stop that raced the read error wins.
                if (&mut stop).now_or_never().is_some() {
                    return Outcome::Aborted;
                }
                return failure(err);
            }
            None => (decoder.finish(), true),
        };
        if let Some(outcome) = dispatch(events, &mut on_event) {
            return outcome;
        }
        if ended {
            return Outcome::Completed;
        }
    }
}

fn dispatch<F>(events: Vec<StreamEvent>, on_event: &mut F) -> Option<Outcome>
where
    F: FnMut(StreamEvent),
{
    for event in events {
        match event {
            StreamEvent::Malformed(raw) => {
                log::warn!("skipping malformed chat stream line: {raw}");
            }
            StreamEvent::Error(message) => return Some(Outcome::Failed(message)),
            StreamEvent::Done => {
                on_event(StreamEvent::Done);
                return Some(Outcome::Completed);
            }
            other => on_event(other),
        }
    }
    None
}

fn failure(err: TransportError) -> Outcome {
    match err {
        TransportError::Aborted => Outcome::Aborted,
        other => Outcome::Failed(other.to_string()),
    }
}

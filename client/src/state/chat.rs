//! Project chat state and the `use_rag_chat` hook.
//!
//! DESIGN
//! ======
//! `ChatState` is the signal-held view of one conversation; the session logic
//! (optimistic pair, history, settle rules) lives in `workflow::chat`.
//! [`RagChat`] is the handle a component gets back: `send_message`,
//! `stop_streaming`, `clear_messages`. The stop side of the in-flight turn is
//! kept in a `StoredValue` next to the signal so state clones never carry it.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use workflow::chat::{ChatMessage, ChatSession, StopHandle};

use crate::state::ui::UiState;
use crate::util::i18n::{self, Language, Text};

/// Conversation shown in the chat panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    /// Project the conversation belongs to.
    pub project_id: Option<String>,
    pub session: ChatSession,
}

impl ChatState {
    pub fn messages(&self) -> &[ChatMessage] {
        self.session.messages()
    }

    pub fn is_streaming(&self) -> bool {
        self.session.is_streaming()
    }

    /// Switch to `project_id`. A different project starts an empty
    /// conversation; the same project keeps the current one.
    pub fn switch_project(&mut self, project_id: Option<String>) -> bool {
        if self.project_id == project_id {
            return false;
        }
        self.project_id = project_id;
        self.session.clear();
        true
    }
}

/// Text that replaces a failed assistant reply.
pub fn failure_text(lang: Language) -> &'static str {
    i18n::t(lang, Text::ChatError)
}

/// Chat actions bound to the shared [`ChatState`].
#[derive(Clone, Copy)]
pub struct RagChat {
    state: RwSignal<ChatState>,
    stop: StoredValue<Option<StopHandle>>,
    ui: RwSignal<UiState>,
}

/// Bind chat actions to the `ChatState` and `UiState` contexts.
pub fn use_rag_chat() -> RagChat {
    RagChat {
        state: expect_context::<RwSignal<ChatState>>(),
        stop: StoredValue::new(None),
        ui: expect_context::<RwSignal<UiState>>(),
    }
}

impl RagChat {
    pub fn state(&self) -> RwSignal<ChatState> {
        self.state
    }

    /// Send `text` to the current project's assistant. Ignored while a reply
    /// is streaming, when `text` is blank, or when no project is bound.
    pub fn send_message(&self, text: &str) {
        let Some(project_id) = self.state.with_untracked(|s| s.project_id.clone()) else {
            return;
        };
        let mut turn = None;
        self.state.update(|s| turn = s.session.begin(text));
        let Some(turn) = turn else {
            return;
        };

        let (handle, signal) = workflow::chat::stop_pair();
        self.stop.set_value(Some(handle));

        let state = self.state;
        let stop = self.stop;
        let ui = self.ui;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let assistant_id = turn.assistant_id.clone();
            let outcome = crate::net::rag::stream_chat(&project_id, &turn.request, signal, |event| {
                let _ = state.try_update(|s| s.session.apply(&assistant_id, &event));
            })
            .await;
            if let workflow::chat::Outcome::Failed(reason) = &outcome {
                log::warn!("chat turn failed: {reason}");
            }
            let error_text = failure_text(ui.with_untracked(|u| u.language));
            let _ = state.try_update(|s| s.session.settle(&turn.assistant_id, &outcome, error_text));
            stop.set_value(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, signal, stop);
            let error_text = failure_text(ui.with_untracked(|u| u.language));
            let outcome = workflow::chat::Outcome::Failed("not available on server".to_owned());
            state.update(|s| s.session.settle(&turn.assistant_id, &outcome, error_text));
        }
    }

    /// Abort the in-flight reply, if any. Calling it again is a no-op.
    pub fn stop_streaming(&self) {
        self.stop.update_value(|handle| {
            if let Some(handle) = handle {
                handle.stop();
            }
        });
    }

    /// Forget the conversation. An in-flight reply is stopped first.
    pub fn clear_messages(&self) {
        self.stop_streaming();
        self.state.update(|s| s.session.clear());
    }
}

//! Project assistant chat panel.
//!
//! DESIGN
//! ======
//! The conversation lives in the shared `ChatState` context so it survives
//! re-renders of the project page. Mounting the panel for another project
//! starts a fresh conversation; leaving the page stops any reply still
//! streaming.

use leptos::prelude::*;
use workflow::chat::{ChatMessage, ChatRole};

use crate::state::chat::use_rag_chat;
use crate::state::ui::UiState;
use crate::util::i18n::Text;
use crate::util::markdown;

#[component]
pub fn ChatPanel(project_id: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);
    let chat = use_rag_chat();
    let state = chat.state();

    if state.with_untracked(|s| s.project_id.as_deref() != Some(project_id.as_str())) {
        chat.stop_streaming();
        state.update(|s| {
            s.switch_project(Some(project_id));
        });
    }
    on_cleanup(move || chat.stop_streaming());

    let draft = RwSignal::new(String::new());
    let streaming = Memo::new(move |_| state.with(|s| s.is_streaming()));

    let submit = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() || streaming.get_untracked() {
            return;
        }
        draft.set(String::new());
        chat.send_message(&text);
    };

    view! {
        <section class="chat-panel">
            <header class="chat-panel__header">
                <h2>{move || t(Text::Chat)}</h2>
                <button
                    class="btn btn--ghost"
                    disabled=move || state.with(|s| s.messages().is_empty())
                    on:click=move |_| chat.clear_messages()
                >
                    {move || t(Text::Clear)}
                </button>
            </header>

            <div class="chat-panel__messages" aria-live="polite">
                {move || {
                    let messages = state.with(|s| s.messages().to_vec());
                    if messages.is_empty() {
                        return view! { <p class="chat-panel__empty">{t(Text::ChatEmpty)}</p> }.into_any();
                    }
                    messages.into_iter().map(|m| message_view(m, ui)).collect::<Vec<_>>().into_any()
                }}
            </div>

            <form
                class="chat-panel__input"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <textarea
                    rows="2"
                    placeholder=move || t(Text::ChatPlaceholder)
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit();
                        }
                    }
                ></textarea>
                <Show
                    when=move || streaming.get()
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" type="submit" disabled=move || draft.get().trim().is_empty()>
                                {move || t(Text::Send)}
                            </button>
                        }
                    }
                >
                    <button class="btn btn--danger" type="button" on:click=move |_| chat.stop_streaming()>
                        {move || t(Text::Stop)}
                    </button>
                </Show>
            </form>
        </section>
    }
}

fn message_view(message: ChatMessage, ui: RwSignal<UiState>) -> impl IntoView {
    let lang = ui.get_untracked().language;
    let is_user = message.role == ChatRole::User;
    let thinking = message.streaming && message.content.is_empty();

    let body = if is_user || message.failed {
        view! { <p class="chat-message__text">{message.content}</p> }.into_any()
    } else if thinking {
        view! { <p class="chat-message__thinking">{crate::util::i18n::t(lang, Text::ChatThinking)}</p> }.into_any()
    } else {
        let html = markdown::render_html(&message.content);
        view! { <div class="chat-message__markdown" inner_html=html></div> }.into_any()
    };

    let sources = (!message.sources.is_empty()).then(|| {
        let items = message
            .sources
            .into_iter()
            .map(|source| match source.url.filter(|url| markdown::is_safe_url(url)) {
                Some(url) => view! { <li><a href=url target="_blank" rel="noopener">{source.title}</a></li> }.into_any(),
                None => view! { <li>{source.title}</li> }.into_any(),
            })
            .collect::<Vec<_>>();
        view! {
            <details class="chat-message__sources">
                <summary>{crate::util::i18n::t(lang, Text::ChatSources)}</summary>
                <ul>{items}</ul>
            </details>
        }
    });

    view! {
        <div
            class="chat-message"
            class:chat-message--user=is_user
            class:chat-message--assistant=!is_user
            class:chat-message--failed=message.failed
            class:chat-message--streaming=message.streaming
        >
            {body}
            {sources}
        </div>
    }
}

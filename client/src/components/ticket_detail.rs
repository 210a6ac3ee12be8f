//! Ticket detail panel: description, staff state/priority controls, comments.

use leptos::prelude::*;
use wire::{Comment, Ticket, TicketPatch, TicketPriority, TicketState};

use crate::components::badges::{PriorityBadge, TicketStateBadge};
use crate::components::upload_form::UploadForm;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

#[component]
pub fn TicketDetail(ticket: Ticket, on_updated: Callback<Ticket>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let comments = RwSignal::new(Loadable::<Vec<Comment>>::Loading);
    let draft = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ticket_id = StoredValue::new(ticket.id.clone());
    spawn_load(comments, {
        let id = ticket.id.clone();
        async move { api::fetch_comments(&id).await }
    });

    let apply_patch = move |patch: TicketPatch| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let id = ticket_id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_ticket(&id, &patch).await {
                Ok(updated) => on_updated.run(updated),
                Err(e) => error.set(Some(format!("{}: {e}", i18n::t(ui.get_untracked().language, Text::UpdateFailed)))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, patch, on_updated);
            busy.set(false);
        }
    };

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get();
        if body.trim().is_empty() || busy.get() {
            return;
        }
        busy.set(true);
        let id = ticket_id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_comment(&id, &body).await {
                Ok(comment) => {
                    comments.update(|c| {
                        if let Loadable::Ready(list) = c {
                            list.push(comment);
                        }
                    });
                    draft.set(String::new());
                }
                Err(e) => error.set(Some(format!("{}: {e}", i18n::t(ui.get_untracked().language, Text::UpdateFailed)))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, body);
            busy.set(false);
        }
    };

    let state = ticket.state;
    let priority = ticket.priority;
    let description = ticket.description.clone().unwrap_or_default();
    let project_id = ticket.project_id.clone();
    let upload_ticket = ticket.id.clone();

    view! {
        <aside class="ticket-detail">
            <h2 class="ticket-detail__title">{ticket.title.clone()}</h2>
            <div class="ticket-detail__badges">
                <TicketStateBadge state=state/>
                <PriorityBadge priority=priority/>
            </div>
            <p class="ticket-detail__description">{description}</p>

            <Show when=move || auth.get().is_staff()>
                <div class="ticket-detail__controls">
                    <select
                        disabled=move || busy.get()
                        on:change=move |ev| {
                            if let Some(next) = TicketState::parse(&event_target_value(&ev)) {
                                apply_patch(TicketPatch { state: Some(next), ..TicketPatch::default() });
                            }
                        }
                    >
                        {move || {
                            let lang = ui.get().language;
                            TicketState::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.as_str() selected=s == state>
                                            {i18n::ticket_state_label(lang, s)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <select
                        disabled=move || busy.get()
                        on:change=move |ev| {
                            if let Some(next) = TicketPriority::parse(&event_target_value(&ev)) {
                                apply_patch(TicketPatch { priority: Some(next), ..TicketPatch::default() });
                            }
                        }
                    >
                        {move || {
                            let lang = ui.get().language;
                            TicketPriority::ALL
                                .into_iter()
                                .map(|p| {
                                    view! {
                                        <option value=p.as_str() selected=p == priority>
                                            {i18n::priority_label(lang, p)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <p class="ticket-detail__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <h3>{move || t(Text::Comments)}</h3>
            <ul class="ticket-detail__comments">
                {move || match comments.get() {
                    Loadable::Loading => view! { <li>{t(Text::Loading)}</li> }.into_any(),
                    Loadable::Failed(e) => {
                        view! { <li class="ticket-detail__error">{format!("{}: {e}", t(Text::LoadFailed))}</li> }
                            .into_any()
                    }
                    Loadable::Ready(list) if list.is_empty() => view! { <li>{t(Text::NoComments)}</li> }.into_any(),
                    Loadable::Ready(list) => {
                        let lang = ui.get().language;
                        list.into_iter()
                            .map(|c| {
                                let author = c.author_name.clone().unwrap_or_else(|| c.author_id.clone());
                                let when = i18n::format_date_str(lang, &c.created_at);
                                view! {
                                    <li class="ticket-detail__comment">
                                        <span class="ticket-detail__author">{author}</span>
                                        <span class="ticket-detail__when">{when}</span>
                                        <p>{c.body}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </ul>
            <form class="ticket-detail__comment-form" on:submit=on_comment>
                <textarea
                    placeholder=move || t(Text::CommentPlaceholder)
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get() || draft.get().trim().is_empty()>
                    {move || t(Text::AddComment)}
                </button>
            </form>

            <UploadForm project_id=project_id ticket_id=upload_ticket/>
        </aside>
    }
}

//! Ticket overview: filter bar, table, detail panel.
//!
//! The filter is remembered in local storage so the list looks the same
//! after a reload.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{Project, Ticket};
use workflow::tickets::{TicketCounts, TicketFilter};

use crate::components::ticket_detail::TicketDetail;
use crate::components::ticket_filters::TicketFilters;
use crate::components::ticket_table::TicketTable;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::i18n::Text;
use crate::util::storage::{self, TICKET_FILTER_KEY};

#[component]
pub fn TicketsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);
    install_unauth_redirect(auth, use_navigate());

    let tickets = RwSignal::new(Loadable::<Vec<Ticket>>::Loading);
    let projects = RwSignal::new(Loadable::<Vec<Project>>::Loading);
    spawn_load(tickets, api::fetch_tickets());
    spawn_load(projects, api::fetch_projects());

    let filter = RwSignal::new(storage::load_json::<TicketFilter>(TICKET_FILTER_KEY).unwrap_or_default());
    Effect::new(move || filter.with(|f| storage::save_json(TICKET_FILTER_KEY, f)));

    let selected = RwSignal::new(None::<String>);
    let all_tickets = Signal::derive(move || tickets.with(Loadable::items));
    let all_projects = Signal::derive(move || projects.with(Loadable::items));
    let counts = Signal::derive(move || all_tickets.with(|list| TicketCounts::tally(list)));
    let visible = Signal::derive(move || {
        let current = filter.get();
        all_tickets.with(|list| all_projects.with(|p| current.apply(list, p).into_iter().cloned().collect::<Vec<_>>()))
    });

    let on_updated = Callback::new(move |updated: Ticket| {
        tickets.update(|l| {
            if let Loadable::Ready(list) = l {
                if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
            }
        });
    });

    let status = Memo::new(move |_| {
        tickets.with(|l| match l {
            Loadable::Loading => None,
            Loadable::Failed(e) => Some(Err(e.clone())),
            Loadable::Ready(_) => Some(Ok(())),
        })
    });

    let detail = move || {
        let id = selected.get()?;
        let ticket = all_tickets.with(|list| list.iter().find(|t| t.id == id).cloned())?;
        Some(view! { <TicketDetail ticket=ticket on_updated=on_updated/> })
    };

    view! {
        <main class="page tickets-page">
            <h1>{move || t(Text::TicketsTitle)}</h1>
            {move || match status.get() {
                None => view! { <p class="page-status">{t(Text::Loading)}</p> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="page-status page-status--error">{format!("{}: {e}", t(Text::LoadFailed))}</p> }
                        .into_any()
                }
                Some(Ok(())) => {
                    view! {
                        <TicketFilters filter=filter counts=counts/>
                        <div class="tickets-page__body">
                            <TicketTable tickets=visible projects=all_projects selected=selected/>
                            {detail}
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

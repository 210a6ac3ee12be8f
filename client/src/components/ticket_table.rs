//! Ticket table with row selection.

use std::collections::BTreeMap;

use leptos::prelude::*;
use wire::{Project, Ticket};

use crate::components::badges::{PriorityBadge, TicketStateBadge};
use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

#[component]
pub fn TicketTable(
    #[prop(into)] tickets: Signal<Vec<Ticket>>,
    #[prop(into)] projects: Signal<Vec<Project>>,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let rows = move || {
        let lang = ui.get().language;
        let names: BTreeMap<String, String> = projects.get().into_iter().map(|p| (p.id, p.name)).collect();
        let current = selected.get();
        let tickets = tickets.get();
        if tickets.is_empty() {
            return view! {
                <tr>
                    <td class="ticket-table__empty" colspan="6">{i18n::t(lang, Text::NoTickets)}</td>
                </tr>
            }
                .into_any();
        }
        tickets
            .into_iter()
            .map(|ticket| {
                let id = ticket.id.clone();
                let is_selected = current.as_deref() == Some(id.as_str());
                let project = names.get(&ticket.project_id).cloned().unwrap_or_else(|| ticket.project_id.clone());
                let assignee = ticket
                    .assignee_id
                    .clone()
                    .unwrap_or_else(|| i18n::t(lang, Text::Unassigned).to_owned());
                let updated = i18n::format_date_str(lang, &ticket.updated_at);
                view! {
                    <tr
                        class="ticket-table__row"
                        class:ticket-table__row--selected=is_selected
                        on:click=move |_| selected.set(Some(id.clone()))
                    >
                        <td class="ticket-table__title">{ticket.title}</td>
                        <td>{project}</td>
                        <td><TicketStateBadge state=ticket.state/></td>
                        <td><PriorityBadge priority=ticket.priority/></td>
                        <td>{assignee}</td>
                        <td>{updated}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <table class="ticket-table">
            <thead>
                <tr>
                    <th>{move || t(Text::TicketColumn)}</th>
                    <th>{move || t(Text::ProjectColumn)}</th>
                    <th>{move || t(Text::StateColumn)}</th>
                    <th>{move || t(Text::PriorityColumn)}</th>
                    <th>{move || t(Text::AssigneeColumn)}</th>
                    <th>{move || t(Text::UpdatedColumn)}</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

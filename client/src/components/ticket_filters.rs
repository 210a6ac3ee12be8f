//! Ticket filter bar: state chips, priority chips, project search.

use leptos::prelude::*;
use wire::{TicketPriority, TicketState};
use workflow::tickets::{TicketCounts, TicketFilter};

use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

#[component]
pub fn TicketFilters(
    filter: RwSignal<TicketFilter>,
    /// Per-state counts over the unfiltered list, shown on the chips.
    #[prop(into)]
    counts: Signal<TicketCounts>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let state_chips = move || {
        let lang = ui.get().language;
        let current = filter.get();
        let counts = counts.get();
        TicketState::ALL
            .into_iter()
            .map(|state| {
                let active = current.states.contains(&state);
                let label = format!("{} ({})", i18n::ticket_state_label(lang, state), counts.get(state));
                view! {
                    <button
                        class="chip"
                        class:chip--active=active
                        aria-pressed=active.to_string()
                        on:click=move |_| filter.update(|f| f.toggle_state(state))
                    >
                        {label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let priority_chips = move || {
        let lang = ui.get().language;
        let current = filter.get();
        TicketPriority::ALL
            .into_iter()
            .map(|priority| {
                let active = current.priorities.contains(&priority);
                view! {
                    <button
                        class="chip"
                        class:chip--active=active
                        aria-pressed=active.to_string()
                        on:click=move |_| filter.update(|f| f.toggle_priority(priority))
                    >
                        {i18n::priority_label(lang, priority)}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="ticket-filters">
            <div class="ticket-filters__group">
                <span class="ticket-filters__label">{move || ui.get().t(Text::FilterState)}</span>
                {state_chips}
            </div>
            <div class="ticket-filters__group">
                <span class="ticket-filters__label">{move || ui.get().t(Text::FilterPriority)}</span>
                {priority_chips}
            </div>
            <div class="ticket-filters__group">
                <input
                    class="ticket-filters__search"
                    type="search"
                    placeholder=move || ui.get().t(Text::FilterProject)
                    prop:value=move || filter.get().project_query
                    on:input=move |ev| filter.update(|f| f.project_query = event_target_value(&ev))
                />
                <Show when=move || !filter.get().is_empty()>
                    <button class="btn btn--link" on:click=move |_| filter.set(TicketFilter::default())>
                        {move || ui.get().t(Text::ClearFilters)}
                    </button>
                </Show>
            </div>
        </div>
    }
}

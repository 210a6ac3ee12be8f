//! Status badges for projects, tickets and product plans.

use leptos::prelude::*;
use wire::{PlanStatus, ProjectStatus, TicketPriority, TicketState};
use workflow::plans::tone;

use crate::state::ui::UiState;
use crate::util::i18n;

#[component]
pub fn ProjectStatusBadge(status: ProjectStatus) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <span class="badge badge--project" class:badge--muted=!status.is_active()>
            {move || i18n::project_status_label(ui.get().language, status)}
        </span>
    }
}

#[component]
pub fn TicketStateBadge(state: TicketState) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <span class="badge badge--ticket" class:badge--muted=!state.is_active()>
            {move || i18n::ticket_state_label(ui.get().language, state)}
        </span>
    }
}

#[component]
pub fn PriorityBadge(priority: TicketPriority) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <span class="badge badge--priority" class:badge--warning=priority.is_urgent()>
            {move || i18n::priority_label(ui.get().language, priority)}
        </span>
    }
}

#[component]
pub fn PlanStatusBadge(status: PlanStatus) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let class = format!("badge badge--{}", tone(status).css());
    view! { <span class=class>{move || i18n::plan_status_label(ui.get().language, status)}</span> }
}

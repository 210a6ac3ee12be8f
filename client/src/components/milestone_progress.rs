//! Milestone progress bar and milestone list.

use leptos::prelude::*;
use wire::Milestone;
use workflow::milestones::{next_due, progress_percent};

use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

/// Completion bar with the percentage and the next due milestone.
#[component]
pub fn MilestoneProgress(#[prop(into)] milestones: Signal<Vec<Milestone>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let percent = move || milestones.with(|list| progress_percent(list));
    let next = move || {
        let lang = ui.get().language;
        milestones.with(|list| {
            next_due(list).map(|m| {
                let due = m.due_date.as_deref().map(|d| i18n::format_date_str(lang, d)).unwrap_or_default();
                format!("{}: {} ({due})", i18n::t(lang, Text::NextMilestone), m.title)
            })
        })
    };

    view! {
        <div class="milestone-progress">
            <div class="milestone-progress__header">
                <span>{move || ui.get().t(Text::Progress)}</span>
                <span class="milestone-progress__percent">{move || format!("{}%", percent())}</span>
            </div>
            <div
                class="milestone-progress__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent().to_string()
            >
                <div class="milestone-progress__bar" style:width=move || format!("{}%", percent())></div>
            </div>
            {move || next().map(|text| view! { <p class="milestone-progress__next">{text}</p> })}
        </div>
    }
}

/// Milestones in due order, completed ones checked off.
#[component]
pub fn MilestoneList(#[prop(into)] milestones: Signal<Vec<Milestone>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <ul class="milestone-list">
            {move || {
                let lang = ui.get().language;
                let mut list = milestones.get();
                if list.is_empty() {
                    return view! { <li class="milestone-list__empty">{i18n::t(lang, Text::NoMilestones)}</li> }
                        .into_any();
                }
                list.sort_by(|a, b| a.due_date.cmp(&b.due_date));
                list.into_iter()
                    .map(|m| {
                        let due = m.due_date.as_deref().map(|d| i18n::format_date_str(lang, d)).unwrap_or_default();
                        view! {
                            <li class="milestone-list__item" class:milestone-list__item--done=m.completed>
                                <span class="milestone-list__check">{if m.completed { "✓" } else { "○" }}</span>
                                <span class="milestone-list__title">{m.title}</span>
                                <span class="milestone-list__due">{due}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </ul>
    }
}

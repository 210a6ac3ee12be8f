//! Project dropdown bound to the persisted selection.
//!
//! A stored id that is not in the list renders the placeholder and is
//! forgotten once the list has loaded; another project is never picked on
//! the user's behalf.

use leptos::prelude::*;
use wire::Project;
use workflow::selection;

use crate::state::ui::UiState;
use crate::util::i18n::Text;

#[component]
pub fn ProjectSelector(#[prop(into)] projects: Signal<Vec<Project>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let selected = ui.with(|u| u.selected_project.clone());
        let stale = projects.with(|list| selection::is_stale(list, selected.as_deref()));
        if stale {
            ui.update(|u| u.select_project(None));
        }
    });

    let current = move || {
        let selected = ui.with(|u| u.selected_project.clone());
        projects.with(|list| selection::resolve(list, selected.as_deref()).map(|p| p.id.clone()))
    };

    view! {
        <select
            class="project-selector"
            on:change=move |ev| {
                let id = event_target_value(&ev);
                ui.update(|u| u.select_project(Some(id)));
            }
        >
            <option value="" selected=move || current().is_none()>
                {move || ui.get().t(Text::SelectProject)}
            </option>
            {move || {
                let selected = current();
                projects
                    .get()
                    .into_iter()
                    .map(|p| {
                        let is_selected = selected.as_deref() == Some(p.id.as_str());
                        view! {
                            <option value=p.id selected=is_selected>
                                {p.name}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}

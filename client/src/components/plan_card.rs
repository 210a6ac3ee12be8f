//! Product plan list linking to the plan page.

use leptos::prelude::*;
use leptos_router::components::A;
use wire::ProductPlan;

use crate::components::badges::PlanStatusBadge;
use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

#[component]
pub fn PlanList(#[prop(into)] plans: Signal<Vec<ProductPlan>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <ul class="plan-list">
            {move || {
                let lang = ui.get().language;
                let mut list = plans.get();
                if list.is_empty() {
                    return view! { <li class="plan-list__empty">{i18n::t(lang, Text::NoPlans)}</li> }.into_any();
                }
                list.sort_by(|a, b| b.version.cmp(&a.version));
                list.into_iter()
                    .map(|plan| {
                        let href = format!("/plans/{}", plan.id);
                        let version = format!("{} {}", i18n::t(lang, Text::PlanVersion), plan.version);
                        view! {
                            <li class="plan-list__item">
                                <A href=href attr:class="plan-list__link">{plan.title}</A>
                                <span class="plan-list__version">{version}</span>
                                <PlanStatusBadge status=plan.status/>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </ul>
    }
}

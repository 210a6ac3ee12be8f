//! Product plan page: rendered plan, decision buttons, change-request form.
//!
//! A customer opening a sent plan marks it viewed exactly once per visit.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::ProductPlan;
use workflow::plans::{PlanAction, available_actions, should_mark_viewed};

use crate::components::badges::PlanStatusBadge;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::i18n::{self, Text};
use crate::util::markdown;

#[component]
pub fn PlanPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());
    let params = use_params_map();
    let plan_id = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()));

    move || plan_id.get().map(|id| view! { <PlanView plan_id=id/> })
}

#[component]
fn PlanView(plan_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let plan = RwSignal::new(Loadable::<ProductPlan>::Loading);
    let feedback = RwSignal::new(String::new());
    let requesting_changes = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let marked = StoredValue::new(false);
    let id = StoredValue::new(plan_id.clone());

    spawn_load(plan, async move { api::fetch_plan(&plan_id).await });

    let run = move |action: PlanAction, text: String| {
        busy.set(true);
        error.set(None);
        let plan_id = id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::plan_action(&plan_id, action, &text).await {
                Ok(updated) => {
                    plan.set(Loadable::Ready(updated));
                    if action == PlanAction::RequestChanges {
                        feedback.set(String::new());
                        requesting_changes.set(false);
                    }
                }
                Err(e) if action == PlanAction::MarkViewed => log::warn!("could not mark plan viewed: {e}"),
                Err(e) => {
                    let lang = ui.get_untracked().language;
                    error.set(Some(format!("{}: {e}", i18n::t(lang, Text::PlanActionFailed))));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (plan_id, action, text);
            busy.set(false);
        }
    };

    Effect::new(move || {
        let Some(role) = auth.get().role() else {
            return;
        };
        let Some(status) = plan.with(|p| p.ready().map(|p| p.status)) else {
            return;
        };
        if !marked.get_value() && should_mark_viewed(status, role) {
            marked.set_value(true);
            run(PlanAction::MarkViewed, String::new());
        }
    });

    let on_action = move |action: PlanAction| {
        if busy.get_untracked() {
            return;
        }
        if !action.requires_feedback() {
            run(action, String::new());
            return;
        }
        if !requesting_changes.get_untracked() {
            requesting_changes.set(true);
            return;
        }
        let text = feedback.get_untracked();
        if text.trim().is_empty() {
            error.set(Some(i18n::t(ui.get_untracked().language, Text::PlanFeedbackRequired).to_owned()));
            return;
        }
        run(action, text);
    };

    let body = move || match plan.get() {
        Loadable::Loading => view! { <p class="page-status">{t(Text::Loading)}</p> }.into_any(),
        Loadable::Failed(e) => {
            view! { <p class="page-status page-status--error">{format!("{}: {e}", t(Text::LoadFailed))}</p> }
                .into_any()
        }
        Loadable::Ready(p) => {
            let lang = ui.get().language;
            let back = format!("/projects/{}", p.project_id);
            let html = markdown::render_html(&p.content);
            let actions = auth.get().role().map(|role| available_actions(p.status, role)).unwrap_or_default();
            let change_request = p.change_request.clone().map(|text| {
                view! {
                    <aside class="plan-page__change-request">
                        <h3>{i18n::t(lang, Text::PlanChangeRequest)}</h3>
                        <p>{text}</p>
                    </aside>
                }
            });
            let buttons = actions
                .into_iter()
                .map(|action| {
                    view! {
                        <button
                            class="btn"
                            class:btn--primary=action == PlanAction::Approve || action == PlanAction::Send
                            disabled=move || busy.get()
                            on:click=move |_| on_action(action)
                        >
                            {i18n::plan_action_label(lang, action)}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <A href=back attr:class="back-link">{i18n::t(lang, Text::BackToProject)}</A>
                <header class="plan-page__header">
                    <h1>{p.title}</h1>
                    <span class="plan-page__version">{format!("{} {}", i18n::t(lang, Text::PlanVersion), p.version)}</span>
                    <PlanStatusBadge status=p.status/>
                </header>
                {change_request}
                <article class="plan-page__content" inner_html=html></article>
                <Show when=move || requesting_changes.get()>
                    <textarea
                        class="plan-page__feedback"
                        placeholder=move || t(Text::PlanFeedbackPlaceholder)
                        prop:value=move || feedback.get()
                        on:input=move |ev| feedback.set(event_target_value(&ev))
                    ></textarea>
                </Show>
                <div class="plan-page__actions">
                    {buttons}
                    <Show when=move || requesting_changes.get()>
                        <button class="btn btn--ghost" on:click=move |_| requesting_changes.set(false)>
                            {move || t(Text::Cancel)}
                        </button>
                    </Show>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <main class="page plan-page">
            {body}
            <Show when=move || error.get().is_some()>
                <p class="plan-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}

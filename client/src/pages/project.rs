//! Project workspace: status, milestones, meetings, plans, assistant,
//! documents, and staff-only notes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/projects/:id`. Each section loads its own collection so a
//! slow or failing endpoint only blanks its own panel. Internal notes, form
//! responses and the knowledge base are never requested for customers.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::{FormResponse, InternalNote, Meeting, Milestone, ProductPlan, Project};

use crate::components::badges::ProjectStatusBadge;
use crate::components::chat_panel::ChatPanel;
use crate::components::knowledge_panel::KnowledgePanel;
use crate::components::meeting_calendar::MeetingCalendar;
use crate::components::milestone_progress::{MilestoneList, MilestoneProgress};
use crate::components::plan_card::PlanList;
use crate::components::review_panel::ReviewPanel;
use crate::components::upload_form::UploadForm;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::i18n::{self, Text};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()));

    move || project_id.get().map(|id| view! { <ProjectView project_id=id/> })
}

#[component]
fn ProjectView(project_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let project = RwSignal::new(Loadable::<Project>::Loading);
    let milestones = RwSignal::new(Loadable::<Vec<Milestone>>::Loading);
    let meetings = RwSignal::new(Loadable::<Vec<Meeting>>::Loading);
    let plans = RwSignal::new(Loadable::<Vec<ProductPlan>>::Loading);
    let id = StoredValue::new(project_id.clone());

    spawn_load(project, {
        let id = project_id.clone();
        async move { api::fetch_project(&id).await }
    });
    spawn_load(milestones, {
        let id = project_id.clone();
        async move { api::fetch_milestones(&id).await }
    });
    spawn_load(meetings, {
        let id = project_id.clone();
        async move { api::fetch_project_meetings(&id).await }
    });
    spawn_load(plans, {
        let id = project_id.clone();
        async move { api::fetch_project_plans(&id).await }
    });

    let on_review = Callback::new(move |review| {
        project.update(|p| {
            if let Loadable::Ready(p) = p {
                p.review = Some(review);
            }
        });
    });

    let header = move || match project.get() {
        Loadable::Loading => view! { <p class="page-status">{t(Text::Loading)}</p> }.into_any(),
        Loadable::Failed(e) => {
            view! { <p class="page-status page-status--error">{format!("{}: {e}", t(Text::LoadFailed))}</p> }
                .into_any()
        }
        Loadable::Ready(p) => {
            let lang = ui.get().language;
            let due = p.due_date.as_deref().map(|d| i18n::format_date_str(lang, d)).unwrap_or_default();
            let description = p.description.clone().unwrap_or_default();
            view! {
                <header class="project-header">
                    <h1>{p.name.clone()}</h1>
                    <ProjectStatusBadge status=p.status/>
                    <span class="project-header__due">{format!("{}: {due}", i18n::t(lang, Text::DueDate))}</span>
                    <p class="project-header__description">{description}</p>
                </header>
                <ReviewPanel project=p on_submitted=on_review/>
            }
            .into_any()
        }
    };

    let milestone_items = Signal::derive(move || milestones.with(Loadable::items));
    let meeting_items = Signal::derive(move || meetings.with(Loadable::items));
    let plan_items = Signal::derive(move || plans.with(Loadable::items));
    let is_staff = move || auth.get().is_staff();

    view! {
        <main class="page project-page">
            <A href="/" attr:class="back-link">{move || t(Text::NavDashboard)}</A>
            {header}
            <div class="project-page__grid">
                <section class="project-page__section">
                    <h2>{move || t(Text::Milestones)}</h2>
                    <LoadState state=Signal::derive(move || milestones.with(|l| l.error().map(str::to_owned)))/>
                    <MilestoneProgress milestones=milestone_items/>
                    <MilestoneList milestones=milestone_items/>
                </section>
                <section class="project-page__section">
                    <h2>{move || t(Text::Meetings)}</h2>
                    <LoadState state=Signal::derive(move || meetings.with(|l| l.error().map(str::to_owned)))/>
                    <MeetingCalendar meetings=meeting_items/>
                </section>
                <section class="project-page__section">
                    <h2>{move || t(Text::ProductPlans)}</h2>
                    <LoadState state=Signal::derive(move || plans.with(|l| l.error().map(str::to_owned)))/>
                    <PlanList plans=plan_items/>
                </section>
                <ChatPanel project_id=id.get_value()/>
                <section class="project-page__section">
                    <h2>{move || t(Text::Documents)}</h2>
                    <UploadForm project_id=id.get_value()/>
                </section>
                <Show when=is_staff>
                    <KnowledgePanel project_id=id.get_value()/>
                    <StaffRecords project_id=id.get_value()/>
                </Show>
            </div>
        </main>
    }
}

/// Inline error line for a section whose fetch failed.
#[component]
fn LoadState(#[prop(into)] state: Signal<Option<String>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    move || {
        state.get().map(|e| {
            view! { <p class="section-error">{format!("{}: {e}", ui.get().t(Text::LoadFailed))}</p> }
        })
    }
}

/// Internal notes and questionnaire answers. Staff only.
#[component]
fn StaffRecords(project_id: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let notes = RwSignal::new(Loadable::<Vec<InternalNote>>::Loading);
    let responses = RwSignal::new(Loadable::<Vec<FormResponse>>::Loading);
    spawn_load(notes, {
        let id = project_id.clone();
        async move { api::fetch_notes(&id).await }
    });
    spawn_load(responses, async move { api::fetch_form_responses(&project_id).await });

    view! {
        <section class="project-page__section">
            <h2>{move || t(Text::Notes)}</h2>
            <ul class="note-list">
                {move || {
                    let lang = ui.get().language;
                    match notes.get() {
                        Loadable::Loading => view! { <li>{i18n::t(lang, Text::Loading)}</li> }.into_any(),
                        Loadable::Failed(e) => view! { <li class="section-error">{e}</li> }.into_any(),
                        Loadable::Ready(list) if list.is_empty() => {
                            view! { <li>{i18n::t(lang, Text::NoNotes)}</li> }.into_any()
                        }
                        Loadable::Ready(list) => {
                            list.into_iter()
                                .map(|note| {
                                    let when = i18n::format_date_str(lang, &note.created_at);
                                    view! {
                                        <li class="note-list__item">
                                            <span class="note-list__when">{when}</span>
                                            <p>{note.body}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }
                }}
            </ul>
        </section>
        <section class="project-page__section">
            <h2>{move || t(Text::FormResponses)}</h2>
            <ul class="form-response-list">
                {move || {
                    let lang = ui.get().language;
                    match responses.get() {
                        Loadable::Loading => view! { <li>{i18n::t(lang, Text::Loading)}</li> }.into_any(),
                        Loadable::Failed(e) => view! { <li class="section-error">{e}</li> }.into_any(),
                        Loadable::Ready(list) if list.is_empty() => {
                            view! { <li>{i18n::t(lang, Text::NoFormResponses)}</li> }.into_any()
                        }
                        Loadable::Ready(list) => {
                            list.into_iter()
                                .map(|response| {
                                    let when = i18n::format_date_str(lang, &response.submitted_at);
                                    let answers = answer_rows(&response.answers);
                                    view! {
                                        <li class="form-response">
                                            <h3>{response.form_key}</h3>
                                            <span class="form-response__when">{when}</span>
                                            <dl>
                                                {answers
                                                    .into_iter()
                                                    .map(|(q, a)| view! { <dt>{q}</dt><dd>{a}</dd> })
                                                    .collect::<Vec<_>>()}
                                            </dl>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }
                }}
            </ul>
        </section>
    }
}

/// Flatten a questionnaire's answers into label/value rows. Object entries
/// are listed by key; any other value becomes a single unlabeled row.
fn answer_rows(answers: &serde_json::Value) -> Vec<(String, String)> {
    fn display(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(", "),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
    match answers {
        serde_json::Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), display(v))).collect(),
        serde_json::Value::Null => Vec::new(),
        other => vec![(String::new(), display(other))],
    }
}

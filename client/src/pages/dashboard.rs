//! Role dashboard: counter tiles plus the lists each role works from.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Once the user is known it loads
//! the collections that role needs in one bundle and renders the matching
//! view. Customers additionally get the project selector and an overview of
//! the selected project.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wire::{Company, Milestone, Project, Role, Ticket, User};
use workflow::dashboard::tiles;
use workflow::{milestones, plans, selection, tickets};

use crate::components::badges::{PriorityBadge, ProjectStatusBadge, TicketStateBadge};
use crate::components::meeting_calendar::MeetingCalendar;
use crate::components::milestone_progress::MilestoneProgress;
use crate::components::plan_card::PlanList;
use crate::components::project_selector::ProjectSelector;
use crate::components::stat_tiles::StatTiles;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardBundle;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::clock;
use crate::util::i18n::{self, Text};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);
    install_unauth_redirect(auth, use_navigate());

    let bundle = RwSignal::new(Loadable::<DashboardBundle>::Loading);
    let loaded_for = StoredValue::new(None::<String>);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if loaded_for.get_value().as_deref() == Some(user.id.as_str()) {
            return;
        }
        loaded_for.set_value(Some(user.id.clone()));
        spawn_load(bundle, async move { api::load_dashboard(&user).await });
    });

    let body = move || {
        let Some(user) = auth.get().user else {
            return view! { <p class="page-status">{t(Text::Loading)}</p> }.into_any();
        };
        match bundle.get() {
            Loadable::Loading => view! { <p class="page-status">{t(Text::Loading)}</p> }.into_any(),
            Loadable::Failed(e) => {
                view! { <p class="page-status page-status--error">{format!("{}: {e}", t(Text::LoadFailed))}</p> }
                    .into_any()
            }
            Loadable::Ready(data) => role_view(user, data).into_any(),
        }
    };

    view! {
        <main class="page dashboard-page">
            <h1>{move || t(Text::DashboardTitle)}</h1>
            {body}
        </main>
    }
}

fn role_view(user: User, data: DashboardBundle) -> impl IntoView {
    let tile_list = tiles(&user, &data.data(), clock::now());
    let lists = match user.role {
        Role::Customer => customer_view(&user, data).into_any(),
        Role::Developer => developer_view(&user, &data).into_any(),
        Role::ProjectLeader => leader_view(&user, data).into_any(),
        Role::Admin | Role::KeyAccountManager => portfolio_view(&user, &data).into_any(),
    };
    view! {
        <StatTiles tiles=Signal::stored(tile_list)/>
        {lists}
    }
}

// =============================================================================
// CUSTOMER
// =============================================================================

fn customer_view(user: &User, data: DashboardBundle) -> impl IntoView + use<> {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let own: Vec<Project> = selection::customer_projects(&data.projects, user.company_id.as_deref())
        .into_iter()
        .cloned()
        .collect();
    let own_ids: Vec<String> = own.iter().map(|p| p.id.clone()).collect();
    let awaiting: Vec<_> = data
        .plans
        .iter()
        .filter(|p| own_ids.contains(&p.project_id) && plans::awaits_customer(p.status))
        .cloned()
        .collect();
    let meetings: Vec<_> = data.meetings.iter().filter(|m| own_ids.contains(&m.project_id)).cloned().collect();
    let projects = Signal::stored(own);

    let selected = Memo::new(move |_| {
        let chosen = ui.with(|u| u.selected_project.clone());
        projects.with(|list| selection::resolve(list, chosen.as_deref()).cloned())
    });
    let selected_id = Memo::new(move |_| selected.get().map(|p| p.id));
    let project_milestones = RwSignal::new(Loadable::<Vec<Milestone>>::Loading);
    Effect::new(move || {
        if let Some(id) = selected_id.get() {
            spawn_load(project_milestones, async move { api::fetch_milestones(&id).await });
        }
    });

    view! {
        <section class="dashboard-section">
            <Show
                when=move || !projects.with(Vec::is_empty)
                fallback=move || view! { <p>{t(Text::NoProjects)}</p> }
            >
                <ProjectSelector projects=projects/>
            </Show>
            {move || {
                selected
                    .get()
                    .map(|project| {
                        let href = format!("/projects/{}", project.id);
                        view! {
                            <article class="project-overview">
                                <header>
                                    <h2>{project.name.clone()}</h2>
                                    <ProjectStatusBadge status=project.status/>
                                </header>
                                <MilestoneProgress milestones=Signal::derive(move || project_milestones.get().items())/>
                                <A href=href attr:class="btn">{move || t(Text::OpenProject)}</A>
                            </article>
                        }
                    })
            }}
        </section>
        <section class="dashboard-section">
            <h2>{move || t(Text::ProductPlans)}</h2>
            <PlanList plans=Signal::stored(awaiting)/>
        </section>
        <section class="dashboard-section">
            <h2>{move || t(Text::Meetings)}</h2>
            <MeetingCalendar meetings=Signal::stored(meetings)/>
        </section>
    }
}

// =============================================================================
// DEVELOPER
// =============================================================================

fn developer_view(user: &User, data: &DashboardBundle) -> impl IntoView + use<> {
    let ui = expect_context::<RwSignal<UiState>>();
    let mut assigned: Vec<&Ticket> =
        tickets::assigned_to(&data.tickets, &user.id).into_iter().filter(|t| t.state.is_active()).collect();
    tickets::sort_by_urgency(&mut assigned);
    let assigned: Vec<Ticket> = assigned.into_iter().cloned().collect();

    view! {
        <section class="dashboard-section">
            <h2>{move || ui.get().t(Text::TicketsTitle)}</h2>
            <TicketList tickets=assigned/>
        </section>
    }
}

#[component]
fn TicketList(tickets: Vec<Ticket>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    if tickets.is_empty() {
        return view! { <p>{move || ui.get().t(Text::NoTickets)}</p> }.into_any();
    }
    view! {
        <ul class="ticket-list">
            {tickets
                .into_iter()
                .map(|ticket| {
                    view! {
                        <li class="ticket-list__item">
                            <A href="/tickets" attr:class="ticket-list__title">{ticket.title}</A>
                            <TicketStateBadge state=ticket.state/>
                            <PriorityBadge priority=ticket.priority/>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

// =============================================================================
// PROJECT LEADER
// =============================================================================

fn leader_view(user: &User, data: DashboardBundle) -> impl IntoView + use<> {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let led: Vec<Project> = data
        .projects
        .iter()
        .filter(|p| p.project_leader_id.as_deref() == Some(user.id.as_str()))
        .cloned()
        .collect();
    let led_ids: Vec<String> = led.iter().map(|p| p.id.clone()).collect();
    let today = clock::now().date();
    let overdue: Vec<Milestone> = milestones::overdue(&data.milestones, today).into_iter().cloned().collect();
    let meetings: Vec<_> = data.meetings.into_iter().filter(|m| led_ids.contains(&m.project_id)).collect();
    let names: Vec<(String, String)> = led.iter().map(|p| (p.id.clone(), p.name.clone())).collect();

    let overdue_items = if overdue.is_empty() {
        view! { <li>{move || t(Text::NoOverdue)}</li> }.into_any()
    } else {
        let lang = ui.get_untracked().language;
        overdue
            .into_iter()
            .map(|m| {
                let project = names
                    .iter()
                    .find(|(id, _)| *id == m.project_id)
                    .map(|(_, name)| name.clone())
                    .unwrap_or_default();
                let due = m.due_date.as_deref().map(|d| i18n::format_date_str(lang, d)).unwrap_or_default();
                view! {
                    <li class="overdue-list__item">
                        <span class="overdue-list__title">{m.title}</span>
                        <span class="overdue-list__project">{project}</span>
                        <span class="overdue-list__due">{due}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <section class="dashboard-section">
            <h2>{move || t(Text::LedProjects)}</h2>
            <ProjectList projects=led/>
        </section>
        <section class="dashboard-section">
            <h2>{move || t(Text::OverdueMilestones)}</h2>
            <ul class="overdue-list">{overdue_items}</ul>
        </section>
        <section class="dashboard-section">
            <h2>{move || t(Text::Meetings)}</h2>
            <MeetingCalendar meetings=Signal::stored(meetings)/>
        </section>
    }
}

// =============================================================================
// ADMIN AND KEY ACCOUNT MANAGER
// =============================================================================

fn portfolio_view(user: &User, data: &DashboardBundle) -> impl IntoView + use<> {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let (companies, heading): (Vec<Company>, Text) = if user.role == Role::KeyAccountManager {
        let managed = data
            .companies
            .iter()
            .filter(|c| c.key_account_manager_id.as_deref() == Some(user.id.as_str()))
            .cloned()
            .collect();
        (managed, Text::ManagedCompanies)
    } else {
        (data.companies.clone(), Text::Companies)
    };
    let company_ids: Vec<String> = companies.iter().map(|c| c.id.clone()).collect();
    let projects: Vec<Project> = if user.role == Role::KeyAccountManager {
        data.projects.iter().filter(|p| company_ids.contains(&p.company_id)).cloned().collect()
    } else {
        data.projects.clone()
    };

    let company_items = if companies.is_empty() {
        view! { <li>{move || t(Text::NoCompanies)}</li> }.into_any()
    } else {
        companies
            .into_iter()
            .map(|c| {
                let project_count = projects.iter().filter(|p| p.company_id == c.id).count();
                view! {
                    <li class="company-list__item">
                        <span class="company-list__name">{c.name}</span>
                        <span class="company-list__contact">{c.contact_email.unwrap_or_default()}</span>
                        <span class="company-list__count">{project_count}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <section class="dashboard-section">
            <h2>{move || t(heading)}</h2>
            <ul class="company-list">{company_items}</ul>
        </section>
        <section class="dashboard-section">
            <h2>{move || t(Text::Projects)}</h2>
            <ProjectList projects=projects/>
        </section>
    }
}

#[component]
fn ProjectList(projects: Vec<Project>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    if projects.is_empty() {
        return view! { <p>{move || ui.get().t(Text::NoProjects)}</p> }.into_any();
    }
    let lang = ui.get_untracked().language;
    view! {
        <ul class="project-list">
            {projects
                .into_iter()
                .map(|project| {
                    let href = format!("/projects/{}", project.id);
                    let due = project.due_date.as_deref().map(|d| i18n::format_date_str(lang, d)).unwrap_or_default();
                    view! {
                        <li class="project-list__item">
                            <A href=href attr:class="project-list__name">{project.name}</A>
                            <ProjectStatusBadge status=project.status/>
                            <span class="project-list__due">{due}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

//! Admin console: companies and invitations.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{Company, Invitation, InvitationStatus, NewInvitation, Role};

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::i18n::{self, Text};

/// Invitation form contents before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
struct InvitationDraft {
    email: String,
    role: Role,
    /// Empty means "no company".
    company_id: String,
}

impl Default for InvitationDraft {
    fn default() -> Self {
        Self { email: String::new(), role: Role::Customer, company_id: String::new() }
    }
}

impl InvitationDraft {
    /// Build the request body. Customers must belong to a company; staff
    /// invitations never carry one.
    fn validate(&self) -> Result<NewInvitation, Text> {
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'));
        if !well_formed {
            return Err(Text::InviteEmailRequired);
        }
        let company_id = if self.role == Role::Customer {
            let id = self.company_id.trim();
            if id.is_empty() {
                return Err(Text::InviteCompanyRequired);
            }
            Some(id.to_owned())
        } else {
            None
        };
        Ok(NewInvitation { email: email.to_owned(), role: self.role, company_id })
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);
    install_unauth_redirect(auth, use_navigate());

    view! {
        <main class="page admin-page">
            <h1>{move || t(Text::AdminTitle)}</h1>
            <Show
                when=move || auth.get().is_admin()
                fallback=move || view! { <p class="page-status">{move || t(Text::NotFound)}</p> }
            >
                <AdminConsole/>
            </Show>
        </main>
    }
}

#[component]
fn AdminConsole() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let companies = RwSignal::new(Loadable::<Vec<Company>>::Loading);
    let invitations = RwSignal::new(Loadable::<Vec<Invitation>>::Loading);
    spawn_load(companies, api::fetch_companies());
    spawn_load(invitations, api::fetch_invitations());

    let draft = RwSignal::new(InvitationDraft::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let report = move |err: api::ApiError| {
        error.set(Some(format!("{}: {err}", i18n::t(ui.get_untracked().language, Text::UpdateFailed))));
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match draft.get().validate() {
            Ok(body) => body,
            Err(text) => {
                error.set(Some(i18n::t(ui.get_untracked().language, text).to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_invitation(&body).await {
                Ok(created) => {
                    invitations.update(|l| {
                        if let Loadable::Ready(list) = l {
                            list.insert(0, created);
                        }
                    });
                    draft.set(InvitationDraft::default());
                }
                Err(e) => report(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, report);
            busy.set(false);
        }
    };

    let on_revoke = move |invitation_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::revoke_invitation(&invitation_id).await {
                Ok(()) => invitations.update(|l| {
                    if let Loadable::Ready(list) = l {
                        if let Some(inv) = list.iter_mut().find(|i| i.id == invitation_id) {
                            inv.status = InvitationStatus::Revoked;
                        }
                    }
                }),
                Err(e) => report(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (invitation_id, report);
        }
    };

    let company_name = move |id: Option<&str>| {
        let lang = ui.get_untracked().language;
        id.and_then(|id| companies.with_untracked(|l| l.ready().and_then(|list| list.iter().find(|c| c.id == id).map(|c| c.name.clone()))))
            .unwrap_or_else(|| i18n::t(lang, Text::NoCompany).to_owned())
    };

    view! {
        <section class="admin-section">
            <h2>{move || t(Text::Companies)}</h2>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{move || t(Text::Companies)}</th>
                        <th>{move || t(Text::ContactEmail)}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match companies.get() {
                        Loadable::Loading => view! { <tr><td colspan="2">{t(Text::Loading)}</td></tr> }.into_any(),
                        Loadable::Failed(e) => view! { <tr><td colspan="2" class="section-error">{e}</td></tr> }.into_any(),
                        Loadable::Ready(list) if list.is_empty() => {
                            view! { <tr><td colspan="2">{t(Text::NoCompanies)}</td></tr> }.into_any()
                        }
                        Loadable::Ready(list) => {
                            list.into_iter()
                                .map(|c| view! { <tr><td>{c.name}</td><td>{c.contact_email.unwrap_or_default()}</td></tr> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </section>

        <section class="admin-section">
            <h2>{move || t(Text::Invitations)}</h2>
            <form class="invite-form" on:submit=on_create>
                <input
                    type="email"
                    placeholder=move || t(Text::InviteEmail)
                    prop:value=move || draft.get().email
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                        draft.update(|d| d.role = role);
                    }
                }>
                    {move || {
                        let lang = ui.get().language;
                        let current = draft.get().role;
                        Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option value=role.as_str() selected=role == current>
                                        {i18n::role_label(lang, role)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    disabled=move || draft.get().role != Role::Customer
                    on:change=move |ev| draft.update(|d| d.company_id = event_target_value(&ev))
                >
                    <option value="">{move || t(Text::InviteCompany)}</option>
                    {move || {
                        let current = draft.get().company_id;
                        companies
                            .get()
                            .items()
                            .into_iter()
                            .map(|c| {
                                let is_selected = c.id == current;
                                view! { <option value=c.id selected=is_selected>{c.name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || t(Text::InviteCreate)}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="section-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="invitation-list">
                {move || {
                    let lang = ui.get().language;
                    match invitations.get() {
                        Loadable::Loading => view! { <li>{i18n::t(lang, Text::Loading)}</li> }.into_any(),
                        Loadable::Failed(e) => view! { <li class="section-error">{e}</li> }.into_any(),
                        Loadable::Ready(list) if list.is_empty() => {
                            view! { <li>{i18n::t(lang, Text::NoInvitations)}</li> }.into_any()
                        }
                        Loadable::Ready(list) => {
                            list.into_iter()
                                .map(|inv| {
                                    let pending = inv.status == InvitationStatus::Pending;
                                    let expires = format!(
                                        "{} {}",
                                        i18n::t(lang, Text::InviteExpires),
                                        i18n::format_date_str(lang, &inv.expires_at)
                                    );
                                    let company = company_name(inv.company_id.as_deref());
                                    let id = inv.id.clone();
                                    view! {
                                        <li class="invitation-list__item">
                                            <span class="invitation-list__email">{inv.email}</span>
                                            <span class="invitation-list__role">{i18n::role_label(lang, inv.role)}</span>
                                            <span class="invitation-list__company">{company}</span>
                                            <span class="invitation-list__status">
                                                {i18n::invitation_status_label(lang, inv.status)}
                                            </span>
                                            <span class="invitation-list__expires">{expires}</span>
                                            {pending
                                                .then(|| {
                                                    view! {
                                                        <button class="btn btn--ghost" on:click=move |_| on_revoke(id.clone())>
                                                            {i18n::t(lang, Text::InviteRevoke)}
                                                        </button>
                                                    }
                                                })}
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

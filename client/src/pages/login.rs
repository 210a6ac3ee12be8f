//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::i18n::Text;

/// Trimmed email and raw password, or the message to show when either is
/// missing. Passwords are not trimmed.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), Text> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(Text::LoginMissingFields);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let lang = ui.get_untracked().language;
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(text) => {
                info.set(Some(crate::util::i18n::t(lang, text).to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        crate::util::auth::save_token(&resp.token);
                        auth.set(AuthState { user: Some(resp.user), loading: false });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(crate::net::api::ApiError::Unauthorized) => {
                        info.set(Some(crate::util::i18n::t(lang, Text::LoginInvalid).to_owned()));
                        password.set(String::new());
                    }
                    Err(e) => {
                        info.set(Some(format!("{}: {e}", crate::util::i18n::t(lang, Text::LoginFailed))));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || t(Text::AppTitle)}</h1>
                <p class="login-card__subtitle">{move || t(Text::LoginTitle)}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder=move || t(Text::Email)
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder=move || t(Text::Password)
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || t(Text::SignIn)}
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}

//! Top bar with navigation, language and theme toggles, identity, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every authenticated page so navigation and session controls
//! stay in one place.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

/// Top toolbar for authenticated pages.
#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let t = move |text: Text| ui.get().t(text);
    let is_current = move |prefix: &'static str| {
        let path = pathname.get();
        if prefix == "/" { path == "/" } else { path.starts_with(prefix) }
    };

    let identity = move || {
        let lang = ui.get().language;
        auth.get()
            .user
            .map(|user| (user.name, i18n::role_label(lang, user.role).to_owned()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::util::auth::sign_out(auth);
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">{move || t(Text::AppTitle)}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="toolbar__nav">
                <A href="/" attr:class=move || nav_class(is_current("/"))>{move || t(Text::NavDashboard)}</A>
                <A href="/tickets" attr:class=move || nav_class(is_current("/tickets"))>
                    {move || t(Text::NavTickets)}
                </A>
                <Show when=move || auth.get().is_admin()>
                    <A href="/admin" attr:class=move || nav_class(is_current("/admin"))>
                        {move || t(Text::NavAdmin)}
                    </A>
                </Show>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__language"
                on:click=move |_| ui.update(UiState::toggle_language)
                title=move || t(Text::ToggleLanguage)
            >
                {move || ui.get().language.toggled().code().to_uppercase()}
            </button>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title=move || t(Text::ToggleDarkMode)
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="toolbar__self">
                {move || identity().0}
                " ("
                <span class="toolbar__self-role">{move || identity().1}</span>
                ")"
            </span>

            <button class="btn toolbar__logout" on:click=on_logout>
                {move || t(Text::Logout)}
            </button>
        </header>
    }
}

fn nav_class(current: bool) -> &'static str {
    if current { "toolbar__link toolbar__link--current" } else { "toolbar__link" }
}

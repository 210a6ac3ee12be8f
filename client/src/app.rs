//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the shell with default preferences; stored preferences
//! (language, theme, selected project) and the session are restored in the
//! browser after hydration. Until the `/api/auth/me` round trip finishes,
//! `AuthState::loading` holds route redirects back.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toolbar::Toolbar;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, plan::PlanPage, project::ProjectPage,
    tickets::TicketsPage,
};
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};
use crate::util::i18n::Text;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="de">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(chat);

    // Effects only run in the browser.
    Effect::new(move || {
        ui.set(UiState::restore());
        bootstrap_session(auth);
    });
    Effect::new(move || {
        let (dark, lang) = ui.with(|u| (u.dark_mode, u.language));
        crate::util::dark_mode::apply(dark);
        set_document_lang(lang.code());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text=move || ui.get().t(Text::AppTitle)/>

        <Router>
            <Show when=move || auth.get().user.is_some()>
                <Toolbar/>
            </Show>
            <Routes fallback=move || view! { <p class="page-status">{move || ui.get().t(Text::NotFound)}</p> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("tickets") view=TicketsPage/>
                <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectPage/>
                <Route path=(StaticSegment("plans"), ParamSegment("id")) view=PlanPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}

/// Resolve the stored token into a user. Without a token, or when the token
/// is rejected, the session ends signed out.
fn bootstrap_session(auth: RwSignal<AuthState>) {
    if crate::util::auth::load_token().is_none() {
        auth.set(AuthState { user: None, loading: false });
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Ok(user) => auth.set(AuthState { user: Some(user), loading: false }),
            Err(crate::net::api::ApiError::Unauthorized) => crate::util::auth::sign_out(auth),
            Err(e) => {
                log::warn!("could not restore session: {e}");
                auth.set(AuthState { user: None, loading: false });
            }
        }
    });
}

fn set_document_lang(code: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", code);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
    }
}

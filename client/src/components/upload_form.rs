//! Document upload form for a project or ticket.

use leptos::html;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::i18n::{self, Text, UPLOAD_CATEGORIES};

/// How long the success message stays visible.
#[cfg(feature = "hydrate")]
const FLASH_MS: u32 = 4_000;

#[component]
pub fn UploadForm(project_id: String, #[prop(optional)] ticket_id: Option<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let file_input = NodeRef::<html::Input>::new();
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(UPLOAD_CATEGORIES[0].to_owned());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<(bool, String)>);
    let target = StoredValue::new((project_id, ticket_id));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let lang = ui.get_untracked().language;
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                message.set(Some((false, i18n::t(lang, Text::UploadMissingFile).to_owned())));
                return;
            };
            let (project_id, ticket_id) = target.get_value();
            let typed = name.get();
            let fields = wire::UploadFields {
                project_id,
                category: category.get(),
                name: if typed.trim().is_empty() { file.name() } else { typed.trim().to_owned() },
                ticket_id,
            };
            busy.set(true);
            message.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file, &fields).await {
                    Ok(doc) => {
                        message.set(Some((true, format!("{}: {}", i18n::t(lang, Text::UploadDone), doc.name))));
                        name.set(String::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        gloo_timers::future::TimeoutFuture::new(FLASH_MS).await;
                        let _ = message.try_update(|m| {
                            if m.as_ref().is_some_and(|(ok, _)| *ok) {
                                *m = None;
                            }
                        });
                    }
                    Err(e) => message.set(Some((false, format!("{}: {e}", i18n::t(lang, Text::UploadFailed))))),
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, file_input);
            message.set(Some((false, i18n::t(lang, Text::UploadFailed).to_owned())));
        }
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <h3>{move || t(Text::UploadTitle)}</h3>
            <label>
                {move || t(Text::UploadFile)}
                <input type="file" node_ref=file_input/>
            </label>
            <label>
                {move || t(Text::UploadName)}
                <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
            </label>
            <label>
                {move || t(Text::UploadCategory)}
                <select on:change=move |ev| category.set(event_target_value(&ev))>
                    {move || {
                        let lang = ui.get().language;
                        UPLOAD_CATEGORIES
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <option value=c selected=move || category.get() == c>
                                        {i18n::upload_category_label(lang, c)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || t(Text::UploadSubmit)}
            </button>
            {move || {
                message
                    .get()
                    .map(|(ok, text)| {
                        view! {
                            <p class="upload-form__message" class:upload-form__message--error=!ok>
                                {text}
                            </p>
                        }
                    })
            }}
        </form>
    }
}

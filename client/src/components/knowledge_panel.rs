//! Project knowledge base and document generation (staff only).

use leptos::prelude::*;
use wire::{GeneratedDocument, KnowledgeItem, NewKnowledgeItem};

use crate::net::rag;
use crate::state::loadable::{Loadable, spawn_load};
use crate::state::ui::UiState;
use crate::util::i18n::{self, DOCUMENT_KINDS, Text};
use crate::util::markdown;

#[component]
pub fn KnowledgePanel(project_id: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let items = RwSignal::new(Loadable::<Vec<KnowledgeItem>>::Loading);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let kinds = RwSignal::new(vec![DOCUMENT_KINDS[0].to_owned()]);
    let generated = RwSignal::new(Vec::<GeneratedDocument>::new());
    let busy = RwSignal::new(false);
    let generating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let project_id = StoredValue::new(project_id);

    spawn_load(items, {
        let id = project_id.get_value();
        async move { rag::fetch_knowledge(&id).await }
    });

    let fail = move |err: crate::net::api::ApiError| {
        error.set(Some(format!("{}: {err}", i18n::t(ui.get_untracked().language, Text::UpdateFailed))));
    };

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let item = NewKnowledgeItem { title: title.get().trim().to_owned(), content: content.get().trim().to_owned() };
        if item.title.is_empty() || item.content.is_empty() || busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let id = project_id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match rag::add_knowledge(&id, &item).await {
                Ok(created) => {
                    items.update(|l| {
                        if let Loadable::Ready(list) = l {
                            list.push(created);
                        }
                    });
                    title.set(String::new());
                    content.set(String::new());
                }
                Err(e) => fail(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item, fail);
            busy.set(false);
        }
    };

    let on_delete = move |item_id: String| {
        let id = project_id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match rag::delete_knowledge(&id, &item_id).await {
                Ok(()) => items.update(|l| {
                    if let Loadable::Ready(list) = l {
                        list.retain(|i| i.id != item_id);
                    }
                }),
                Err(e) => fail(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item_id, fail);
        }
    };

    let on_generate = move |_| {
        if generating.get() {
            return;
        }
        generating.set(true);
        error.set(None);
        let id = project_id.get_value();
        let selected = kinds.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match rag::generate_documents(&id, &selected).await {
                Ok(docs) => generated.set(docs),
                Err(e) => fail(e),
            }
            generating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, selected, fail);
            generating.set(false);
        }
    };

    view! {
        <section class="knowledge-panel">
            <h2>{move || t(Text::Knowledge)}</h2>
            <ul class="knowledge-panel__items">
                {move || match items.get() {
                    Loadable::Loading => view! { <li>{t(Text::Loading)}</li> }.into_any(),
                    Loadable::Failed(e) => view! { <li class="error">{format!("{}: {e}", t(Text::LoadFailed))}</li> }.into_any(),
                    Loadable::Ready(list) if list.is_empty() => view! { <li>{t(Text::KnowledgeEmpty)}</li> }.into_any(),
                    Loadable::Ready(list) => {
                        let lang = ui.get().language;
                        list.into_iter()
                            .map(|item| {
                                let kind = i18n::document_kind_label(lang, &item.kind);
                                let id = item.id.clone();
                                view! {
                                    <li class="knowledge-panel__item">
                                        <span class="knowledge-panel__title">{item.title}</span>
                                        <span class="knowledge-panel__kind">{kind}</span>
                                        <button class="btn btn--ghost" on:click=move |_| on_delete(id.clone())>
                                            {i18n::t(lang, Text::Delete)}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </ul>

            <form class="knowledge-panel__add" on:submit=on_add>
                <input
                    type="text"
                    placeholder=move || t(Text::KnowledgeItemTitle)
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder=move || t(Text::KnowledgeContent)
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit" disabled=move || busy.get()>{move || t(Text::KnowledgeAdd)}</button>
            </form>

            <div class="knowledge-panel__generate">
                {DOCUMENT_KINDS
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <label class="knowledge-panel__kind-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || kinds.get().iter().any(|k| k == kind)
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        kinds.update(|list| {
                                            list.retain(|k| k != kind);
                                            if on {
                                                list.push(kind.to_owned());
                                            }
                                        });
                                    }
                                />
                                {move || i18n::document_kind_label(ui.get().language, kind)}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="btn btn--primary"
                    disabled=move || generating.get() || kinds.get().is_empty()
                    on:click=on_generate
                >
                    {move || if generating.get() { t(Text::Generating) } else { t(Text::GenerateDocuments) }}
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="knowledge-panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !generated.get().is_empty()>
                <h3>{move || t(Text::GeneratedDocuments)}</h3>
                {move || {
                    generated
                        .get()
                        .into_iter()
                        .map(|doc| {
                            let html = markdown::render_html(&doc.content);
                            view! {
                                <article class="generated-document">
                                    <h4>{doc.title}</h4>
                                    <div class="generated-document__body" inner_html=html></div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </section>
    }
}

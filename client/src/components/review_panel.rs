//! Delivered-project review: celebration banner, star picker, submitted view.

#[cfg(test)]
#[path = "review_panel_test.rs"]
mod review_panel_test;

use leptos::prelude::*;
use wire::{Project, ProjectReview};
use workflow::review::{MAX_RATING, ReviewDraft, ReviewError, ReviewPrompt, prompt_for, stars};

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::i18n::{self, Text};

/// Shown on the project page. Only customers may submit; everyone else sees
/// the submitted review once there is one.
#[component]
pub fn ReviewPanel(project: Project, on_submitted: Callback<ProjectReview>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let draft = RwSignal::new(ReviewDraft::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let project_id = StoredValue::new(project.id.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let lang = ui.get_untracked().language;
        let submission = match draft.get_untracked().validate() {
            Ok(submission) => submission,
            Err(ReviewError::RatingOutOfRange) => {
                error.set(Some(i18n::t(lang, Text::ReviewRatingRequired).to_owned()));
                return;
            }
            Err(ReviewError::EmptyText) => {
                error.set(Some(i18n::t(lang, Text::ReviewTextRequired).to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let id = project_id.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::submit_review(&id, &submission).await {
                Ok(review) => on_submitted.run(review),
                Err(e) => error.set(Some(format!("{}: {e}", i18n::t(lang, Text::ReviewFailed)))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, submission, on_submitted);
            busy.set(false);
        }
    };

    match prompt_for(&project) {
        ReviewPrompt::Hidden => ().into_any(),
        ReviewPrompt::Submitted(review) => {
            let when = i18n::format_date_str(ui.get_untracked().language, &review.submitted_at);
            view! {
                <section class="review-panel review-panel--submitted">
                    <p class="review-panel__thanks">{move || t(Text::ReviewThanks)}</p>
                    <p class="review-panel__stars" aria-label=review.rating.to_string()>{stars(review.rating)}</p>
                    <blockquote>{review.text}</blockquote>
                    <p class="review-panel__when">{when}</p>
                </section>
            }
            .into_any()
        }
        ReviewPrompt::Celebrate => view! {
            <section class="review-panel review-panel--celebrate">
                <h2>{move || t(Text::ReviewCelebrate)}</h2>
                <Show when=move || auth.get().role() == Some(wire::Role::Customer)>
                    <form class="review-panel__form" on:submit=on_submit>
                        <p>{move || t(Text::ReviewPrompt)}</p>
                        <fieldset class="review-panel__rating">
                            <legend>{move || t(Text::ReviewRating)}</legend>
                            {(1..=MAX_RATING)
                                .map(|n| {
                                    view! {
                                        <button
                                            type="button"
                                            class="review-panel__star"
                                            class=("review-panel__star--on", move || star_on(draft.get().rating, n))
                                            aria-label=n.to_string()
                                            on:click=move |_| draft.update(|d| d.rating = n)
                                        >
                                            {move || star_glyph(draft.get().rating, n)}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </fieldset>
                        <label>
                            {move || t(Text::ReviewText)}
                            <textarea
                                prop:value=move || draft.get().text
                                on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <Show when=move || error.get().is_some()>
                            <p class="review-panel__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || t(Text::ReviewSubmit)}
                        </button>
                    </form>
                </Show>
            </section>
        }
        .into_any(),
    }
}

/// Whether the star at `position` (1-based) is lit for `rating`.
fn star_on(rating: u8, position: u8) -> bool {
    position <= rating
}

fn star_glyph(rating: u8, position: u8) -> &'static str {
    if star_on(rating, position) { "★" } else { "☆" }
}

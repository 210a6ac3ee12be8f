//! Month calendar of meetings plus an upcoming list.

use leptos::prelude::*;
use time::{Date, Month};
use wire::Meeting;
use workflow::calendar::{by_day, month_grid, shift_month, upcoming};

use crate::state::ui::UiState;
use crate::util::clock;
use crate::util::i18n::{self, Text};

const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn MeetingCalendar(#[prop(into)] meetings: Signal<Vec<Meeting>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |text: Text| ui.get().t(text);

    let today = clock::now().date();
    let cursor = RwSignal::new((today.year(), today.month()));
    let shift = move |forward: bool| cursor.update(|(y, m)| (*y, *m) = shift_month(*y, *m, forward));

    let grid = move || {
        let (year, month) = cursor.get();
        let lang = ui.get().language;
        meetings.with(|list| {
            let days = by_day(list);
            month_grid(year, month)
                .into_iter()
                .map(|week| {
                    week.into_iter()
                        .map(|day| day_cell(day, day.and_then(|d| days.get(&d)).map_or(&[][..], Vec::as_slice), today, lang))
                        .collect::<Vec<_>>()
                })
                .map(|cells| view! { <tr>{cells}</tr> })
                .collect::<Vec<_>>()
        })
    };

    let soon = move || {
        let lang = ui.get().language;
        meetings.with(|list| {
            upcoming(list, clock::now(), UPCOMING_LIMIT)
                .into_iter()
                .map(|m| {
                    let when = i18n::format_date_str(lang, &m.starts_at);
                    let location = m.location.clone().unwrap_or_default();
                    view! {
                        <li class="meeting-calendar__upcoming-item">
                            <span class="meeting-calendar__when">{when}</span>
                            <span class="meeting-calendar__title">{m.title.clone()}</span>
                            <span class="meeting-calendar__location">{location}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="meeting-calendar">
            <header class="meeting-calendar__header">
                <button class="btn btn--ghost" aria-label=move || t(Text::PreviousMonth) on:click=move |_| shift(false)>
                    "‹"
                </button>
                <h3>{move || month_title(ui.get().language, cursor.get())}</h3>
                <button class="btn btn--ghost" aria-label=move || t(Text::NextMonth) on:click=move |_| shift(true)>
                    "›"
                </button>
            </header>
            <table class="meeting-calendar__grid">
                <thead>
                    <tr>
                        {move || {
                            i18n::weekday_headers(ui.get().language)
                                .into_iter()
                                .map(|d| view! { <th>{d}</th> })
                                .collect::<Vec<_>>()
                        }}
                    </tr>
                </thead>
                <tbody>{grid}</tbody>
            </table>
            <h3>{move || t(Text::UpcomingMeetings)}</h3>
            <ul class="meeting-calendar__upcoming">
                {move || {
                    let items = soon();
                    if items.is_empty() {
                        view! { <li>{t(Text::NoMeetings)}</li> }.into_any()
                    } else {
                        items.into_any()
                    }
                }}
            </ul>
        </section>
    }
}

fn month_title(lang: i18n::Language, (year, month): (i32, Month)) -> String {
    format!("{} {year}", i18n::month_name(lang, month))
}

fn day_cell(day: Option<Date>, meetings: &[&Meeting], today: Date, lang: i18n::Language) -> impl IntoView + use<> {
    let Some(day) = day else {
        return view! { <td class="meeting-calendar__day meeting-calendar__day--blank"></td> }.into_any();
    };
    let titles = meetings
        .iter()
        .map(|m| view! { <li class="meeting-calendar__chip">{m.title.clone()}</li> })
        .collect::<Vec<_>>();
    let label = i18n::format_date(lang, day);
    view! {
        <td
            class="meeting-calendar__day"
            class:meeting-calendar__day--today=day == today
            class:meeting-calendar__day--busy=!meetings.is_empty()
            title=label
        >
            <span class="meeting-calendar__date">{day.day()}</span>
            <ul>{titles}</ul>
        </td>
    }
    .into_any()
}

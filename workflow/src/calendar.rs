//! Meeting calendar helpers: month grid, day grouping, upcoming list.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::collections::BTreeMap;

use time::{Date, Month, OffsetDateTime};
use wire::Meeting;

use crate::dates::{parse_date, parse_timestamp};

/// One calendar row, Monday through Sunday. Days outside the month are `None`.
pub type Week = [Option<Date>; 7];

/// Week rows covering `month` of `year`, Monday-first. An invalid year
/// yields no rows.
#[must_use]
pub fn month_grid(year: i32, month: Month) -> Vec<Week> {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut slot = usize::from(first.weekday().number_days_from_monday());
    let mut day = Some(first);
    while let Some(current) = day.filter(|d| d.month() == month) {
        week[slot] = Some(current);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = current.next_day();
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// The month before or after `(year, month)`.
#[must_use]
pub fn shift_month(year: i32, month: Month, forward: bool) -> (i32, Month) {
    match (forward, month) {
        (true, Month::December) => (year + 1, Month::January),
        (false, Month::January) => (year - 1, Month::December),
        (true, m) => (year, m.next()),
        (false, m) => (year, m.previous()),
    }
}

/// Meetings grouped by start date, each day ordered by start time.
/// Meetings with an unparseable start are left out.
#[must_use]
pub fn by_day(meetings: &[Meeting]) -> BTreeMap<Date, Vec<&Meeting>> {
    let mut days: BTreeMap<Date, Vec<&Meeting>> = BTreeMap::new();
    for meeting in meetings {
        if let Some(date) = parse_date(&meeting.starts_at) {
            days.entry(date).or_default().push(meeting);
        }
    }
    for list in days.values_mut() {
        list.sort_by_key(|m| parse_timestamp(&m.starts_at));
    }
    days
}

/// Number of meetings starting at or after `now`.
#[must_use]
pub fn count_upcoming(meetings: &[Meeting], now: OffsetDateTime) -> usize {
    meetings
        .iter()
        .filter_map(|m| parse_timestamp(&m.starts_at))
        .filter(|t| *t >= now)
        .count()
}

/// Meetings starting at or after `now`, soonest first, at most `limit`.
#[must_use]
pub fn upcoming(meetings: &[Meeting], now: OffsetDateTime, limit: usize) -> Vec<&Meeting> {
    let mut next: Vec<(&Meeting, OffsetDateTime)> = meetings
        .iter()
        .filter_map(|m| parse_timestamp(&m.starts_at).map(|t| (m, t)))
        .filter(|(_, t)| *t >= now)
        .collect();
    next.sort_by_key(|(_, t)| *t);
    next.into_iter().take(limit).map(|(m, _)| m).collect()
}

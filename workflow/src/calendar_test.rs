use super::*;
use crate::dates::parse_timestamp;

fn meeting(id: &str, starts_at: &str) -> Meeting {
    Meeting {
        id: id.to_owned(),
        project_id: "p1".to_owned(),
        title: format!("Meeting {id}"),
        starts_at: starts_at.to_owned(),
        ends_at: None,
        location: None,
        attendee_ids: Vec::new(),
    }
}

// =============================================================
// month_grid
// =============================================================

#[test]
fn grid_starts_on_correct_weekday() {
    // 1 June 2026 is a Monday.
    let weeks = month_grid(2026, Month::June);
    assert_eq!(weeks[0][0].map(|d| d.day()), Some(1));
    // 1 March 2026 is a Sunday.
    let weeks = month_grid(2026, Month::March);
    assert!(weeks[0][..6].iter().all(Option::is_none));
    assert_eq!(weeks[0][6].map(|d| d.day()), Some(1));
}

#[test]
fn grid_covers_every_day_once() {
    let weeks = month_grid(2024, Month::February);
    let days: Vec<u8> = weeks.iter().flatten().flatten().map(|d| d.day()).collect();
    assert_eq!(days, (1..=29).collect::<Vec<_>>());
}

#[test]
fn grid_rows_are_full_weeks() {
    // March 2026 starts Sunday and has 31 days -> 6 rows.
    assert_eq!(month_grid(2026, Month::March).len(), 6);
    // February 2026 starts Sunday, 28 days -> 5 rows.
    assert_eq!(month_grid(2026, Month::February).len(), 5);
}

#[test]
fn shift_month_wraps_years() {
    assert_eq!(shift_month(2026, Month::December, true), (2027, Month::January));
    assert_eq!(shift_month(2026, Month::January, false), (2025, Month::December));
    assert_eq!(shift_month(2026, Month::May, true), (2026, Month::June));
}

// =============================================================
// by_day / upcoming
// =============================================================

#[test]
fn by_day_groups_and_orders() {
    let meetings = vec![
        meeting("late", "2026-06-02T15:00:00Z"),
        meeting("early", "2026-06-02T09:00:00Z"),
        meeting("other", "2026-06-05T10:00:00Z"),
        meeting("broken", "tbd"),
    ];
    let days = by_day(&meetings);
    assert_eq!(days.len(), 2);
    let first: Vec<_> = days.values().next().expect("day").iter().map(|m| m.id.as_str()).collect();
    assert_eq!(first, vec!["early", "late"]);
}

#[test]
fn upcoming_filters_past_and_limits() {
    let now = parse_timestamp("2026-06-02T12:00:00Z").expect("now");
    let meetings = vec![
        meeting("past", "2026-06-01T10:00:00Z"),
        meeting("third", "2026-06-09T10:00:00Z"),
        meeting("first", "2026-06-02T12:00:00Z"),
        meeting("second", "2026-06-03T08:00:00Z"),
    ];
    let ids: Vec<_> = upcoming(&meetings, now, 2).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn count_upcoming_has_no_ceiling() {
    let now = parse_timestamp("2026-06-02T12:00:00Z").expect("now");
    let mut meetings: Vec<Meeting> = (0..150)
        .map(|i| meeting(&format!("m{i}"), &format!("2026-07-{:02}T10:00:00Z", i % 28 + 1)))
        .collect();
    meetings.push(meeting("past", "2026-06-01T10:00:00Z"));
    assert_eq!(count_upcoming(&meetings, now), 150);
}

use super::*;
use crate::dates::parse_date;

fn milestone(id: &str, completed: bool, due_date: Option<&str>) -> Milestone {
    Milestone {
        id: id.to_owned(),
        project_id: "p1".to_owned(),
        title: format!("Milestone {id}"),
        due_date: due_date.map(str::to_owned),
        completed,
        completed_at: None,
    }
}

// =============================================================
// progress_percent
// =============================================================

#[test]
fn no_milestones_is_zero_percent() {
    assert_eq!(progress_percent(&[]), 0);
}

#[test]
fn all_completed_is_hundred_percent() {
    let ms = vec![milestone("a", true, None), milestone("b", true, None)];
    assert_eq!(progress_percent(&ms), 100);
}

#[test]
fn none_completed_is_zero_percent() {
    let ms = vec![milestone("a", false, None)];
    assert_eq!(progress_percent(&ms), 0);
}

#[test]
fn partial_completion_rounds_to_nearest() {
    // 1/3 = 33.3 -> 33
    let ms = vec![milestone("a", true, None), milestone("b", false, None), milestone("c", false, None)];
    assert_eq!(progress_percent(&ms), 33);
    // 2/3 = 66.7 -> 67
    let ms = vec![milestone("a", true, None), milestone("b", true, None), milestone("c", false, None)];
    assert_eq!(progress_percent(&ms), 67);
}

#[test]
fn exact_half_rounds_up() {
    // 1/8 = 12.5 -> 13
    let mut ms = vec![milestone("done", true, None)];
    ms.extend((0..7).map(|i| milestone(&format!("open-{i}"), false, None)));
    assert_eq!(progress_percent(&ms), 13);
}

// =============================================================
// Due dates
// =============================================================

#[test]
fn overdue_lists_incomplete_past_due_earliest_first() {
    let today = parse_date("2026-05-10").expect("date");
    let ms = vec![
        milestone("late-2", false, Some("2026-05-01")),
        milestone("done", true, Some("2026-04-01")),
        milestone("late-1", false, Some("2026-04-15")),
        milestone("today", false, Some("2026-05-10")),
        milestone("undated", false, None),
    ];
    let ids: Vec<_> = overdue(&ms, today).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["late-1", "late-2"]);
}

#[test]
fn next_due_skips_completed_and_undated() {
    let ms = vec![
        milestone("done", true, Some("2026-01-01")),
        milestone("undated", false, None),
        milestone("later", false, Some("2026-09-01")),
        milestone("sooner", false, Some("2026-06-01")),
    ];
    assert_eq!(next_due(&ms).map(|m| m.id.as_str()), Some("sooner"));
}

#[test]
fn next_due_is_none_when_all_done() {
    let ms = vec![milestone("a", true, Some("2026-01-01"))];
    assert!(next_due(&ms).is_none());
}

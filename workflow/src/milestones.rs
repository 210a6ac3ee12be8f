//! Milestone progress and due-date helpers.

#[cfg(test)]
#[path = "milestones_test.rs"]
mod milestones_test;

use time::Date;
use wire::Milestone;

use crate::dates::parse_date;

/// Completion percentage, rounded to the nearest integer (halves round up).
/// No milestones means 0%.
#[must_use]
pub fn progress_percent(milestones: &[Milestone]) -> u8 {
    let total = milestones.len();
    if total == 0 {
        return 0;
    }
    let done = milestones.iter().filter(|m| m.completed).count();
    // Integer rounding: (done * 100 + total / 2) / total, bounded by 100.
    let percent = (done * 100 + total / 2) / total;
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// Incomplete milestones whose due date lies before `today`, earliest first.
#[must_use]
pub fn overdue(milestones: &[Milestone], today: Date) -> Vec<&Milestone> {
    let mut late: Vec<(&Milestone, Date)> = milestones
        .iter()
        .filter(|m| !m.completed)
        .filter_map(|m| due(m).map(|d| (m, d)))
        .filter(|(_, d)| *d < today)
        .collect();
    late.sort_by_key(|(_, d)| *d);
    late.into_iter().map(|(m, _)| m).collect()
}

/// The incomplete milestone with the earliest due date.
#[must_use]
pub fn next_due(milestones: &[Milestone]) -> Option<&Milestone> {
    milestones
        .iter()
        .filter(|m| !m.completed)
        .filter_map(|m| due(m).map(|d| (m, d)))
        .min_by_key(|(_, d)| *d)
        .map(|(m, _)| m)
}

fn due(milestone: &Milestone) -> Option<Date> {
    milestone.due_date.as_deref().and_then(parse_date)
}

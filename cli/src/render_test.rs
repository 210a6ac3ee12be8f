use super::*;
use time::macros::date;
use wire::{InvitationStatus, PlanStatus, ProjectReview, ProjectStatus, Role, TicketPriority, TicketState};

fn milestone(title: &str, due: &str, completed: bool) -> Milestone {
    Milestone {
        id: title.to_owned(),
        project_id: "p1".to_owned(),
        title: title.to_owned(),
        due_date: Some(due.to_owned()),
        completed,
        completed_at: None,
    }
}

fn project() -> Project {
    Project {
        id: "p1".to_owned(),
        name: "Relaunch".to_owned(),
        description: Some("  New website  ".to_owned()),
        company_id: "c1".to_owned(),
        status: ProjectStatus::InProgress,
        project_leader_id: None,
        start_date: None,
        due_date: Some("2026-09-30".to_owned()),
        delivered_at: None,
        review: None,
    }
}

#[test]
fn wire_name_uses_serde_names() {
    assert_eq!(wire_name(&TicketState::InProgress), "in_progress");
    assert_eq!(wire_name(&PlanStatus::ChangesRequested), "changes_requested");
    assert_eq!(wire_name(&42), "?");
}

#[test]
fn project_line_is_tab_separated() {
    assert_eq!(project_line(&project()), "p1\tin_progress\tRelaunch\tdue 2026-09-30");
}

#[test]
fn project_details_include_review_stars() {
    let mut p = project();
    p.status = ProjectStatus::Delivered;
    p.review = Some(ProjectReview { rating: 4, text: "Great".to_owned(), submitted_at: "2026-10-01T00:00:00Z".to_owned() });
    let details = project_details(&p);
    assert!(details.contains("about:   New website"));
    assert!(details.contains("review:  ★★★★☆ Great"));
    assert!(!details.contains("start:"));
}

// =============================================================
// milestones
// =============================================================

#[test]
fn progress_summary_reports_next_and_overdue() {
    let list = vec![
        milestone("Kickoff", "2026-01-10", true),
        milestone("Design", "2026-02-01", false),
        milestone("Launch", "2026-12-01", false),
    ];
    assert_eq!(
        progress_summary(&list, date!(2026 - 03 - 01)),
        "1/3 milestones, 33%, next: Design (2026-02-01), 1 overdue"
    );
}

#[test]
fn progress_summary_without_milestones() {
    assert_eq!(progress_summary(&[], date!(2026 - 03 - 01)), "0/0 milestones, 0%");
}

#[test]
fn milestone_line_marks_completion() {
    assert_eq!(milestone_line(&milestone("Kickoff", "2026-01-10", true)), "[x] Kickoff\t2026-01-10");
}

// =============================================================
// other records
// =============================================================

#[test]
fn ticket_line_prefers_project_name() {
    let ticket = Ticket {
        id: "t1".to_owned(),
        title: "Fix footer".to_owned(),
        description: None,
        project_id: "p1".to_owned(),
        state: TicketState::Open,
        priority: TicketPriority::High,
        assignee_id: None,
        reporter_id: None,
        created_at: String::new(),
        updated_at: String::new(),
    };
    assert_eq!(ticket_line(&ticket, Some("Relaunch")), "t1\topen\thigh\tRelaunch\tFix footer");
    assert_eq!(ticket_line(&ticket, None), "t1\topen\thigh\tp1\tFix footer");
}

#[test]
fn invitation_line_shows_role_and_status() {
    let invitation = Invitation {
        id: "i1".to_owned(),
        email: "kunde@firma.de".to_owned(),
        role: Role::KeyAccountManager,
        company_id: None,
        status: InvitationStatus::Pending,
        expires_at: "2026-11-01".to_owned(),
    };
    assert_eq!(
        invitation_line(&invitation),
        "i1\tkunde@firma.de\tkey_account_manager\tpending\texpires 2026-11-01"
    );
}

use super::*;
use wire::ProjectStatus;

fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        company_id: "c1".to_owned(),
        status: ProjectStatus::InProgress,
        project_leader_id: None,
        start_date: None,
        due_date: None,
        delivered_at: None,
        review: None,
    }
}

fn ticket(id: &str, project_id: &str, state: TicketState, priority: TicketPriority) -> Ticket {
    Ticket {
        id: id.to_owned(),
        title: format!("Ticket {id}"),
        description: None,
        project_id: project_id.to_owned(),
        state,
        priority,
        assignee_id: None,
        reporter_id: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn fixture() -> (Vec<Ticket>, Vec<Project>) {
    let projects = vec![project("p1", "Website Relaunch"), project("p2", "Mobile App")];
    let tickets = vec![
        ticket("t1", "p1", TicketState::Open, TicketPriority::High),
        ticket("t2", "p1", TicketState::Closed, TicketPriority::Low),
        ticket("t3", "p2", TicketState::Open, TicketPriority::Low),
        ticket("t4", "p2", TicketState::InProgress, TicketPriority::High),
        ticket("t5", "p9", TicketState::Open, TicketPriority::High),
    ];
    (tickets, projects)
}

fn ids(tickets: &[&Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.id.clone()).collect()
}

// =============================================================
// TicketFilter::apply
// =============================================================

#[test]
fn empty_filter_keeps_everything() {
    let (tickets, projects) = fixture();
    let filter = TicketFilter::default();
    assert!(filter.is_empty());
    assert_eq!(filter.apply(&tickets, &projects).len(), tickets.len());
}

#[test]
fn state_filter_narrows_to_selected_states() {
    let (tickets, projects) = fixture();
    let mut filter = TicketFilter::default();
    filter.toggle_state(TicketState::Open);
    assert_eq!(ids(&filter.apply(&tickets, &projects)), vec!["t1", "t3", "t5"]);
}

#[test]
fn criteria_intersect() {
    let (tickets, projects) = fixture();
    let mut filter = TicketFilter::default();
    filter.toggle_state(TicketState::Open);
    filter.toggle_priority(TicketPriority::High);
    filter.project_query = "website".to_owned();
    assert_eq!(ids(&filter.apply(&tickets, &projects)), vec!["t1"]);
}

#[test]
fn project_query_is_case_insensitive_substring() {
    let (tickets, projects) = fixture();
    let filter = TicketFilter { project_query: "  APP ".to_owned(), ..TicketFilter::default() };
    assert_eq!(ids(&filter.apply(&tickets, &projects)), vec!["t3", "t4"]);
}

#[test]
fn unknown_project_never_matches_query() {
    let (tickets, projects) = fixture();
    let filter = TicketFilter { project_query: "e".to_owned(), ..TicketFilter::default() };
    assert!(!ids(&filter.apply(&tickets, &projects)).contains(&"t5".to_owned()));
}

#[test]
fn multiple_states_union_within_criterion() {
    let (tickets, projects) = fixture();
    let mut filter = TicketFilter::default();
    filter.toggle_state(TicketState::Closed);
    filter.toggle_state(TicketState::InProgress);
    assert_eq!(ids(&filter.apply(&tickets, &projects)), vec!["t2", "t4"]);
}

#[test]
fn toggling_twice_clears_chip() {
    let mut filter = TicketFilter::default();
    filter.toggle_priority(TicketPriority::Critical);
    filter.toggle_priority(TicketPriority::Critical);
    assert!(filter.is_empty());
}

// =============================================================
// Counts and helpers
// =============================================================

#[test]
fn counts_tally_states() {
    let (tickets, _) = fixture();
    let counts = TicketCounts::tally(&tickets);
    assert_eq!(counts.get(TicketState::Open), 3);
    assert_eq!(counts.get(TicketState::Review), 0);
    assert_eq!(counts.active(), 4);
    assert_eq!(counts.total(), 5);
}

#[test]
fn assigned_to_matches_assignee() {
    let (mut tickets, _) = fixture();
    tickets[2].assignee_id = Some("dev-1".to_owned());
    assert_eq!(ids(&assigned_to(&tickets, "dev-1")), vec!["t3"]);
}

#[test]
fn urgency_sort_puts_high_first_then_recent() {
    let (mut tickets, _) = fixture();
    tickets[3].updated_at = "2026-02-01T00:00:00Z".to_owned();
    let mut refs: Vec<&Ticket> = tickets.iter().collect();
    sort_by_urgency(&mut refs);
    assert_eq!(ids(&refs)[..3], ["t4", "t1", "t5"]);
}

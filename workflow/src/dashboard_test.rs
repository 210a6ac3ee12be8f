use super::*;
use crate::dates::parse_timestamp;
use wire::{PlanStatus, ProjectStatus, TicketPriority};

fn user(id: &str, role: Role, company_id: Option<&str>) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        role,
        company_id: company_id.map(str::to_owned),
    }
}

fn company(id: &str, kam: Option<&str>) -> Company {
    Company {
        id: id.to_owned(),
        name: id.to_uppercase(),
        contact_email: None,
        key_account_manager_id: kam.map(str::to_owned),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn project(id: &str, company_id: &str, status: ProjectStatus, leader: Option<&str>) -> Project {
    Project {
        id: id.to_owned(),
        name: id.to_owned(),
        description: None,
        company_id: company_id.to_owned(),
        status,
        project_leader_id: leader.map(str::to_owned),
        start_date: None,
        due_date: None,
        delivered_at: None,
        review: None,
    }
}

fn ticket(id: &str, project_id: &str, state: TicketState, priority: TicketPriority, assignee: Option<&str>) -> Ticket {
    Ticket {
        id: id.to_owned(),
        title: id.to_owned(),
        description: None,
        project_id: project_id.to_owned(),
        state,
        priority,
        assignee_id: assignee.map(str::to_owned),
        reporter_id: None,
        created_at: "2026-05-01T00:00:00Z".to_owned(),
        updated_at: "2026-05-01T00:00:00Z".to_owned(),
    }
}

fn milestone(id: &str, project_id: &str, due: &str, completed: bool) -> Milestone {
    Milestone {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        title: id.to_owned(),
        due_date: Some(due.to_owned()),
        completed,
        completed_at: None,
    }
}

fn meeting(id: &str, project_id: &str, starts_at: &str) -> Meeting {
    Meeting {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        title: id.to_owned(),
        starts_at: starts_at.to_owned(),
        ends_at: None,
        location: None,
        attendee_ids: Vec::new(),
    }
}

fn plan(id: &str, project_id: &str, status: PlanStatus) -> ProductPlan {
    ProductPlan {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        title: id.to_owned(),
        version: 1,
        status,
        content: String::new(),
        sent_at: None,
        viewed_at: None,
        decided_at: None,
        change_request: None,
    }
}

fn invitation(id: &str, status: InvitationStatus) -> Invitation {
    Invitation {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        role: Role::Customer,
        company_id: None,
        status,
        expires_at: "2026-07-01T00:00:00Z".to_owned(),
    }
}

fn now() -> OffsetDateTime {
    parse_timestamp("2026-06-02T12:00:00Z").expect("now")
}

fn value(tiles: &[Tile], kind: TileKind) -> usize {
    tiles.iter().find(|t| t.kind == kind).map(|t| t.value).expect("tile present")
}

struct Fixture {
    companies: Vec<Company>,
    projects: Vec<Project>,
    tickets: Vec<Ticket>,
    milestones: Vec<Milestone>,
    meetings: Vec<Meeting>,
    plans: Vec<ProductPlan>,
    invitations: Vec<Invitation>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            companies: vec![company("c1", Some("kam")), company("c2", None)],
            projects: vec![
                project("p1", "c1", ProjectStatus::InProgress, Some("pl")),
                project("p2", "c1", ProjectStatus::Delivered, None),
                project("p3", "c2", ProjectStatus::Planning, Some("pl")),
            ],
            tickets: vec![
                ticket("t1", "p1", TicketState::Open, TicketPriority::Critical, Some("dev")),
                ticket("t2", "p1", TicketState::Review, TicketPriority::Low, Some("dev")),
                ticket("t3", "p2", TicketState::Closed, TicketPriority::High, Some("dev")),
                ticket("t4", "p3", TicketState::InProgress, TicketPriority::Medium, None),
            ],
            milestones: vec![
                milestone("m1", "p1", "2026-05-01", false),
                milestone("m2", "p1", "2026-05-15", true),
                milestone("m3", "p3", "2026-09-01", false),
                milestone("m4", "p2", "2026-01-01", false),
            ],
            meetings: vec![
                meeting("past", "p1", "2026-06-01T10:00:00Z"),
                meeting("soon", "p1", "2026-06-03T10:00:00Z"),
                meeting("other", "p3", "2026-06-04T10:00:00Z"),
            ],
            plans: vec![
                plan("pp1", "p1", PlanStatus::Sent),
                plan("pp2", "p2", PlanStatus::Approved),
                plan("pp3", "p3", PlanStatus::Viewed),
            ],
            invitations: vec![
                invitation("i1", InvitationStatus::Pending),
                invitation("i2", InvitationStatus::Accepted),
            ],
        }
    }

    fn data(&self) -> DashboardData<'_> {
        DashboardData {
            companies: &self.companies,
            projects: &self.projects,
            tickets: &self.tickets,
            milestones: &self.milestones,
            meetings: &self.meetings,
            plans: &self.plans,
            invitations: &self.invitations,
        }
    }
}

// =============================================================
// per-role tiles
// =============================================================

#[test]
fn admin_counts_everything() {
    let fx = Fixture::new();
    let tiles = tiles(&user("admin", Role::Admin, None), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::Companies), 2);
    assert_eq!(value(&tiles, TileKind::ActiveProjects), 2);
    assert_eq!(value(&tiles, TileKind::OpenTickets), 3);
    assert_eq!(value(&tiles, TileKind::PendingInvitations), 1);
}

#[test]
fn customer_scoped_to_company() {
    let fx = Fixture::new();
    let tiles = tiles(&user("cust", Role::Customer, Some("c1")), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::MyProjects), 2);
    assert_eq!(value(&tiles, TileKind::OpenTickets), 2);
    assert_eq!(value(&tiles, TileKind::UpcomingMeetings), 1);
    let awaiting = tiles.iter().find(|t| t.kind == TileKind::PlansAwaitingDecision).expect("tile");
    assert_eq!(awaiting.value, 1);
    assert!(awaiting.alert);
}

#[test]
fn developer_sees_own_active_tickets() {
    let fx = Fixture::new();
    let tiles = tiles(&user("dev", Role::Developer, None), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::AssignedTickets), 2);
    assert_eq!(value(&tiles, TileKind::UrgentTickets), 1);
    assert_eq!(value(&tiles, TileKind::InReview), 1);
}

#[test]
fn key_account_manager_sees_managed_companies() {
    let fx = Fixture::new();
    let tiles = tiles(&user("kam", Role::KeyAccountManager, None), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::ManagedCompanies), 1);
    assert_eq!(value(&tiles, TileKind::ActiveProjects), 1);
    assert_eq!(value(&tiles, TileKind::OpenTickets), 2);
}

#[test]
fn project_leader_sees_led_projects() {
    let fx = Fixture::new();
    let tiles = tiles(&user("pl", Role::ProjectLeader, None), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::LedProjects), 2);
    assert_eq!(value(&tiles, TileKind::OverdueMilestones), 1);
    assert_eq!(value(&tiles, TileKind::UpcomingMeetings), 2);
}

#[test]
fn empty_data_yields_zero_tiles_without_alerts() {
    let tiles = tiles(&user("pl", Role::ProjectLeader, None), &DashboardData::default(), now());
    assert!(tiles.iter().all(|t| t.value == 0 && !t.alert));
}

#[test]
fn customer_without_company_counts_whole_list() {
    let fx = Fixture::new();
    let tiles = tiles(&user("cust", Role::Customer, None), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::MyProjects), fx.projects.len());
    assert_eq!(
        value(&tiles, TileKind::MyProjects),
        crate::selection::customer_projects(&fx.projects, None).len()
    );
}

#[test]
fn upcoming_meeting_tile_counts_past_a_hundred() {
    let mut fx = Fixture::new();
    fx.meetings = (0..120).map(|i| meeting(&format!("m{i}"), "p1", "2026-06-10T10:00:00Z")).collect();
    let tiles = tiles(&user("cust", Role::Customer, Some("c1")), &fx.data(), now());
    assert_eq!(value(&tiles, TileKind::UpcomingMeetings), 120);
}

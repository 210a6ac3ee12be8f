//! Role dashboard stat tiles.
//!
//! Each role lands on a dashboard with a handful of counters derived from the
//! collections the page already fetched. Collections are whatever the
//! backend returned for the user; scoping here only narrows further where the
//! role's tile is explicitly "mine".

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeSet;

use time::OffsetDateTime;
use wire::{
    Company, Invitation, InvitationStatus, Meeting, Milestone, ProductPlan, Project, Role, Ticket, TicketState, User,
};

use crate::calendar::count_upcoming;
use crate::milestones::overdue;
use crate::plans::awaits_customer;
use crate::selection::customer_projects;
use crate::tickets::assigned_to;

/// Counter shown on a dashboard tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Companies,
    ActiveProjects,
    OpenTickets,
    PendingInvitations,
    MyProjects,
    UpcomingMeetings,
    PlansAwaitingDecision,
    AssignedTickets,
    UrgentTickets,
    InReview,
    ManagedCompanies,
    LedProjects,
    OverdueMilestones,
}

/// One tile: what it counts, the count, and whether to highlight it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub value: usize,
    pub alert: bool,
}

impl Tile {
    fn plain(kind: TileKind, value: usize) -> Self {
        Self { kind, value, alert: false }
    }

    fn alerting(kind: TileKind, value: usize) -> Self {
        Self { kind, value, alert: value > 0 }
    }
}

/// Borrowed view over the collections a dashboard fetched.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardData<'a> {
    pub companies: &'a [Company],
    pub projects: &'a [Project],
    pub tickets: &'a [Ticket],
    pub milestones: &'a [Milestone],
    pub meetings: &'a [Meeting],
    pub plans: &'a [ProductPlan],
    pub invitations: &'a [Invitation],
}

/// Tiles for `user`'s role.
#[must_use]
pub fn tiles(user: &User, data: &DashboardData<'_>, now: OffsetDateTime) -> Vec<Tile> {
    match user.role {
        Role::Admin => admin_tiles(data),
        Role::Customer => customer_tiles(user, data, now),
        Role::Developer => developer_tiles(user, data),
        Role::KeyAccountManager => key_account_tiles(user, data),
        Role::ProjectLeader => project_leader_tiles(user, data, now),
    }
}

fn admin_tiles(data: &DashboardData<'_>) -> Vec<Tile> {
    vec![
        Tile::plain(TileKind::Companies, data.companies.len()),
        Tile::plain(TileKind::ActiveProjects, count_active_projects(data.projects.iter())),
        Tile::plain(TileKind::OpenTickets, count_active_tickets(data.tickets.iter())),
        Tile::plain(
            TileKind::PendingInvitations,
            data.invitations
                .iter()
                .filter(|i| i.status == InvitationStatus::Pending)
                .count(),
        ),
    ]
}

fn customer_tiles(user: &User, data: &DashboardData<'_>, now: OffsetDateTime) -> Vec<Tile> {
    let mine = customer_projects(data.projects, user.company_id.as_deref());
    let ids = project_ids(&mine);
    let tickets = data.tickets.iter().filter(|t| ids.contains(t.project_id.as_str()));
    let meetings: Vec<Meeting> = in_projects(data.meetings, &ids, |m| &m.project_id);
    let awaiting = data
        .plans
        .iter()
        .filter(|p| ids.contains(p.project_id.as_str()) && awaits_customer(p.status))
        .count();

    vec![
        Tile::plain(TileKind::MyProjects, mine.len()),
        Tile::plain(TileKind::OpenTickets, count_active_tickets(tickets)),
        Tile::plain(TileKind::UpcomingMeetings, count_upcoming(&meetings, now)),
        Tile::alerting(TileKind::PlansAwaitingDecision, awaiting),
    ]
}

fn developer_tiles(user: &User, data: &DashboardData<'_>) -> Vec<Tile> {
    let assigned: Vec<&Ticket> = assigned_to(data.tickets, &user.id)
        .into_iter()
        .filter(|t| t.state.is_active())
        .collect();
    let urgent = assigned.iter().filter(|t| t.priority.is_urgent()).count();
    let in_review = assigned.iter().filter(|t| t.state == TicketState::Review).count();

    vec![
        Tile::plain(TileKind::AssignedTickets, assigned.len()),
        Tile::alerting(TileKind::UrgentTickets, urgent),
        Tile::plain(TileKind::InReview, in_review),
    ]
}

fn key_account_tiles(user: &User, data: &DashboardData<'_>) -> Vec<Tile> {
    let managed: BTreeSet<&str> = data
        .companies
        .iter()
        .filter(|c| c.key_account_manager_id.as_deref() == Some(user.id.as_str()))
        .map(|c| c.id.as_str())
        .collect();
    let projects: Vec<&Project> = data
        .projects
        .iter()
        .filter(|p| managed.contains(p.company_id.as_str()))
        .collect();
    let ids = project_ids(&projects);
    let tickets = data.tickets.iter().filter(|t| ids.contains(t.project_id.as_str()));

    vec![
        Tile::plain(TileKind::ManagedCompanies, managed.len()),
        Tile::plain(TileKind::ActiveProjects, count_active_projects(projects.iter().copied())),
        Tile::plain(TileKind::OpenTickets, count_active_tickets(tickets)),
    ]
}

fn project_leader_tiles(user: &User, data: &DashboardData<'_>, now: OffsetDateTime) -> Vec<Tile> {
    let led: Vec<&Project> = data
        .projects
        .iter()
        .filter(|p| p.project_leader_id.as_deref() == Some(user.id.as_str()))
        .collect();
    let ids = project_ids(&led);
    let milestones: Vec<Milestone> = in_projects(data.milestones, &ids, |m| &m.project_id);
    let meetings: Vec<Meeting> = in_projects(data.meetings, &ids, |m| &m.project_id);

    vec![
        Tile::plain(TileKind::LedProjects, led.len()),
        Tile::alerting(TileKind::OverdueMilestones, overdue(&milestones, now.date()).len()),
        Tile::plain(TileKind::UpcomingMeetings, count_upcoming(&meetings, now)),
    ]
}

fn project_ids<'a>(projects: &[&'a Project]) -> BTreeSet<&'a str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

fn in_projects<T: Clone>(items: &[T], ids: &BTreeSet<&str>, project_of: impl Fn(&T) -> &String) -> Vec<T> {
    items
        .iter()
        .filter(|item| ids.contains(project_of(item).as_str()))
        .cloned()
        .collect()
}

fn count_active_projects<'a>(projects: impl Iterator<Item = &'a Project>) -> usize {
    projects.filter(|p| p.status.is_active()).count()
}

fn count_active_tickets<'a>(tickets: impl Iterator<Item = &'a Ticket>) -> usize {
    tickets.filter(|t| t.state.is_active()).count()
}

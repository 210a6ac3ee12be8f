//! Ticket list filtering and counting.
//!
//! Filters combine with intersection semantics: a ticket is shown only when
//! it satisfies every active criterion. An empty criterion set means "any".

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use wire::{Project, Ticket, TicketPriority, TicketState};

/// User-selected ticket list filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    pub states: BTreeSet<TicketState>,
    pub priorities: BTreeSet<TicketPriority>,
    /// Case-insensitive substring matched against the ticket's project name.
    pub project_query: String,
}

impl TicketFilter {
    /// True when no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.priorities.is_empty() && self.project_query.trim().is_empty()
    }

    /// Toggle a state chip.
    pub fn toggle_state(&mut self, state: TicketState) {
        if !self.states.remove(&state) {
            self.states.insert(state);
        }
    }

    /// Toggle a priority chip.
    pub fn toggle_priority(&mut self, priority: TicketPriority) {
        if !self.priorities.remove(&priority) {
            self.priorities.insert(priority);
        }
    }

    /// Return the tickets matching every active criterion, in input order.
    /// `projects` resolves project names; a ticket whose project is unknown
    /// never matches a non-empty project query.
    #[must_use]
    pub fn apply<'a>(&self, tickets: &'a [Ticket], projects: &[Project]) -> Vec<&'a Ticket> {
        let query = self.project_query.trim().to_lowercase();
        let names: BTreeMap<&str, String> =
            projects.iter().map(|p| (p.id.as_str(), p.name.to_lowercase())).collect();

        tickets
            .iter()
            .filter(|t| self.states.is_empty() || self.states.contains(&t.state))
            .filter(|t| self.priorities.is_empty() || self.priorities.contains(&t.priority))
            .filter(|t| {
                query.is_empty()
                    || names
                        .get(t.project_id.as_str())
                        .is_some_and(|name| name.contains(&query))
            })
            .collect()
    }
}

/// Ticket totals per state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketCounts {
    by_state: BTreeMap<TicketState, usize>,
}

impl TicketCounts {
    #[must_use]
    pub fn tally<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut by_state = BTreeMap::new();
        for ticket in tickets {
            *by_state.entry(ticket.state).or_insert(0) += 1;
        }
        Self { by_state }
    }

    #[must_use]
    pub fn get(&self, state: TicketState) -> usize {
        self.by_state.get(&state).copied().unwrap_or(0)
    }

    /// Open, in-progress and review tickets.
    #[must_use]
    pub fn active(&self) -> usize {
        self.by_state
            .iter()
            .filter(|(state, _)| state.is_active())
            .map(|(_, n)| n)
            .sum()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.by_state.values().sum()
    }
}

/// Tickets assigned to `user_id`.
#[must_use]
pub fn assigned_to<'a>(tickets: &'a [Ticket], user_id: &str) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| t.assignee_id.as_deref() == Some(user_id))
        .collect()
}

/// Sort most urgent first, then most recently updated first.
pub fn sort_by_urgency(tickets: &mut [&Ticket]) {
    tickets.sort_by(|a, b| {
        priority_rank(b.priority)
            .cmp(&priority_rank(a.priority))
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
}

fn priority_rank(priority: TicketPriority) -> u8 {
    match priority {
        TicketPriority::Critical => 4,
        TicketPriority::High => 3,
        TicketPriority::Medium => 2,
        TicketPriority::Low => 1,
        TicketPriority::Unknown => 0,
    }
}

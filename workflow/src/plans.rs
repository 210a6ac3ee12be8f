//! Product-plan action menu.
//!
//! The backend owns the plan lifecycle
//! (`draft -> sent -> viewed -> approved | changes_requested -> revised -> sent`,
//! archive from anywhere). This module only decides which buttons a role is
//! offered for a plan in a given status; the chosen action is posted and the
//! backend answers with the updated plan or a rejection.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use wire::{PlanStatus, Role};

/// An action a user can request on a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanAction {
    Send,
    MarkViewed,
    Approve,
    RequestChanges,
    Revise,
    Archive,
}

impl PlanAction {
    pub const ALL: [PlanAction; 6] = [
        PlanAction::Send,
        PlanAction::MarkViewed,
        PlanAction::Approve,
        PlanAction::RequestChanges,
        PlanAction::Revise,
        PlanAction::Archive,
    ];

    /// Path segment used by `POST /api/product-plans/:id/actions/:action`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::MarkViewed => "view",
            Self::Approve => "approve",
            Self::RequestChanges => "request_changes",
            Self::Revise => "revise",
            Self::Archive => "archive",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == raw)
    }

    /// Change requests must carry customer feedback.
    #[must_use]
    pub fn requires_feedback(self) -> bool {
        matches!(self, Self::RequestChanges)
    }
}

/// Badge tone for a plan status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Muted,
}

impl Tone {
    /// CSS modifier suffix, e.g. `badge--warning`.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Muted => "muted",
        }
    }
}

#[must_use]
pub fn tone(status: PlanStatus) -> Tone {
    match status {
        PlanStatus::Draft | PlanStatus::Unknown => Tone::Neutral,
        PlanStatus::Sent | PlanStatus::Viewed | PlanStatus::Revised => Tone::Info,
        PlanStatus::Approved => Tone::Success,
        PlanStatus::ChangesRequested => Tone::Warning,
        PlanStatus::Archived => Tone::Muted,
    }
}

/// Buttons offered to `role` for a plan in `status`.
#[must_use]
pub fn available_actions(status: PlanStatus, role: Role) -> Vec<PlanAction> {
    match role {
        Role::Customer => match status {
            PlanStatus::Sent | PlanStatus::Viewed => vec![PlanAction::Approve, PlanAction::RequestChanges],
            _ => Vec::new(),
        },
        Role::Developer => Vec::new(),
        Role::Admin | Role::KeyAccountManager | Role::ProjectLeader => match status {
            PlanStatus::Draft | PlanStatus::Revised => vec![PlanAction::Send, PlanAction::Archive],
            PlanStatus::ChangesRequested => vec![PlanAction::Revise, PlanAction::Archive],
            PlanStatus::Sent | PlanStatus::Viewed | PlanStatus::Approved => vec![PlanAction::Archive],
            PlanStatus::Archived | PlanStatus::Unknown => Vec::new(),
        },
    }
}

/// A customer opening a sent plan reports it as viewed.
#[must_use]
pub fn should_mark_viewed(status: PlanStatus, role: Role) -> bool {
    role == Role::Customer && status == PlanStatus::Sent
}

/// Plans waiting for a customer decision.
#[must_use]
pub fn awaits_customer(status: PlanStatus) -> bool {
    matches!(status, PlanStatus::Sent | PlanStatus::Viewed)
}

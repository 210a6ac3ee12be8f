//! Collections behind a role dashboard.

use wire::{Company, Invitation, Meeting, Milestone, ProductPlan, Project, Ticket};
use workflow::dashboard::DashboardData;

/// Everything one dashboard fetched. Collections a role does not need stay
/// empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardBundle {
    pub companies: Vec<Company>,
    pub projects: Vec<Project>,
    pub tickets: Vec<Ticket>,
    pub milestones: Vec<Milestone>,
    pub meetings: Vec<Meeting>,
    pub plans: Vec<ProductPlan>,
    pub invitations: Vec<Invitation>,
}

impl DashboardBundle {
    pub fn data(&self) -> DashboardData<'_> {
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

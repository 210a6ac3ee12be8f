//! Project selection resolution.
//!
//! The selected project id is persisted in browser storage and can outlive
//! the project (deleted, access revoked, different user). Resolution is
//! strict: a stale id resolves to nothing and the selector shows its
//! placeholder instead of guessing another project.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use wire::Project;

/// The selected project, if the id is present in `projects`.
#[must_use]
pub fn resolve<'a>(projects: &'a [Project], selected: Option<&str>) -> Option<&'a Project> {
    let selected = selected?;
    projects.iter().find(|p| p.id == selected)
}

/// Whether the stored selection should be cleared because it no longer
/// points at a listed project. An empty list is treated as "not loaded yet"
/// and never clears.
#[must_use]
pub fn is_stale(projects: &[Project], selected: Option<&str>) -> bool {
    match selected {
        Some(_) if !projects.is_empty() => resolve(projects, selected).is_none(),
        _ => false,
    }
}

/// Projects a customer sees as their own: those of their company, or the
/// whole backend-scoped list when the account has no company.
#[must_use]
pub fn customer_projects<'a>(projects: &'a [Project], company_id: Option<&str>) -> Vec<&'a Project> {
    match company_id {
        Some(company_id) => for_company(projects, company_id),
        None => projects.iter().collect(),
    }
}

/// Projects visible to a company-scoped user.
#[must_use]
pub fn for_company<'a>(projects: &'a [Project], company_id: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| p.company_id == company_id).collect()
}

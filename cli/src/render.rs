//! Plain-text rendering of portal records for the terminal.
//!
//! Every list command prints one line per record with tab-separated fields
//! so output pipes cleanly into `cut`/`column`. `--json` bypasses this.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use time::Date;
use wire::{Comment, Invitation, KnowledgeItem, Meeting, Milestone, ProductPlan, Project, Ticket};
use workflow::milestones::{next_due, overdue, progress_percent};
use workflow::review::stars;

use crate::CliError;

/// Serde name of an enum value (`"in_progress"`), or `"?"` when it does not
/// serialize to a string.
pub fn wire_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_else(|| "?".to_owned())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

pub fn project_line(project: &Project) -> String {
    let due = project.due_date.as_deref().unwrap_or("-");
    format!("{}\t{}\t{}\tdue {due}", project.id, wire_name(&project.status), project.name)
}

/// Detail block for `project show`.
pub fn project_details(project: &Project) -> String {
    let mut lines = vec![
        format!("{} ({})", project.name, project.id),
        format!("status:  {}", wire_name(&project.status)),
    ];
    if let Some(description) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!("about:   {}", description.trim()));
    }
    if let Some(start) = &project.start_date {
        lines.push(format!("start:   {start}"));
    }
    if let Some(due) = &project.due_date {
        lines.push(format!("due:     {due}"));
    }
    if let Some(review) = &project.review {
        lines.push(format!("review:  {} {}", stars(review.rating), review.text));
    }
    lines.join("\n")
}

/// One-line milestone summary: completion, next due, overdue count.
pub fn progress_summary(milestones: &[Milestone], today: Date) -> String {
    let done = milestones.iter().filter(|m| m.completed).count();
    let mut summary = format!("{done}/{} milestones, {}%", milestones.len(), progress_percent(milestones));
    if let Some(next) = next_due(milestones) {
        summary.push_str(&format!(", next: {} ({})", next.title, next.due_date.as_deref().unwrap_or("-")));
    }
    let late = overdue(milestones, today).len();
    if late > 0 {
        summary.push_str(&format!(", {late} overdue"));
    }
    summary
}

pub fn milestone_line(milestone: &Milestone) -> String {
    let mark = if milestone.completed { "x" } else { " " };
    format!("[{mark}] {}\t{}", milestone.title, milestone.due_date.as_deref().unwrap_or("-"))
}

pub fn ticket_line(ticket: &Ticket, project_name: Option<&str>) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        ticket.id,
        wire_name(&ticket.state),
        wire_name(&ticket.priority),
        project_name.unwrap_or(&ticket.project_id),
        ticket.title
    )
}

pub fn comment_line(comment: &Comment) -> String {
    let author = comment.author_name.as_deref().unwrap_or(&comment.author_id);
    format!("{} {author}: {}", comment.created_at, comment.body)
}

pub fn plan_line(plan: &ProductPlan) -> String {
    format!("{}\tv{}\t{}\t{}", plan.id, plan.version, wire_name(&plan.status), plan.title)
}

pub fn meeting_line(meeting: &Meeting) -> String {
    let location = meeting.location.as_deref().map(|l| format!(" @ {l}")).unwrap_or_default();
    format!("{}\t{}{location}", meeting.starts_at, meeting.title)
}

pub fn knowledge_line(item: &KnowledgeItem) -> String {
    format!("{}\t{}\t{}", item.id, item.kind, item.title)
}

pub fn invitation_line(invitation: &Invitation) -> String {
    format!(
        "{}\t{}\t{}\t{}\texpires {}",
        invitation.id,
        invitation.email,
        invitation.role.as_str(),
        wire_name(&invitation.status),
        invitation.expires_at
    )
}

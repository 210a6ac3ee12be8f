//! Request paths for the portal backend.
//!
//! Paths are relative to the API origin. The browser client requests them
//! same-origin (the `server` crate proxies `/api/*`), the CLI prefixes its
//! configured base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const LOGIN: &str = "/api/auth/login";
pub const ME: &str = "/api/auth/me";
pub const COMPANIES: &str = "/api/companies";
pub const PROJECTS: &str = "/api/projects";
pub const TICKETS: &str = "/api/tickets";
pub const MEETINGS: &str = "/api/meetings";
pub const INVITATIONS: &str = "/api/invitations";
pub const DOCUMENT_UPLOAD: &str = "/api/documents/upload";
pub const HEALTH: &str = "/healthz";

#[must_use]
pub fn project(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}")
}

#[must_use]
pub fn project_milestones(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}/milestones")
}

#[must_use]
pub fn project_meetings(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}/meetings")
}

#[must_use]
pub fn project_plans(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}/product-plans")
}

#[must_use]
pub fn project_notes(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}/notes")
}

#[must_use]
pub fn project_form_responses(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}/form-responses")
}

#[must_use]
pub fn project_review(project_id: &str) -> String {
    format!("{PROJECTS}/{project_id}/review")
}

#[must_use]
pub fn ticket(ticket_id: &str) -> String {
    format!("{TICKETS}/{ticket_id}")
}

#[must_use]
pub fn ticket_comments(ticket_id: &str) -> String {
    format!("{TICKETS}/{ticket_id}/comments")
}

#[must_use]
pub fn product_plan(plan_id: &str) -> String {
    format!("/api/product-plans/{plan_id}")
}

/// `action` is the wire name of a plan action, e.g. `"approve"`.
#[must_use]
pub fn product_plan_action(plan_id: &str, action: &str) -> String {
    format!("/api/product-plans/{plan_id}/actions/{action}")
}

#[must_use]
pub fn invitation_revoke(invitation_id: &str) -> String {
    format!("{INVITATIONS}/{invitation_id}/revoke")
}

/// Streaming chat endpoint.
#[must_use]
pub fn rag_chat(project_id: &str) -> String {
    format!("/api/rag/projects/{project_id}/chat")
}

#[must_use]
pub fn rag_knowledge(project_id: &str) -> String {
    format!("/api/rag/projects/{project_id}/knowledge")
}

#[must_use]
pub fn rag_knowledge_item(project_id: &str, item_id: &str) -> String {
    format!("/api/rag/projects/{project_id}/knowledge/{item_id}")
}

#[must_use]
pub fn rag_generate_documents(project_id: &str) -> String {
    format!("/api/rag/projects/{project_id}/generate-documents")
}

/// Join a base URL and an API path without doubling the slash.
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

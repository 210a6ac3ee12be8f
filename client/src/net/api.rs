//! REST API helpers for the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin under
//! `/api` (the server proxies to the backend), with the stored bearer token
//! attached. Server-side (SSR): every call returns
//! [`ApiError::Unavailable`]; pages render their loading state instead.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! one panel without crashing hydration. A 401 is reported as
//! [`ApiError::Unauthorized`] so the caller can drop the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{
    Comment, Company, FormResponse, Invitation, InternalNote, LoginRequest, LoginResponse, Meeting, Milestone,
    NewComment, NewInvitation, PlanActionRequest, ProductPlan, Project, ProjectReview, ReviewSubmission, Role,
    Ticket, TicketPatch, User, endpoints,
};
use workflow::plans::PlanAction;

use crate::state::dashboard::DashboardBundle;

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthorized,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map a response status to an error; `None` for success.
#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthorized),
        other => Some(ApiError::Status(other)),
    }
}

/// Request body for a plan action. Feedback is only sent with a change
/// request, trimmed, and dropped when blank.
fn plan_action_request(action: PlanAction, feedback: &str) -> PlanActionRequest {
    let feedback = feedback.trim();
    PlanActionRequest {
        feedback: (action.requires_feedback() && !feedback.is_empty()).then(|| feedback.to_owned()),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

#[cfg(feature = "hydrate")]
fn builder(verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let builder = match verb {
        Verb::Get => Request::get(path),
        Verb::Post => Request::post(path),
        Verb::Patch => Request::patch(path),
        Verb::Delete => Request::delete(path),
    };
    match crate::util::auth::load_token() {
        Some(token) => builder.header("Authorization", &endpoints::bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    match classify_status(resp.status()) {
        Some(err) => Err(err),
        None => Ok(resp),
    }
}

/// `verb path` with an optional JSON body, decoding a JSON response.
async fn call<B, T>(verb: Verb, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let builder = builder(verb, path);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = send(request).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Like [`call`] but ignores the response body.
async fn call_empty(verb: Verb, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = builder(verb, path).build().map_err(|e| ApiError::Network(e.to_string()))?;
        send(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    call::<(), T>(Verb::Get, path, None).await
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] for wrong credentials; other variants for
/// transport failures.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    call(Verb::Post, endpoints::LOGIN, Some(&body)).await
}

/// Fetch the user behind the stored token from `/api/auth/me`.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] when there is no valid token.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    get(endpoints::ME).await
}

// =============================================================================
// PROJECTS
// =============================================================================

pub async fn fetch_companies() -> Result<Vec<Company>, ApiError> {
    get(endpoints::COMPANIES).await
}

pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    get(endpoints::PROJECTS).await
}

pub async fn fetch_project(project_id: &str) -> Result<Project, ApiError> {
    get(&endpoints::project(project_id)).await
}

pub async fn fetch_milestones(project_id: &str) -> Result<Vec<Milestone>, ApiError> {
    get(&endpoints::project_milestones(project_id)).await
}

pub async fn fetch_project_meetings(project_id: &str) -> Result<Vec<Meeting>, ApiError> {
    get(&endpoints::project_meetings(project_id)).await
}

pub async fn fetch_project_plans(project_id: &str) -> Result<Vec<ProductPlan>, ApiError> {
    get(&endpoints::project_plans(project_id)).await
}

/// Staff-only internal notes.
pub async fn fetch_notes(project_id: &str) -> Result<Vec<InternalNote>, ApiError> {
    get(&endpoints::project_notes(project_id)).await
}

pub async fn fetch_form_responses(project_id: &str) -> Result<Vec<FormResponse>, ApiError> {
    get(&endpoints::project_form_responses(project_id)).await
}

/// Submit the delivery review; the backend answers with the stored review.
pub async fn submit_review(project_id: &str, review: &ReviewSubmission) -> Result<ProjectReview, ApiError> {
    call(Verb::Post, &endpoints::project_review(project_id), Some(review)).await
}

pub async fn fetch_meetings() -> Result<Vec<Meeting>, ApiError> {
    get(endpoints::MEETINGS).await
}

// =============================================================================
// TICKETS
// =============================================================================

pub async fn fetch_tickets() -> Result<Vec<Ticket>, ApiError> {
    get(endpoints::TICKETS).await
}

pub async fn update_ticket(ticket_id: &str, patch: &TicketPatch) -> Result<Ticket, ApiError> {
    call(Verb::Patch, &endpoints::ticket(ticket_id), Some(patch)).await
}

pub async fn fetch_comments(ticket_id: &str) -> Result<Vec<Comment>, ApiError> {
    get(&endpoints::ticket_comments(ticket_id)).await
}

pub async fn add_comment(ticket_id: &str, body: &str) -> Result<Comment, ApiError> {
    let body = NewComment { body: body.trim().to_owned() };
    call(Verb::Post, &endpoints::ticket_comments(ticket_id), Some(&body)).await
}

// =============================================================================
// PRODUCT PLANS
// =============================================================================

pub async fn fetch_plan(plan_id: &str) -> Result<ProductPlan, ApiError> {
    get(&endpoints::product_plan(plan_id)).await
}

/// Ask the backend to perform `action` on a plan; returns the updated plan.
pub async fn plan_action(plan_id: &str, action: PlanAction, feedback: &str) -> Result<ProductPlan, ApiError> {
    let body = plan_action_request(action, feedback);
    call(Verb::Post, &endpoints::product_plan_action(plan_id, action.as_str()), Some(&body)).await
}

// =============================================================================
// ADMIN
// =============================================================================

pub async fn fetch_invitations() -> Result<Vec<Invitation>, ApiError> {
    get(endpoints::INVITATIONS).await
}

pub async fn create_invitation(invitation: &NewInvitation) -> Result<Invitation, ApiError> {
    call(Verb::Post, endpoints::INVITATIONS, Some(invitation)).await
}

pub async fn revoke_invitation(invitation_id: &str) -> Result<(), ApiError> {
    call_empty(Verb::Post, &endpoints::invitation_revoke(invitation_id)).await
}

// =============================================================================
// SHARED WITH `rag`
// =============================================================================

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    call_empty(Verb::Delete, path).await
}

pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    call(Verb::Post, path, Some(body)).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get(path).await
}

// =============================================================================
// DOCUMENT UPLOAD
// =============================================================================

/// Upload `file` as multipart form data to `POST /api/documents/upload`.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    file: &web_sys::File,
    fields: &wire::UploadFields,
) -> Result<wire::UploadedDocument, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    for (name, value) in fields.parts() {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::Network(format!("could not attach {name}")))?;
    }
    let request = builder(Verb::Post, endpoints::DOCUMENT_UPLOAD)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = send(request).await?;
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Which collections a role's dashboard needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardNeeds {
    pub companies: bool,
    pub projects: bool,
    pub tickets: bool,
    pub meetings: bool,
    pub invitations: bool,
    /// Milestones of the projects the user leads.
    pub led_milestones: bool,
    /// Product plans of every visible project.
    pub plans: bool,
}

impl DashboardNeeds {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self { companies: true, projects: true, tickets: true, invitations: true, ..Self::default() },
            Role::Customer => Self { projects: true, tickets: true, meetings: true, plans: true, ..Self::default() },
            Role::Developer => Self { projects: true, tickets: true, ..Self::default() },
            Role::KeyAccountManager => Self { companies: true, projects: true, tickets: true, ..Self::default() },
            Role::ProjectLeader => {
                Self { projects: true, tickets: true, meetings: true, led_milestones: true, ..Self::default() }
            }
        }
    }
}

/// Fetch what `user`'s dashboard needs. Per-project collections are fetched
/// concurrently.
pub async fn load_dashboard(user: &User) -> Result<DashboardBundle, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::try_join_all;

        let needs = DashboardNeeds::for_role(user.role);
        let mut bundle = DashboardBundle::default();
        if needs.companies {
            bundle.companies = fetch_companies().await?;
        }
        if needs.projects {
            bundle.projects = fetch_projects().await?;
        }
        if needs.tickets {
            bundle.tickets = fetch_tickets().await?;
        }
        if needs.meetings {
            bundle.meetings = fetch_meetings().await?;
        }
        if needs.invitations {
            bundle.invitations = fetch_invitations().await?;
        }
        if needs.led_milestones {
            let led = bundle
                .projects
                .iter()
                .filter(|p| p.project_leader_id.as_deref() == Some(user.id.as_str()));
            bundle.milestones = try_join_all(led.map(|p| fetch_milestones(&p.id))).await?.concat();
        }
        if needs.plans {
            bundle.plans = try_join_all(bundle.projects.iter().map(|p| fetch_project_plans(&p.id)))
                .await?
                .concat();
        }
        Ok(bundle)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(ApiError::Unavailable)
    }
}

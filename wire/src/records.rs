//! Portal entity records as served by the backend API.
//!
//! DESIGN
//! ======
//! Records mirror the backend JSON so serde round-trips stay lossless. The
//! front end never validates or transitions these entities itself; it reads
//! them for rendering and filtering and sends mutation requests back.
//! Timestamps stay as RFC 3339 strings and calendar dates as `YYYY-MM-DD`
//! strings; consumers that need ordering parse them on demand.
//!
//! Every status-like enum has an `Unknown` catch-all so a value added on the
//! backend degrades one badge instead of failing a whole list decode.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS AND COMPANIES
// =============================================================================

/// Portal role; decides which dashboard and which actions a user sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Customer,
    Developer,
    KeyAccountManager,
    ProjectLeader,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Customer,
        Role::Developer,
        Role::KeyAccountManager,
        Role::ProjectLeader,
    ];

    /// Wire name, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
            Self::Developer => "developer",
            Self::KeyAccountManager => "key_account_manager",
            Self::ProjectLeader => "project_leader",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }

    /// Agency-side roles (everyone except customers).
    #[must_use]
    pub fn is_staff(self) -> bool {
        !matches!(self, Self::Customer)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// An authenticated portal user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Customer company the user belongs to, if any.
    #[serde(default)]
    pub company_id: Option<String>,
}

/// Response body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// A customer company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Agency user responsible for the account.
    #[serde(default)]
    pub key_account_manager_id: Option<String>,
    pub created_at: String,
}

// =============================================================================
// PROJECTS
// =============================================================================

/// Lifecycle status of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Review,
    Delivered,
    OnHold,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    /// Projects still being worked on.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Planning | Self::InProgress | Self::Review)
    }
}

/// Customer review stored after delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReview {
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
    pub submitted_at: String,
}

/// A customer project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub company_id: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub project_leader_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub review: Option<ProjectReview>,
}

/// A project milestone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// A scheduled project meeting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub starts_at: String,
    #[serde(default)]
    pub ends_at: Option<String>,
    /// Room or video-call link.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendee_ids: Vec<String>,
}

// =============================================================================
// TICKETS
// =============================================================================

/// Workflow state of a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    Open,
    InProgress,
    Review,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl TicketState {
    /// Known states in board order.
    pub const ALL: [TicketState; 5] = [
        TicketState::Open,
        TicketState::InProgress,
        TicketState::Review,
        TicketState::Resolved,
        TicketState::Closed,
    ];

    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire name; unknown input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == raw)
    }

    /// Tickets that still need work.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Review)
    }
}

/// Ticket urgency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl TicketPriority {
    /// Known priorities, lowest first.
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire name; unknown input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.as_str() == raw)
    }

    /// High and critical tickets.
    #[must_use]
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// A ticket (issue) filed against a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub project_id: String,
    pub state: TicketState,
    pub priority: TicketPriority,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub reporter_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Partial update body for `PATCH /api/tickets/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TicketState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// A comment on a ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub ticket_id: String,
    pub author_id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub body: String,
    pub created_at: String,
}

// =============================================================================
// PRODUCT PLANS
// =============================================================================

/// Review/approval status of a product plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    Sent,
    Viewed,
    Approved,
    ChangesRequested,
    Revised,
    Archived,
    #[serde(other)]
    Unknown,
}

/// A versioned product plan document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPlan {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub version: u32,
    pub status: PlanStatus,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub viewed_at: Option<String>,
    /// When the customer approved or requested changes.
    #[serde(default)]
    pub decided_at: Option<String>,
    /// Customer feedback attached to a change request.
    #[serde(default)]
    pub change_request: Option<String>,
}

// =============================================================================
// INVITATIONS, NOTES, FORMS
// =============================================================================

/// Lifecycle of an invitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
    Revoked,
    #[serde(other)]
    Unknown,
}

/// An invitation to join the portal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub company_id: Option<String>,
    pub status: InvitationStatus,
    pub expires_at: String,
}

/// Body of `POST /api/invitations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewInvitation {
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Agency-internal note on a project, never shown to customers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InternalNote {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: String,
}

/// A submitted onboarding/briefing form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    pub id: String,
    pub project_id: String,
    pub form_key: String,
    /// Free-form answers keyed by question.
    pub answers: serde_json::Value,
    pub submitted_at: String,
}

// =============================================================================
// KNOWLEDGE AND DOCUMENTS
// =============================================================================

/// A knowledge-base entry the chat assistant can retrieve from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub id: String,
    pub project_id: String,
    pub title: String,
    /// Origin of the entry, e.g. `"note"`, `"document"`, `"ticket"`.
    pub kind: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_at: String,
}

/// Body of `POST /api/rag/projects/:id/knowledge`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewKnowledgeItem {
    pub title: String,
    pub content: String,
}

/// Body of `POST /api/rag/projects/:id/generate-documents`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentsRequest {
    /// Requested document kinds; empty asks the backend for its defaults.
    #[serde(default)]
    pub kinds: Vec<String>,
}

/// A document produced by the generation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: String,
    pub title: String,
    pub kind: String,
    /// Markdown body.
    pub content: String,
}

/// Response of the generation endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<GeneratedDocument>,
}

/// A file stored by `POST /api/documents/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub id: String,
    pub name: String,
    pub category: String,
    pub project_id: String,
    #[serde(default)]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Non-file fields of a document upload, in multipart order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFields {
    pub project_id: String,
    pub category: String,
    pub name: String,
    pub ticket_id: Option<String>,
}

impl UploadFields {
    /// Multipart text parts, excluding the `file` part. `ticket_id` is omitted
    /// when absent.
    #[must_use]
    pub fn parts(&self) -> Vec<(&'static str, &str)> {
        let mut parts = vec![
            ("project_id", self.project_id.as_str()),
            ("category", self.category.as_str()),
            ("name", self.name.as_str()),
        ];
        if let Some(ticket_id) = self.ticket_id.as_deref() {
            parts.push(("ticket_id", ticket_id));
        }
        parts
    }
}

// =============================================================================
// CHAT REQUEST
// =============================================================================

/// One prior turn sent along with a chat request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
}

/// Body of `POST /api/rag/projects/:id/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
}

/// Body of `POST /api/tickets/:id/comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
}

/// Body of `POST /api/product-plans/:id/actions/:action`. `feedback` carries
/// the change request text and is omitted for other actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanActionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Body of `POST /api/projects/:id/review`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    pub rating: u8,
    pub text: String,
}

//! UI strings in German and English.
//!
//! Every user-visible string goes through [`t`] or one of the label helpers.
//! German is the default; the choice persists under
//! [`LANGUAGE_KEY`](crate::util::storage::LANGUAGE_KEY).

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use time::Month;
use wire::{InvitationStatus, PlanStatus, ProjectStatus, Role, TicketPriority, TicketState};
use workflow::dashboard::TileKind;
use workflow::plans::PlanAction;

use crate::util::storage::{self, LANGUAGE_KEY};

/// UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Accepts `de`, `en` and region-tagged forms like `en-US`, any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let primary = raw.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }

    /// The other language; the toolbar toggles between the two.
    pub fn toggled(self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }

    /// Stored preference, or the default.
    pub fn load() -> Self {
        storage::load_string(LANGUAGE_KEY)
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    pub fn save(self) {
        storage::save_string(LANGUAGE_KEY, self.code());
    }
}

/// Static UI strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    Loading,
    Redirecting,
    LoadFailed,
    Cancel,
    Delete,
    Send,
    Stop,
    Clear,
    Logout,
    NotFound,

    NavDashboard,
    NavTickets,
    NavAdmin,
    ToggleDarkMode,
    ToggleLanguage,

    LoginTitle,
    Email,
    Password,
    SignIn,
    LoginMissingFields,
    LoginFailed,
    LoginInvalid,

    DashboardTitle,
    SelectProject,
    NoProjects,
    OpenProject,
    UpcomingMeetings,
    NoMeetings,
    OverdueMilestones,
    NoOverdue,
    ManagedCompanies,
    LedProjects,
    Projects,

    Milestones,
    NoMilestones,
    Progress,
    DueDate,
    NextMilestone,
    Status,
    ProductPlans,
    NoPlans,
    Meetings,
    Notes,
    NoNotes,
    FormResponses,
    NoFormResponses,
    Chat,
    Knowledge,
    Documents,

    ReviewCelebrate,
    ReviewPrompt,
    ReviewRating,
    ReviewText,
    ReviewSubmit,
    ReviewThanks,
    ReviewRatingRequired,
    ReviewTextRequired,
    ReviewFailed,

    ChatPlaceholder,
    ChatEmpty,
    ChatError,
    ChatThinking,
    ChatSources,

    TicketsTitle,
    FilterState,
    FilterPriority,
    FilterProject,
    ClearFilters,
    NoTickets,
    TicketColumn,
    ProjectColumn,
    StateColumn,
    PriorityColumn,
    AssigneeColumn,
    UpdatedColumn,
    Unassigned,
    Comments,
    NoComments,
    CommentPlaceholder,
    AddComment,
    UpdateFailed,

    PlanVersion,
    PlanChangeRequest,
    PlanFeedbackPlaceholder,
    PlanFeedbackRequired,
    PlanActionFailed,
    BackToProject,

    KnowledgeEmpty,
    KnowledgeItemTitle,
    KnowledgeContent,
    KnowledgeAdd,
    GenerateDocuments,
    Generating,
    GeneratedDocuments,

    UploadTitle,
    UploadFile,
    UploadName,
    UploadCategory,
    UploadSubmit,
    UploadDone,
    UploadFailed,
    UploadMissingFile,

    AdminTitle,
    Companies,
    NoCompanies,
    ContactEmail,
    Invitations,
    NoInvitations,
    InviteEmail,
    InviteRole,
    InviteCompany,
    InviteCreate,
    InviteRevoke,
    InviteExpires,
    NoCompany,
    InviteEmailRequired,
    InviteCompanyRequired,

    PreviousMonth,
    NextMonth,
}

/// German and English forms of `text`.
#[allow(clippy::too_many_lines)]
fn pair(text: Text) -> (&'static str, &'static str) {
    match text {
        Text::AppTitle => ("Kundenportal", "Customer Portal"),
        Text::Loading => ("Wird geladen...", "Loading..."),
        Text::Redirecting => ("Weiterleitung zur Anmeldung...", "Redirecting to login..."),
        Text::LoadFailed => ("Laden fehlgeschlagen", "Failed to load"),
        Text::Cancel => ("Abbrechen", "Cancel"),
        Text::Delete => ("Löschen", "Delete"),
        Text::Send => ("Senden", "Send"),
        Text::Stop => ("Stopp", "Stop"),
        Text::Clear => ("Leeren", "Clear"),
        Text::Logout => ("Abmelden", "Log out"),
        Text::NotFound => ("Seite nicht gefunden.", "Page not found."),

        Text::NavDashboard => ("Übersicht", "Dashboard"),
        Text::NavTickets => ("Tickets", "Tickets"),
        Text::NavAdmin => ("Verwaltung", "Admin"),
        Text::ToggleDarkMode => ("Dunkelmodus umschalten", "Toggle dark mode"),
        Text::ToggleLanguage => ("Sprache wechseln", "Switch language"),

        Text::LoginTitle => ("Anmeldung", "Sign in"),
        Text::Email => ("E-Mail", "Email"),
        Text::Password => ("Passwort", "Password"),
        Text::SignIn => ("Anmelden", "Sign in"),
        Text::LoginMissingFields => ("Bitte E-Mail und Passwort eingeben.", "Enter email and password."),
        Text::LoginFailed => ("Anmeldung fehlgeschlagen", "Sign-in failed"),
        Text::LoginInvalid => ("E-Mail oder Passwort ist falsch.", "Email or password is incorrect."),

        Text::DashboardTitle => ("Übersicht", "Dashboard"),
        Text::SelectProject => ("Projekt auswählen", "Select a project"),
        Text::NoProjects => ("Keine Projekte vorhanden.", "No projects yet."),
        Text::OpenProject => ("Projekt öffnen", "Open project"),
        Text::UpcomingMeetings => ("Anstehende Termine", "Upcoming meetings"),
        Text::NoMeetings => ("Keine Termine.", "No meetings."),
        Text::OverdueMilestones => ("Überfällige Meilensteine", "Overdue milestones"),
        Text::NoOverdue => ("Nichts überfällig.", "Nothing overdue."),
        Text::ManagedCompanies => ("Betreute Firmen", "Managed companies"),
        Text::LedProjects => ("Geleitete Projekte", "Led projects"),
        Text::Projects => ("Projekte", "Projects"),

        Text::Milestones => ("Meilensteine", "Milestones"),
        Text::NoMilestones => ("Keine Meilensteine.", "No milestones."),
        Text::Progress => ("Fortschritt", "Progress"),
        Text::DueDate => ("Fällig", "Due"),
        Text::NextMilestone => ("Nächster Meilenstein", "Next milestone"),
        Text::Status => ("Status", "Status"),
        Text::ProductPlans => ("Produktpläne", "Product plans"),
        Text::NoPlans => ("Keine Produktpläne.", "No product plans."),
        Text::Meetings => ("Termine", "Meetings"),
        Text::Notes => ("Interne Notizen", "Internal notes"),
        Text::NoNotes => ("Keine Notizen.", "No notes."),
        Text::FormResponses => ("Formularantworten", "Form responses"),
        Text::NoFormResponses => ("Keine Formularantworten.", "No form responses."),
        Text::Chat => ("Projekt-Assistent", "Project assistant"),
        Text::Knowledge => ("Wissensbasis", "Knowledge base"),
        Text::Documents => ("Dokumente", "Documents"),

        Text::ReviewCelebrate => ("Ihr Projekt wurde geliefert!", "Your project has been delivered!"),
        Text::ReviewPrompt => (
            "Wie zufrieden sind Sie mit dem Ergebnis?",
            "How happy are you with the result?",
        ),
        Text::ReviewRating => ("Bewertung", "Rating"),
        Text::ReviewText => ("Ihr Feedback", "Your feedback"),
        Text::ReviewSubmit => ("Bewertung abschicken", "Submit review"),
        Text::ReviewThanks => ("Vielen Dank für Ihre Bewertung.", "Thank you for your review."),
        Text::ReviewRatingRequired => ("Bitte 1 bis 5 Sterne vergeben.", "Pick 1 to 5 stars."),
        Text::ReviewTextRequired => ("Bitte ein kurzes Feedback schreiben.", "Please write a short feedback."),
        Text::ReviewFailed => ("Bewertung konnte nicht gespeichert werden.", "Could not save the review."),

        Text::ChatPlaceholder => ("Frage zum Projekt stellen...", "Ask about the project..."),
        Text::ChatEmpty => ("Noch keine Nachrichten.", "No messages yet."),
        Text::ChatError => (
            "Entschuldigung, bei der Antwort ist ein Fehler aufgetreten.",
            "Sorry, something went wrong while answering.",
        ),
        Text::ChatThinking => ("Antwort wird geschrieben...", "Writing a reply..."),
        Text::ChatSources => ("Quellen", "Sources"),

        Text::TicketsTitle => ("Tickets", "Tickets"),
        Text::FilterState => ("Status", "State"),
        Text::FilterPriority => ("Priorität", "Priority"),
        Text::FilterProject => ("Projekt suchen", "Search project"),
        Text::ClearFilters => ("Filter zurücksetzen", "Clear filters"),
        Text::NoTickets => ("Keine passenden Tickets.", "No matching tickets."),
        Text::TicketColumn => ("Ticket", "Ticket"),
        Text::ProjectColumn => ("Projekt", "Project"),
        Text::StateColumn => ("Status", "State"),
        Text::PriorityColumn => ("Priorität", "Priority"),
        Text::AssigneeColumn => ("Zuständig", "Assignee"),
        Text::UpdatedColumn => ("Aktualisiert", "Updated"),
        Text::Unassigned => ("Nicht zugewiesen", "Unassigned"),
        Text::Comments => ("Kommentare", "Comments"),
        Text::NoComments => ("Noch keine Kommentare.", "No comments yet."),
        Text::CommentPlaceholder => ("Kommentar schreiben...", "Write a comment..."),
        Text::AddComment => ("Kommentieren", "Comment"),
        Text::UpdateFailed => ("Änderung fehlgeschlagen", "Update failed"),

        Text::PlanVersion => ("Version", "Version"),
        Text::PlanChangeRequest => ("Änderungswunsch", "Change request"),
        Text::PlanFeedbackPlaceholder => ("Was soll geändert werden?", "What should change?"),
        Text::PlanFeedbackRequired => ("Bitte Änderungswunsch beschreiben.", "Describe the requested changes."),
        Text::PlanActionFailed => ("Aktion fehlgeschlagen", "Action failed"),
        Text::BackToProject => ("Zurück zum Projekt", "Back to project"),

        Text::KnowledgeEmpty => ("Die Wissensbasis ist leer.", "The knowledge base is empty."),
        Text::KnowledgeItemTitle => ("Titel", "Title"),
        Text::KnowledgeContent => ("Inhalt", "Content"),
        Text::KnowledgeAdd => ("Hinzufügen", "Add"),
        Text::GenerateDocuments => ("Dokumente generieren", "Generate documents"),
        Text::Generating => ("Wird generiert...", "Generating..."),
        Text::GeneratedDocuments => ("Generierte Dokumente", "Generated documents"),

        Text::UploadTitle => ("Dokument hochladen", "Upload document"),
        Text::UploadFile => ("Datei", "File"),
        Text::UploadName => ("Name", "Name"),
        Text::UploadCategory => ("Kategorie", "Category"),
        Text::UploadSubmit => ("Hochladen", "Upload"),
        Text::UploadDone => ("Hochgeladen.", "Uploaded."),
        Text::UploadFailed => ("Upload fehlgeschlagen", "Upload failed"),
        Text::UploadMissingFile => ("Bitte eine Datei auswählen.", "Choose a file first."),

        Text::AdminTitle => ("Verwaltung", "Administration"),
        Text::Companies => ("Firmen", "Companies"),
        Text::NoCompanies => ("Keine Firmen.", "No companies."),
        Text::ContactEmail => ("Kontakt", "Contact"),
        Text::Invitations => ("Einladungen", "Invitations"),
        Text::NoInvitations => ("Keine Einladungen.", "No invitations."),
        Text::InviteEmail => ("E-Mail", "Email"),
        Text::InviteRole => ("Rolle", "Role"),
        Text::InviteCompany => ("Firma", "Company"),
        Text::InviteCreate => ("Einladen", "Invite"),
        Text::InviteRevoke => ("Widerrufen", "Revoke"),
        Text::InviteExpires => ("Gültig bis", "Expires"),
        Text::NoCompany => ("Keine Firma", "No company"),
        Text::InviteEmailRequired => ("Bitte eine gültige E-Mail-Adresse eingeben.", "Enter a valid email address."),
        Text::InviteCompanyRequired => ("Kunden brauchen eine Firma.", "Customers need a company."),

        Text::PreviousMonth => ("Vorheriger Monat", "Previous month"),
        Text::NextMonth => ("Nächster Monat", "Next month"),
    }
}

/// Translate a static UI string.
pub fn t(lang: Language, text: Text) -> &'static str {
    pick(lang, pair(text))
}

fn pick(lang: Language, (de, en): (&'static str, &'static str)) -> &'static str {
    match lang {
        Language::De => de,
        Language::En => en,
    }
}

pub fn role_label(lang: Language, role: Role) -> &'static str {
    pick(
        lang,
        match role {
            Role::Admin => ("Administration", "Admin"),
            Role::Customer => ("Kunde", "Customer"),
            Role::Developer => ("Entwicklung", "Developer"),
            Role::KeyAccountManager => ("Key Account Manager", "Key account manager"),
            Role::ProjectLeader => ("Projektleitung", "Project leader"),
        },
    )
}

pub fn project_status_label(lang: Language, status: ProjectStatus) -> &'static str {
    pick(
        lang,
        match status {
            ProjectStatus::Planning => ("In Planung", "Planning"),
            ProjectStatus::InProgress => ("In Arbeit", "In progress"),
            ProjectStatus::Review => ("In Abnahme", "In review"),
            ProjectStatus::Delivered => ("Geliefert", "Delivered"),
            ProjectStatus::OnHold => ("Pausiert", "On hold"),
            ProjectStatus::Cancelled => ("Abgebrochen", "Cancelled"),
            ProjectStatus::Unknown => ("Unbekannt", "Unknown"),
        },
    )
}

pub fn ticket_state_label(lang: Language, state: TicketState) -> &'static str {
    pick(
        lang,
        match state {
            TicketState::Open => ("Offen", "Open"),
            TicketState::InProgress => ("In Arbeit", "In progress"),
            TicketState::Review => ("In Prüfung", "In review"),
            TicketState::Resolved => ("Gelöst", "Resolved"),
            TicketState::Closed => ("Geschlossen", "Closed"),
            TicketState::Unknown => ("Unbekannt", "Unknown"),
        },
    )
}

pub fn priority_label(lang: Language, priority: TicketPriority) -> &'static str {
    pick(
        lang,
        match priority {
            TicketPriority::Low => ("Niedrig", "Low"),
            TicketPriority::Medium => ("Mittel", "Medium"),
            TicketPriority::High => ("Hoch", "High"),
            TicketPriority::Critical => ("Kritisch", "Critical"),
            TicketPriority::Unknown => ("Unbekannt", "Unknown"),
        },
    )
}

pub fn plan_status_label(lang: Language, status: PlanStatus) -> &'static str {
    pick(
        lang,
        match status {
            PlanStatus::Draft => ("Entwurf", "Draft"),
            PlanStatus::Sent => ("Versendet", "Sent"),
            PlanStatus::Viewed => ("Angesehen", "Viewed"),
            PlanStatus::Approved => ("Freigegeben", "Approved"),
            PlanStatus::ChangesRequested => ("Änderungen gewünscht", "Changes requested"),
            PlanStatus::Revised => ("Überarbeitet", "Revised"),
            PlanStatus::Archived => ("Archiviert", "Archived"),
            PlanStatus::Unknown => ("Unbekannt", "Unknown"),
        },
    )
}

pub fn plan_action_label(lang: Language, action: PlanAction) -> &'static str {
    pick(
        lang,
        match action {
            PlanAction::Send => ("An Kunden senden", "Send to customer"),
            PlanAction::MarkViewed => ("Als gesehen markieren", "Mark as viewed"),
            PlanAction::Approve => ("Freigeben", "Approve"),
            PlanAction::RequestChanges => ("Änderungen anfordern", "Request changes"),
            PlanAction::Revise => ("Überarbeitung einreichen", "Submit revision"),
            PlanAction::Archive => ("Archivieren", "Archive"),
        },
    )
}

pub fn invitation_status_label(lang: Language, status: InvitationStatus) -> &'static str {
    pick(
        lang,
        match status {
            InvitationStatus::Pending => ("Ausstehend", "Pending"),
            InvitationStatus::Accepted => ("Angenommen", "Accepted"),
            InvitationStatus::Expired => ("Abgelaufen", "Expired"),
            InvitationStatus::Revoked => ("Widerrufen", "Revoked"),
            InvitationStatus::Unknown => ("Unbekannt", "Unknown"),
        },
    )
}

pub fn tile_label(lang: Language, kind: TileKind) -> &'static str {
    pick(
        lang,
        match kind {
            TileKind::Companies => ("Firmen", "Companies"),
            TileKind::ActiveProjects => ("Aktive Projekte", "Active projects"),
            TileKind::OpenTickets => ("Offene Tickets", "Open tickets"),
            TileKind::PendingInvitations => ("Offene Einladungen", "Pending invitations"),
            TileKind::MyProjects => ("Meine Projekte", "My projects"),
            TileKind::UpcomingMeetings => ("Anstehende Termine", "Upcoming meetings"),
            TileKind::PlansAwaitingDecision => ("Pläne zur Freigabe", "Plans awaiting decision"),
            TileKind::AssignedTickets => ("Meine Tickets", "Assigned tickets"),
            TileKind::UrgentTickets => ("Dringend", "Urgent"),
            TileKind::InReview => ("In Prüfung", "In review"),
            TileKind::ManagedCompanies => ("Betreute Firmen", "Managed companies"),
            TileKind::LedProjects => ("Geleitete Projekte", "Led projects"),
            TileKind::OverdueMilestones => ("Überfällige Meilensteine", "Overdue milestones"),
        },
    )
}

/// Document kinds offered by the generator, with labels.
pub const DOCUMENT_KINDS: [&str; 3] = ["project_brief", "requirements", "meeting_summary"];

pub fn document_kind_label(lang: Language, kind: &str) -> String {
    let label = match kind {
        "project_brief" => pick(lang, ("Projektbriefing", "Project brief")),
        "requirements" => pick(lang, ("Anforderungen", "Requirements")),
        "meeting_summary" => pick(lang, ("Terminzusammenfassung", "Meeting summary")),
        other => return other.replace('_', " "),
    };
    label.to_owned()
}

/// Upload categories, with labels.
pub const UPLOAD_CATEGORIES: [&str; 4] = ["contract", "design", "briefing", "other"];

pub fn upload_category_label(lang: Language, category: &str) -> &'static str {
    match category {
        "contract" => pick(lang, ("Vertrag", "Contract")),
        "design" => pick(lang, ("Design", "Design")),
        "briefing" => pick(lang, ("Briefing", "Briefing")),
        _ => pick(lang, ("Sonstiges", "Other")),
    }
}

/// Two-letter weekday headers, Monday first.
pub fn weekday_headers(lang: Language) -> [&'static str; 7] {
    match lang {
        Language::De => ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
        Language::En => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    }
}

pub fn month_name(lang: Language, month: Month) -> &'static str {
    pick(
        lang,
        match month {
            Month::January => ("Januar", "January"),
            Month::February => ("Februar", "February"),
            Month::March => ("März", "March"),
            Month::April => ("April", "April"),
            Month::May => ("Mai", "May"),
            Month::June => ("Juni", "June"),
            Month::July => ("Juli", "July"),
            Month::August => ("August", "August"),
            Month::September => ("September", "September"),
            Month::October => ("Oktober", "October"),
            Month::November => ("November", "November"),
            Month::December => ("Dezember", "December"),
        },
    )
}

/// Calendar date in the language's usual notation.
pub fn format_date(lang: Language, date: time::Date) -> String {
    match lang {
        Language::De => workflow::dates::format_date_de(date),
        Language::En => workflow::dates::format_date(date),
    }
}

/// Format a `YYYY-MM-DD` or RFC 3339 string as a date; unparseable input is
/// shown unchanged.
pub fn format_date_str(lang: Language, raw: &str) -> String {
    workflow::dates::parse_date(raw).map_or_else(|| raw.to_owned(), |d| format_date(lang, d))
}

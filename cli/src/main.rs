//! `portal-cli`: command-line access to the agency portal backend.

mod api;
mod chat;
mod render;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wire::{
    Comment, GenerateDocumentsRequest, GenerateDocumentsResponse, Invitation, KnowledgeItem, LoginRequest,
    LoginResponse, Meeting, Milestone, NewComment, NewInvitation, NewKnowledgeItem, PlanActionRequest, ProductPlan,
    Project, Role, Ticket, TicketPatch, TicketPriority, TicketState, UploadFields, UploadedDocument, User, endpoints,
};
use workflow::calendar::upcoming;
use workflow::plans::PlanAction;
use workflow::tickets::{TicketFilter, sort_by_urgency};

use crate::api::ApiClient;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing token; pass --token or set PORTAL_TOKEN")]
    MissingToken,
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token rejected; sign in again with `portal-cli login`")]
    Unauthorized,
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("chat failed: {0}")]
    ChatFailed(String),
}

/// Language for user-facing chat messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    De,
    En,
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Agency portal API and assistant CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "PORTAL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "PORTAL_LANG", value_enum, default_value_t = Lang::De)]
    lang: Lang,

    /// Print raw JSON instead of text lines.
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, default_value_t = 10, help = "Connect timeout in seconds")]
    connect_timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers.
    Ping,
    /// Exchange email and password for a token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the signed-in user.
    Whoami,
    Project(ProjectCommand),
    Ticket(TicketCommand),
    Plan(PlanCommand),
    /// Upcoming meetings.
    Meetings {
        #[arg(long)]
        project: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Chat with a project's assistant. Without --message, reads stdin.
    Chat {
        project_id: String,
        #[arg(long, short)]
        message: Option<String>,
    },
    Knowledge(KnowledgeCommand),
    /// Generate documents from a project's knowledge base.
    GenerateDocs {
        project_id: String,
        #[arg(long = "kind", required = true)]
        kinds: Vec<String>,
    },
    /// Upload a document to a project or ticket.
    Upload {
        project_id: String,
        file: PathBuf,
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        ticket: Option<String>,
    },
    Invitation(InvitationCommand),
}

#[derive(Args, Debug)]
struct ProjectCommand {
    #[command(subcommand)]
    command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectSubcommand {
    List,
    Show { project_id: String },
    /// Milestone completion and what is due next.
    Progress { project_id: String },
}

#[derive(Args, Debug)]
struct TicketCommand {
    #[command(subcommand)]
    command: TicketSubcommand,
}

#[derive(Subcommand, Debug)]
enum TicketSubcommand {
    List {
        #[arg(long = "state", value_parser = parse_state)]
        states: Vec<TicketState>,
        #[arg(long = "priority", value_parser = parse_priority)]
        priorities: Vec<TicketPriority>,
        /// Substring of the project name.
        #[arg(long)]
        project: Option<String>,
        /// Most urgent first instead of server order.
        #[arg(long)]
        urgent_first: bool,
    },
    Show { ticket_id: String },
    Update {
        ticket_id: String,
        #[arg(long, value_parser = parse_state)]
        state: Option<TicketState>,
        #[arg(long, value_parser = parse_priority)]
        priority: Option<TicketPriority>,
        #[arg(long)]
        assignee: Option<String>,
    },
    Comment { ticket_id: String, body: String },
}

#[derive(Args, Debug)]
struct PlanCommand {
    #[command(subcommand)]
    command: PlanSubcommand,
}

#[derive(Subcommand, Debug)]
enum PlanSubcommand {
    List { project_id: String },
    Show { plan_id: String },
    /// Run a workflow action: send, mark_viewed, approve, request_changes,
    /// revise, archive.
    Action {
        plan_id: String,
        #[arg(value_parser = parse_plan_action)]
        action: PlanAction,
        #[arg(long)]
        feedback: Option<String>,
    },
}

#[derive(Args, Debug)]
struct KnowledgeCommand {
    #[command(subcommand)]
    command: KnowledgeSubcommand,
}

#[derive(Subcommand, Debug)]
enum KnowledgeSubcommand {
    List { project_id: String },
    Add {
        project_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    Delete { project_id: String, item_id: String },
}

#[derive(Args, Debug)]
struct InvitationCommand {
    #[command(subcommand)]
    command: InvitationSubcommand,
}

#[derive(Subcommand, Debug)]
enum InvitationSubcommand {
    List,
    Create {
        email: String,
        #[arg(long, value_parser = parse_role, default_value = "customer")]
        role: Role,
        #[arg(long)]
        company: Option<String>,
    },
    Revoke { invitation_id: String },
}

fn parse_state(raw: &str) -> Result<TicketState, String> {
    TicketState::parse(raw).ok_or_else(|| expected(raw, TicketState::ALL.map(TicketState::as_str)))
}

fn parse_priority(raw: &str) -> Result<TicketPriority, String> {
    TicketPriority::parse(raw).ok_or_else(|| expected(raw, TicketPriority::ALL.map(TicketPriority::as_str)))
}

fn parse_plan_action(raw: &str) -> Result<PlanAction, String> {
    PlanAction::parse(raw).ok_or_else(|| expected(raw, PlanAction::ALL.map(PlanAction::as_str)))
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| expected(raw, Role::ALL.map(Role::as_str)))
}

fn expected<const N: usize>(raw: &str, names: [&str; N]) -> String {
    format!("unknown value `{raw}`; expected one of: {}", names.join(", "))
}

/// Request body for a plan action. Asking for changes needs feedback.
fn plan_action_body(action: PlanAction, feedback: Option<String>) -> Result<PlanActionRequest, CliError> {
    let feedback = feedback.map(|f| f.trim().to_owned()).filter(|f| !f.is_empty());
    if action.requires_feedback() && feedback.is_none() {
        return Err(CliError::InvalidArgument("request_changes needs --feedback".to_owned()));
    }
    Ok(PlanActionRequest { feedback: feedback.filter(|_| action.requires_feedback()) })
}

/// Invitation body. Customers need a company; staff never carry one.
fn invitation_body(email: String, role: Role, company: Option<String>) -> Result<NewInvitation, CliError> {
    let company_id = company.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty());
    if role == Role::Customer && company_id.is_none() {
        return Err(CliError::InvalidArgument("customer invitations need --company".to_owned()));
    }
    let company_id = if role == Role::Customer { company_id } else { None };
    Ok(NewInvitation { email: email.trim().to_owned(), role, company_id })
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url, cli.token, Duration::from_secs(cli.connect_timeout))?;
    let json = cli.json;

    match cli.command {
        Command::Ping => {
            api.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Login { email, password } => {
            let body = LoginRequest { email, password };
            let resp: LoginResponse = api.post(endpoints::LOGIN, &body).await?;
            if json {
                return render::print_json(&resp);
            }
            eprintln!("signed in as {} ({})", resp.user.name, resp.user.role.as_str());
            println!("{}", resp.token);
            Ok(())
        }
        Command::Whoami => {
            api.require_token()?;
            let user: User = api.get(endpoints::ME).await?;
            if json {
                return render::print_json(&user);
            }
            println!("{} <{}> {}", user.name, user.email, user.role.as_str());
            Ok(())
        }
        Command::Project(cmd) => run_project(&api, cmd.command, json).await,
        Command::Ticket(cmd) => run_ticket(&api, cmd.command, json).await,
        Command::Plan(cmd) => run_plan(&api, cmd.command, json).await,
        Command::Meetings { project, limit } => {
            api.require_token()?;
            let path = project.as_deref().map_or_else(|| endpoints::MEETINGS.to_owned(), endpoints::project_meetings);
            let meetings: Vec<Meeting> = api.get(&path).await?;
            let soon = upcoming(&meetings, time::OffsetDateTime::now_utc(), limit);
            if json {
                return render::print_json(&soon);
            }
            soon.into_iter().for_each(|m| println!("{}", render::meeting_line(m)));
            Ok(())
        }
        Command::Chat { project_id, message } => {
            api.require_token()?;
            chat::run(&api, &project_id, message, cli.lang).await
        }
        Command::Knowledge(cmd) => run_knowledge(&api, cmd.command, json).await,
        Command::GenerateDocs { project_id, kinds } => {
            api.require_token()?;
            let body = GenerateDocumentsRequest { kinds };
            let resp: GenerateDocumentsResponse =
                api.post(&endpoints::rag_generate_documents(&project_id), &body).await?;
            if json {
                return render::print_json(&resp);
            }
            for doc in resp.documents {
                println!("# {} ({})\n\n{}\n", doc.title, doc.kind, doc.content.trim_end());
            }
            Ok(())
        }
        Command::Upload { project_id, file, category, name, ticket } => {
            api.require_token()?;
            let name = name
                .or_else(|| file.file_name().and_then(|n| n.to_str()).map(str::to_owned))
                .ok_or_else(|| CliError::InvalidArgument("cannot derive a document name; pass --name".to_owned()))?;
            let fields = UploadFields { project_id, category, name, ticket_id: ticket };
            let doc: UploadedDocument = api.upload(&file, &fields).await?;
            if json {
                return render::print_json(&doc);
            }
            println!("{}\t{}\t{}", doc.id, doc.category, doc.name);
            Ok(())
        }
        Command::Invitation(cmd) => run_invitation(&api, cmd.command, json).await,
    }
}

async fn run_project(api: &ApiClient, command: ProjectSubcommand, json: bool) -> Result<(), CliError> {
    api.require_token()?;
    match command {
        ProjectSubcommand::List => {
            let projects: Vec<Project> = api.get(endpoints::PROJECTS).await?;
            if json {
                return render::print_json(&projects);
            }
            projects.iter().for_each(|p| println!("{}", render::project_line(p)));
        }
        ProjectSubcommand::Show { project_id } => {
            let project: Project = api.get(&endpoints::project(&project_id)).await?;
            if json {
                return render::print_json(&project);
            }
            println!("{}", render::project_details(&project));
        }
        ProjectSubcommand::Progress { project_id } => {
            let milestones: Vec<Milestone> = api.get(&endpoints::project_milestones(&project_id)).await?;
            if json {
                return render::print_json(&milestones);
            }
            println!("{}", render::progress_summary(&milestones, time::OffsetDateTime::now_utc().date()));
            milestones.iter().for_each(|m| println!("{}", render::milestone_line(m)));
        }
    }
    Ok(())
}

async fn run_ticket(api: &ApiClient, command: TicketSubcommand, json: bool) -> Result<(), CliError> {
    api.require_token()?;
    match command {
        TicketSubcommand::List { states, priorities, project, urgent_first } => {
            let tickets: Vec<Ticket> = api.get(endpoints::TICKETS).await?;
            let projects: Vec<Project> = api.get(endpoints::PROJECTS).await?;
            let filter = TicketFilter {
                states: states.into_iter().collect(),
                priorities: priorities.into_iter().collect(),
                project_query: project.unwrap_or_default(),
            };
            let mut shown = filter.apply(&tickets, &projects);
            if urgent_first {
                sort_by_urgency(&mut shown);
            }
            if json {
                return render::print_json(&shown);
            }
            for ticket in shown {
                let name = projects.iter().find(|p| p.id == ticket.project_id).map(|p| p.name.as_str());
                println!("{}", render::ticket_line(ticket, name));
            }
        }
        TicketSubcommand::Show { ticket_id } => {
            let ticket: Ticket = api.get(&endpoints::ticket(&ticket_id)).await?;
            let comments: Vec<Comment> = api.get(&endpoints::ticket_comments(&ticket_id)).await?;
            if json {
                return render::print_json(&serde_json::json!({ "ticket": ticket, "comments": comments }));
            }
            println!("{}", render::ticket_line(&ticket, None));
            if let Some(description) = ticket.description.as_deref().filter(|d| !d.trim().is_empty()) {
                println!("\n{}\n", description.trim());
            }
            comments.iter().for_each(|c| println!("{}", render::comment_line(c)));
        }
        TicketSubcommand::Update { ticket_id, state, priority, assignee } => {
            let patch = TicketPatch { state, priority, assignee_id: assignee };
            if patch == TicketPatch::default() {
                return Err(CliError::InvalidArgument("nothing to update; pass --state, --priority or --assignee".to_owned()));
            }
            let ticket: Ticket = api.patch(&endpoints::ticket(&ticket_id), &patch).await?;
            if json {
                return render::print_json(&ticket);
            }
            println!("{}", render::ticket_line(&ticket, None));
        }
        TicketSubcommand::Comment { ticket_id, body } => {
            if body.trim().is_empty() {
                return Err(CliError::InvalidArgument("comment is empty".to_owned()));
            }
            let comment: Comment =
                api.post(&endpoints::ticket_comments(&ticket_id), &NewComment { body: body.trim().to_owned() }).await?;
            if json {
                return render::print_json(&comment);
            }
            println!("{}", render::comment_line(&comment));
        }
    }
    Ok(())
}

async fn run_plan(api: &ApiClient, command: PlanSubcommand, json: bool) -> Result<(), CliError> {
    api.require_token()?;
    match command {
        PlanSubcommand::List { project_id } => {
            let plans: Vec<ProductPlan> = api.get(&endpoints::project_plans(&project_id)).await?;
            if json {
                return render::print_json(&plans);
            }
            plans.iter().for_each(|p| println!("{}", render::plan_line(p)));
        }
        PlanSubcommand::Show { plan_id } => {
            let plan: ProductPlan = api.get(&endpoints::product_plan(&plan_id)).await?;
            if json {
                return render::print_json(&plan);
            }
            println!("{}\n", render::plan_line(&plan));
            if let Some(request) = &plan.change_request {
                println!("change request: {request}\n");
            }
            println!("{}", plan.content.trim_end());
        }
        PlanSubcommand::Action { plan_id, action, feedback } => {
            let body = plan_action_body(action, feedback)?;
            let plan: ProductPlan = api.post(&endpoints::product_plan_action(&plan_id, action.as_str()), &body).await?;
            if json {
                return render::print_json(&plan);
            }
            println!("{}", render::plan_line(&plan));
        }
    }
    Ok(())
}

async fn run_knowledge(api: &ApiClient, command: KnowledgeSubcommand, json: bool) -> Result<(), CliError> {
    api.require_token()?;
    match command {
        KnowledgeSubcommand::List { project_id } => {
            let items: Vec<KnowledgeItem> = api.get(&endpoints::rag_knowledge(&project_id)).await?;
            if json {
                return render::print_json(&items);
            }
            items.iter().for_each(|i| println!("{}", render::knowledge_line(i)));
        }
        KnowledgeSubcommand::Add { project_id, title, content } => {
            let body = NewKnowledgeItem { title, content };
            let item: KnowledgeItem = api.post(&endpoints::rag_knowledge(&project_id), &body).await?;
            if json {
                return render::print_json(&item);
            }
            println!("{}", render::knowledge_line(&item));
        }
        KnowledgeSubcommand::Delete { project_id, item_id } => {
            api.delete(&endpoints::rag_knowledge_item(&project_id, &item_id)).await?;
            println!("deleted {item_id}");
        }
    }
    Ok(())
}

async fn run_invitation(api: &ApiClient, command: InvitationSubcommand, json: bool) -> Result<(), CliError> {
    api.require_token()?;
    match command {
        InvitationSubcommand::List => {
            let invitations: Vec<Invitation> = api.get(endpoints::INVITATIONS).await?;
            if json {
                return render::print_json(&invitations);
            }
            invitations.iter().for_each(|i| println!("{}", render::invitation_line(i)));
        }
        InvitationSubcommand::Create { email, role, company } => {
            let body = invitation_body(email, role, company)?;
            let invitation: Invitation = api.post(endpoints::INVITATIONS, &body).await?;
            if json {
                return render::print_json(&invitation);
            }
            println!("{}", render::invitation_line(&invitation));
        }
        InvitationSubcommand::Revoke { invitation_id } => {
            api.post_empty(&endpoints::invitation_revoke(&invitation_id)).await?;
            println!("revoked {invitation_id}");
        }
    }
    Ok(())
}

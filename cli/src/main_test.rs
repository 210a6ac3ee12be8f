use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn value_parsers_accept_wire_names() {
    assert_eq!(parse_state("in_progress"), Ok(TicketState::InProgress));
    assert_eq!(parse_priority("critical"), Ok(TicketPriority::Critical));
    assert_eq!(parse_plan_action("request_changes"), Ok(PlanAction::RequestChanges));
    assert_eq!(parse_role("project_leader"), Ok(Role::ProjectLeader));
}

#[test]
fn value_parsers_list_choices_on_error() {
    let err = parse_state("done").expect_err("unknown state");
    assert!(err.contains("`done`"));
    assert!(err.contains("open, in_progress, review, resolved, closed"));
}

#[test]
fn ticket_list_collects_repeated_filters() {
    let cli = Cli::try_parse_from([
        "portal-cli", "--token", "t", "ticket", "list", "--state", "open", "--state", "review", "--priority", "high",
    ])
    .expect("parse");
    let Command::Ticket(TicketCommand { command: TicketSubcommand::List { states, priorities, .. } }) = cli.command
    else {
        panic!("expected ticket list");
    };
    assert_eq!(states, vec![TicketState::Open, TicketState::Review]);
    assert_eq!(priorities, vec![TicketPriority::High]);
}

// =============================================================
// request bodies
// =============================================================

#[test]
fn plan_action_body_requires_feedback_for_changes() {
    assert!(matches!(
        plan_action_body(PlanAction::RequestChanges, Some("  ".to_owned())),
        Err(CliError::InvalidArgument(_))
    ));
    let body = plan_action_body(PlanAction::RequestChanges, Some(" more colour ".to_owned())).expect("body");
    assert_eq!(body.feedback.as_deref(), Some("more colour"));
}

#[test]
fn plan_action_body_drops_feedback_elsewhere() {
    let body = plan_action_body(PlanAction::Approve, Some("looks good".to_owned())).expect("body");
    assert_eq!(body.feedback, None);
}

#[test]
fn invitation_body_enforces_company_rules() {
    assert!(matches!(
        invitation_body("k@firma.de".to_owned(), Role::Customer, None),
        Err(CliError::InvalidArgument(_))
    ));
    let staff = invitation_body(" dev@agency.de ".to_owned(), Role::Developer, Some("c1".to_owned())).expect("body");
    assert_eq!(staff.email, "dev@agency.de");
    assert_eq!(staff.company_id, None);
}

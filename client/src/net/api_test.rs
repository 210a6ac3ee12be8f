use super::*;

// =============================================================
// classify_status
// =============================================================

#[test]
fn success_statuses_are_not_errors() {
    assert_eq!(classify_status(200), None);
    assert_eq!(classify_status(204), None);
}

#[test]
fn unauthorized_is_distinguished() {
    assert_eq!(classify_status(401), Some(ApiError::Unauthorized));
    assert_eq!(classify_status(403), Some(ApiError::Status(403)));
    assert_eq!(classify_status(502), Some(ApiError::Status(502)));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "server responded with status 404");
    assert_eq!(ApiError::Unauthorized.to_string(), "not signed in");
}

// =============================================================
// plan_action_request
// =============================================================

#[test]
fn change_request_carries_trimmed_feedback() {
    let body = plan_action_request(PlanAction::RequestChanges, "  bigger logo ");
    assert_eq!(body.feedback.as_deref(), Some("bigger logo"));
}

#[test]
fn other_actions_drop_feedback() {
    assert_eq!(plan_action_request(PlanAction::Approve, "looks good").feedback, None);
    assert_eq!(plan_action_request(PlanAction::RequestChanges, "   ").feedback, None);
}

// =============================================================
// DashboardNeeds
// =============================================================

#[test]
fn customer_dashboard_needs_plans_not_companies() {
    let needs = DashboardNeeds::for_role(Role::Customer);
    assert!(needs.plans && needs.meetings && needs.projects);
    assert!(!needs.companies && !needs.invitations);
}

#[test]
fn project_leader_needs_led_milestones() {
    let needs = DashboardNeeds::for_role(Role::ProjectLeader);
    assert!(needs.led_milestones);
    assert!(!needs.plans);
}

#[test]
fn only_admin_needs_invitations() {
    for role in Role::ALL {
        assert_eq!(DashboardNeeds::for_role(role).invitations, role == Role::Admin);
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let result = futures::executor::block_on(fetch_projects());
    assert_eq!(result, Err(ApiError::Unavailable));
}

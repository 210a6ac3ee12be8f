use super::*;

// =============================================================
// Enums
// =============================================================

#[test]
fn role_wire_names_match_serde() {
    for role in Role::ALL {
        let json = serde_json::to_value(role).expect("serialize");
        assert_eq!(json, serde_json::Value::String(role.as_str().to_owned()));
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!(Role::parse("superuser"), None);
}

#[test]
fn only_customer_is_not_staff() {
    assert!(!Role::Customer.is_staff());
    assert!(Role::Admin.is_staff());
    assert!(Role::KeyAccountManager.is_staff());
}

#[test]
fn unknown_ticket_state_decodes_to_catch_all() {
    let state: TicketState = serde_json::from_str("\"blocked\"").expect("decode");
    assert_eq!(state, TicketState::Unknown);
    assert!(!state.is_active());
}

#[test]
fn ticket_state_parse_covers_known_states() {
    assert_eq!(TicketState::parse("in_progress"), Some(TicketState::InProgress));
    assert_eq!(TicketState::parse("unknown"), None);
}

#[test]
fn priority_urgency() {
    assert!(TicketPriority::Critical.is_urgent());
    assert!(TicketPriority::High.is_urgent());
    assert!(!TicketPriority::Medium.is_urgent());
}

#[test]
fn plan_status_uses_snake_case() {
    let status: PlanStatus = serde_json::from_str("\"changes_requested\"").expect("decode");
    assert_eq!(status, PlanStatus::ChangesRequested);
}

// =============================================================
// Records
// =============================================================

#[test]
fn project_decodes_with_optional_fields_missing() {
    let json = serde_json::json!({
        "id": "p1",
        "name": "Website relaunch",
        "company_id": "c1",
        "status": "in_progress"
    });
    let project: Project = serde_json::from_value(json).expect("decode");
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert!(project.review.is_none());
    assert!(project.due_date.is_none());
}

#[test]
fn ticket_list_survives_unknown_priority() {
    let json = serde_json::json!([
        {
            "id": "t1", "title": "Broken nav", "project_id": "p1",
            "state": "open", "priority": "urgent-ish",
            "created_at": "2026-01-01T00:00:00Z", "updated_at": "2026-01-01T00:00:00Z"
        }
    ]);
    let tickets: Vec<Ticket> = serde_json::from_value(json).expect("decode");
    assert_eq!(tickets[0].priority, TicketPriority::Unknown);
}

#[test]
fn ticket_patch_skips_absent_fields() {
    let patch = TicketPatch { state: Some(TicketState::Resolved), ..TicketPatch::default() };
    let json = serde_json::to_value(&patch).expect("serialize");
    assert_eq!(json, serde_json::json!({ "state": "resolved" }));
}

#[test]
fn chat_request_serializes_history() {
    let req = ChatRequest {
        message: "Where is the brief?".to_owned(),
        conversation_history: vec![HistoryEntry { role: "user".to_owned(), content: "Hi".to_owned() }],
    };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Where is the brief?",
            "conversation_history": [{ "role": "user", "content": "Hi" }]
        })
    );
}

#[test]
fn new_invitation_omits_missing_company() {
    let invite = NewInvitation { email: "a@b.test".to_owned(), role: Role::Developer, company_id: None };
    let json = serde_json::to_value(&invite).expect("serialize");
    assert_eq!(json, serde_json::json!({ "email": "a@b.test", "role": "developer" }));
}

#[test]
fn plan_action_omits_missing_feedback() {
    let json = serde_json::to_value(PlanActionRequest::default()).expect("serialize");
    assert_eq!(json, serde_json::json!({}));
    let json = serde_json::to_value(PlanActionRequest { feedback: Some("More colour".to_owned()) }).expect("serialize");
    assert_eq!(json, serde_json::json!({ "feedback": "More colour" }));
}

// =============================================================
// Upload fields
// =============================================================

#[test]
fn upload_parts_omit_missing_ticket() {
    let fields = UploadFields {
        project_id: "p1".to_owned(),
        category: "design".to_owned(),
        name: "Moodboard".to_owned(),
        ticket_id: None,
    };
    assert_eq!(fields.parts(), vec![("project_id", "p1"), ("category", "design"), ("name", "Moodboard")]);
}

#[test]
fn upload_parts_include_ticket_when_present() {
    let fields = UploadFields {
        project_id: "p1".to_owned(),
        category: "bug".to_owned(),
        name: "Screenshot".to_owned(),
        ticket_id: Some("t9".to_owned()),
    };
    assert_eq!(fields.parts().last(), Some(&("ticket_id", "t9")));
}

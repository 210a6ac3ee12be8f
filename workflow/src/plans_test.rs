use super::*;

#[test]
fn action_names_round_trip() {
    for action in PlanAction::ALL {
        assert_eq!(PlanAction::parse(action.as_str()), Some(action));
    }
    assert_eq!(PlanAction::parse("delete"), None);
}

#[test]
fn customer_decides_on_sent_and_viewed_plans() {
    for status in [PlanStatus::Sent, PlanStatus::Viewed] {
        assert_eq!(
            available_actions(status, Role::Customer),
            vec![PlanAction::Approve, PlanAction::RequestChanges]
        );
    }
}

#[test]
fn customer_sees_nothing_on_drafts_or_closed_plans() {
    for status in [PlanStatus::Draft, PlanStatus::Approved, PlanStatus::Archived, PlanStatus::Revised] {
        assert!(available_actions(status, Role::Customer).is_empty());
    }
}

#[test]
fn staff_sends_drafts_and_revisions() {
    assert_eq!(
        available_actions(PlanStatus::Draft, Role::ProjectLeader),
        vec![PlanAction::Send, PlanAction::Archive]
    );
    assert_eq!(
        available_actions(PlanStatus::Revised, Role::Admin),
        vec![PlanAction::Send, PlanAction::Archive]
    );
}

#[test]
fn staff_revises_after_change_request() {
    assert_eq!(
        available_actions(PlanStatus::ChangesRequested, Role::KeyAccountManager),
        vec![PlanAction::Revise, PlanAction::Archive]
    );
}

#[test]
fn archived_plans_offer_nothing() {
    for role in Role::ALL {
        assert!(available_actions(PlanStatus::Archived, role).is_empty());
    }
}

#[test]
fn developers_are_read_only() {
    assert!(available_actions(PlanStatus::Draft, Role::Developer).is_empty());
}

#[test]
fn only_request_changes_needs_feedback() {
    let needing: Vec<_> = PlanAction::ALL.into_iter().filter(|a| a.requires_feedback()).collect();
    assert_eq!(needing, vec![PlanAction::RequestChanges]);
}

#[test]
fn viewed_marking_is_customer_on_sent_only() {
    assert!(should_mark_viewed(PlanStatus::Sent, Role::Customer));
    assert!(!should_mark_viewed(PlanStatus::Viewed, Role::Customer));
    assert!(!should_mark_viewed(PlanStatus::Sent, Role::Admin));
}

#[test]
fn tones_group_statuses() {
    assert_eq!(tone(PlanStatus::Approved), Tone::Success);
    assert_eq!(tone(PlanStatus::ChangesRequested), Tone::Warning);
    assert_eq!(tone(PlanStatus::Archived).css(), "muted");
}

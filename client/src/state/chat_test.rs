use super::*;
use wire::StreamEvent;
use workflow::chat::Outcome;

#[test]
fn switch_project_resets_conversation() {
    let mut state = ChatState::default();
    assert!(state.switch_project(Some("p1".to_owned())));
    let turn = state.session.begin("Hallo").expect("turn");
    state.session.apply(&turn.assistant_id, &StreamEvent::Content("Hi".to_owned()));
    state.session.settle(&turn.assistant_id, &Outcome::Completed, "err");
    assert_eq!(state.messages().len(), 2);

    assert!(!state.switch_project(Some("p1".to_owned())));
    assert_eq!(state.messages().len(), 2);

    assert!(state.switch_project(Some("p2".to_owned())));
    assert!(state.messages().is_empty());
}

#[test]
fn failure_text_is_localized() {
    assert!(failure_text(Language::En).starts_with("Sorry"));
    assert!(failure_text(Language::De).starts_with("Entschuldigung"));
}

#[test]
fn failed_turn_shows_failure_text() {
    let mut state = ChatState::default();
    let turn = state.session.begin("Status?").expect("turn");
    state.session.settle(&turn.assistant_id, &Outcome::Failed("503".to_owned()), failure_text(Language::En));
    let reply = &state.messages()[1];
    assert!(reply.failed);
    assert_eq!(reply.content, failure_text(Language::En));
    assert!(!state.is_streaming());
}

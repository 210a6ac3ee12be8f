use super::*;

#[test]
fn generation_request_dedupes_and_drops_blank_kinds() {
    let kinds = vec![
        "requirements".to_owned(),
        " ".to_owned(),
        "project_brief".to_owned(),
        " requirements ".to_owned(),
    ];
    assert_eq!(generation_request(&kinds).kinds, vec!["requirements", "project_brief"]);
}

#[test]
fn generation_request_keeps_empty_selection_empty() {
    assert!(generation_request(&[]).kinds.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn chat_fails_cleanly_outside_browser() {
    let (_handle, stop) = workflow::chat::stop_pair();
    let request = ChatRequest { message: "Hi".to_owned(), conversation_history: Vec::new() };
    let mut events = Vec::new();
    let outcome = futures::executor::block_on(stream_chat("p1", &request, stop, |e| events.push(e)));
    assert_eq!(outcome, Outcome::Failed("not available on server".to_owned()));
    assert!(events.is_empty());
}

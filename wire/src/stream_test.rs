use super::*;

fn content(text: &str) -> StreamEvent {
    StreamEvent::Content(text.to_owned())
}

// =============================================================
// decode_line
// =============================================================

#[test]
fn content_line_decodes() {
    assert_eq!(decode_line(r#"data: {"content": "Hallo"}"#), vec![content("Hallo")]);
}

#[test]
fn prefix_without_space_is_accepted() {
    assert_eq!(decode_line(r#"data:{"content":"x"}"#), vec![content("x")]);
}

#[test]
fn done_marker_decodes() {
    assert_eq!(decode_line(r#"data: {"done": true}"#), vec![StreamEvent::Done]);
    assert_eq!(decode_line("data: [DONE]"), vec![StreamEvent::Done]);
}

#[test]
fn error_envelope_decodes() {
    assert_eq!(
        decode_line(r#"data: {"error": "index unavailable"}"#),
        vec![StreamEvent::Error("index unavailable".to_owned())]
    );
}

#[test]
fn combined_envelope_orders_content_before_done() {
    assert_eq!(
        decode_line(r#"data: {"done": true, "content": "end"}"#),
        vec![content("end"), StreamEvent::Done]
    );
}

#[test]
fn sources_decode_with_optional_fields() {
    let events = decode_line(r#"data: {"sources": [{"title": "Brief.pdf", "score": 0.9}]}"#);
    assert_eq!(
        events,
        vec![StreamEvent::Sources(vec![SourceRef {
            title: "Brief.pdf".to_owned(),
            url: None,
            score: Some(0.9),
        }])]
    );
}

#[test]
fn empty_content_is_not_emitted() {
    assert!(decode_line(r#"data: {"content": ""}"#).is_empty());
}

#[test]
fn non_data_lines_are_ignored() {
    assert!(decode_line("").is_empty());
    assert!(decode_line("event: message").is_empty());
    assert!(decode_line(": keep-alive").is_empty());
    assert!(decode_line("data: ").is_empty());
}

#[test]
fn invalid_json_is_malformed() {
    assert_eq!(decode_line("data: {not json"), vec![StreamEvent::Malformed("{not json".to_owned())]);
}

#[test]
fn non_object_payload_is_malformed() {
    assert_eq!(decode_line("data: 42"), vec![StreamEvent::Malformed("42".to_owned())]);
    assert!(matches!(parse_payload("42"), Err(WireError::NotAnObject)));
}

#[test]
fn mistyped_field_is_malformed() {
    assert!(matches!(decode_line(r#"data: {"content": 5}"#).as_slice(), [StreamEvent::Malformed(_)]));
}

#[test]
fn carriage_return_is_stripped() {
    assert_eq!(decode_line("data: {\"content\": \"a\"}\r"), vec![content("a")]);
}

// =============================================================
// StreamDecoder
// =============================================================

#[test]
fn decoder_emits_each_complete_line() {
    let mut decoder = StreamDecoder::new();
    let events = decoder.push(b"data: {\"content\": \"a\"}\ndata: {\"content\": \"b\"}\n");
    assert_eq!(events, vec![content("a"), content("b")]);
    assert_eq!(decoder.finish(), Vec::new());
}

#[test]
fn decoder_reassembles_line_split_across_chunks() {
    let mut decoder = StreamDecoder::new();
    assert!(decoder.push(b"data: {\"cont").is_empty());
    assert_eq!(decoder.push(b"ent\": \"joined\"}\n"), vec![content("joined")]);
}

#[test]
fn decoder_reassembles_split_utf8_sequence() {
    let line = "data: {\"content\": \"Grüße\"}\n".as_bytes();
    let split = line.iter().position(|b| *b == 0xC3).expect("umlaut lead byte") + 1;
    let mut decoder = StreamDecoder::new();
    assert!(decoder.push(&line[..split]).is_empty());
    assert_eq!(decoder.push(&line[split..]), vec![content("Grüße")]);
}

#[test]
fn decoder_finish_flushes_unterminated_line() {
    let mut decoder = StreamDecoder::new();
    assert!(decoder.push(b"data: {\"done\": true}").is_empty());
    assert_eq!(decoder.finish(), vec![StreamEvent::Done]);
    assert!(decoder.finish().is_empty());
}

#[test]
fn decoder_keeps_going_after_malformed_line() {
    let mut decoder = StreamDecoder::new();
    let events = decoder.push(b"data: oops\ndata: {\"content\": \"ok\"}\n");
    assert_eq!(events, vec![StreamEvent::Malformed("oops".to_owned()), content("ok")]);
}

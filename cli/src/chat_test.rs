use super::*;

#[test]
fn failure_text_is_localized() {
    assert_ne!(failure_text(Lang::De), failure_text(Lang::En));
    assert!(failure_text(Lang::En).starts_with("Sorry"));
}

#[test]
fn format_sources_numbers_from_one() {
    let sources = vec![
        SourceRef { title: "Briefing".to_owned(), url: None, score: Some(0.9) },
        SourceRef { title: "Styleguide".to_owned(), url: Some("https://docs.example/style".to_owned()), score: None },
    ];
    assert_eq!(
        format_sources(&sources),
        vec!["  [1] Briefing".to_owned(), "  [2] Styleguide <https://docs.example/style>".to_owned()]
    );
}

#[test]
fn format_sources_empty() {
    assert!(format_sources(&[]).is_empty());
}

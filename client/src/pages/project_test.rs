use super::*;
use serde_json::json;

#[test]
fn answer_rows_lists_object_entries_by_key() {
    let rows = answer_rows(&json!({ "budget": 5000, "goal": "Relaunch" }));
    assert_eq!(
        rows,
        vec![("budget".to_owned(), "5000".to_owned()), ("goal".to_owned(), "Relaunch".to_owned())]
    );
}

#[test]
fn answer_rows_joins_arrays_and_blanks_null() {
    let rows = answer_rows(&json!({ "channels": ["web", "print"], "deadline": null }));
    assert_eq!(rows[0], ("channels".to_owned(), "web, print".to_owned()));
    assert_eq!(rows[1], ("deadline".to_owned(), String::new()));
}

#[test]
fn answer_rows_handles_non_objects() {
    assert!(answer_rows(&serde_json::Value::Null).is_empty());
    assert_eq!(answer_rows(&json!("free text")), vec![(String::new(), "free text".to_owned())]);
}

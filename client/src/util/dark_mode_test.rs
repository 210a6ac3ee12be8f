#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn stored_values_parse_strictly() {
    assert_eq!(parse_stored("true"), Some(true));
    assert_eq!(parse_stored("false"), Some(false));
    assert_eq!(parse_stored("yes"), None);
}

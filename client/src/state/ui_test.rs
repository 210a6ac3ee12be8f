use super::*;
use crate::util::i18n::Text;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_german_unselected() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.language, Language::De);
    assert_eq!(state.selected_project, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_matches_default() {
    assert_eq!(UiState::restore(), UiState::default());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn select_project_sets_and_clears() {
    let mut state = UiState::default();
    state.select_project(Some("p1".to_owned()));
    assert_eq!(state.selected_project.as_deref(), Some("p1"));
    state.select_project(Some(String::new()));
    assert_eq!(state.selected_project, None);
    state.select_project(Some("p2".to_owned()));
    state.select_project(None);
    assert_eq!(state.selected_project, None);
}

#[test]
fn toggle_language_switches_strings() {
    let mut state = UiState::default();
    assert_eq!(state.t(Text::Logout), "Abmelden");
    state.toggle_language();
    assert_eq!(state.language, Language::En);
    assert_eq!(state.t(Text::Logout), "Log out");
}

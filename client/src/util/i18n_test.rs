use super::*;

// =============================================================
// Language
// =============================================================

#[test]
fn default_language_is_german() {
    assert_eq!(Language::default(), Language::De);
}

#[test]
fn parse_accepts_region_tags_and_case() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("EN-us"), Some(Language::En));
    assert_eq!(Language::parse("de_DE"), Some(Language::De));
    assert_eq!(Language::parse("fr"), None);
    assert_eq!(Language::parse(""), None);
}

#[test]
fn toggled_switches_between_the_two() {
    assert_eq!(Language::De.toggled(), Language::En);
    assert_eq!(Language::En.toggled(), Language::De);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_falls_back_to_default_outside_browser() {
    assert_eq!(Language::load(), Language::De);
}

// =============================================================
// Strings
// =============================================================

#[test]
fn chat_error_is_localized() {
    assert_ne!(t(Language::De, Text::ChatError), t(Language::En, Text::ChatError));
    assert!(t(Language::En, Text::ChatError).starts_with("Sorry"));
}

#[test]
fn status_labels_cover_unknown() {
    assert_eq!(ticket_state_label(Language::En, TicketState::Unknown), "Unknown");
    assert_eq!(plan_status_label(Language::De, PlanStatus::ChangesRequested), "Änderungen gewünscht");
    assert_eq!(role_label(Language::En, Role::ProjectLeader), "Project leader");
}

#[test]
fn unknown_document_kind_is_humanized() {
    assert_eq!(document_kind_label(Language::En, "requirements"), "Requirements");
    assert_eq!(document_kind_label(Language::En, "risk_register"), "risk register");
}

#[test]
fn dates_follow_language_notation() {
    assert_eq!(format_date_str(Language::De, "2026-06-02"), "02.06.2026");
    assert_eq!(format_date_str(Language::En, "2026-06-02T10:00:00Z"), "2026-06-02");
    assert_eq!(format_date_str(Language::En, "soon"), "soon");
}

use super::*;

fn project(status: ProjectStatus, review: Option<ProjectReview>) -> Project {
    Project {
        id: "p1".to_owned(),
        name: "Shop".to_owned(),
        description: None,
        company_id: "c1".to_owned(),
        status,
        project_leader_id: None,
        start_date: None,
        due_date: None,
        delivered_at: Some("2026-04-01T10:00:00Z".to_owned()),
        review,
    }
}

fn stored_review() -> ProjectReview {
    ProjectReview { rating: 4, text: "Great work".to_owned(), submitted_at: "2026-04-02T09:00:00Z".to_owned() }
}

// =============================================================
// prompt_for
// =============================================================

#[test]
fn undelivered_project_hides_prompt() {
    assert_eq!(prompt_for(&project(ProjectStatus::InProgress, None)), ReviewPrompt::Hidden);
}

#[test]
fn delivered_without_review_celebrates() {
    assert_eq!(prompt_for(&project(ProjectStatus::Delivered, None)), ReviewPrompt::Celebrate);
}

#[test]
fn delivered_with_review_shows_stored_review() {
    let prompt = prompt_for(&project(ProjectStatus::Delivered, Some(stored_review())));
    assert_eq!(prompt, ReviewPrompt::Submitted(stored_review()));
}

// =============================================================
// ReviewDraft
// =============================================================

#[test]
fn draft_requires_rating() {
    let draft = ReviewDraft { rating: 0, text: "ok".to_owned() };
    assert_eq!(draft.validate(), Err(ReviewError::RatingOutOfRange));
    let draft = ReviewDraft { rating: 6, text: "ok".to_owned() };
    assert_eq!(draft.validate(), Err(ReviewError::RatingOutOfRange));
}

#[test]
fn draft_requires_text() {
    let draft = ReviewDraft { rating: 5, text: "   ".to_owned() };
    assert_eq!(draft.validate(), Err(ReviewError::EmptyText));
}

#[test]
fn valid_draft_trims_text() {
    let draft = ReviewDraft { rating: 5, text: "  Toll!  ".to_owned() };
    assert_eq!(draft.validate(), Ok(ReviewSubmission { rating: 5, text: "Toll!".to_owned() }));
}

#[test]
fn stars_render_five_wide() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

//! Delivery review prompt.
//!
//! A delivered project without a review shows a celebration banner and the
//! review form; once a review exists the form is replaced by a read-only
//! display of the stored rating and text.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use wire::{Project, ProjectReview, ProjectStatus, ReviewSubmission};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// What the project page shows in the review slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewPrompt {
    /// Not delivered yet.
    Hidden,
    /// Delivered, no review: banner plus form.
    Celebrate,
    /// Delivered and reviewed: read-only display.
    Submitted(ProjectReview),
}

#[must_use]
pub fn prompt_for(project: &Project) -> ReviewPrompt {
    if project.status != ProjectStatus::Delivered {
        return ReviewPrompt::Hidden;
    }
    match &project.review {
        Some(review) => ReviewPrompt::Submitted(review.clone()),
        None => ReviewPrompt::Celebrate,
    }
}

/// Reason a review draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("review text is empty")]
    EmptyText,
}

/// In-progress review form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// 0 means "no star picked yet".
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    /// Check the draft and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError`] when the rating is unset/out of range or the
    /// text is blank.
    pub fn validate(&self) -> Result<ReviewSubmission, ReviewError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ReviewError::RatingOutOfRange);
        }
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ReviewError::EmptyText);
        }
        Ok(ReviewSubmission { rating: self.rating, text: text.to_owned() })
    }
}

/// Star glyphs for a rating, filled then empty, always five wide.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

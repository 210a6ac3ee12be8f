//! Local UI chrome state (language, theme, selected project).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of domain data so fetched collections
//! can be refreshed without touching them. Everything here is persisted to
//! local storage and restored on startup.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::i18n::Language;
use crate::util::storage::{self, SELECTED_PROJECT_KEY};
use crate::util::{dark_mode, i18n};

/// UI preferences shared by every page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub language: Language,
    /// Project chosen in the selector. May be stale; resolve it against the
    /// fetched list before use.
    pub selected_project: Option<String>,
}

impl UiState {
    /// Preferences as last stored in this browser.
    pub fn restore() -> Self {
        Self {
            dark_mode: dark_mode::read_preference(),
            language: Language::load(),
            selected_project: storage::load_string(SELECTED_PROJECT_KEY).filter(|id| !id.is_empty()),
        }
    }

    /// Select a project (or clear the selection) and persist the choice.
    pub fn select_project(&mut self, project_id: Option<String>) {
        match project_id.as_deref() {
            Some(id) if !id.is_empty() => storage::save_string(SELECTED_PROJECT_KEY, id),
            _ => storage::remove(SELECTED_PROJECT_KEY),
        }
        self.selected_project = project_id.filter(|id| !id.is_empty());
    }

    /// Switch language and persist it.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        self.language.save();
    }

    /// Translate a static string in the current language.
    pub fn t(&self, text: i18n::Text) -> &'static str {
        i18n::t(self.language, text)
    }
}

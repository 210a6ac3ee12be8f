//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal widgets while reading shared state (auth, UI
//! preferences, chat) from Leptos context providers. Data fetching stays in
//! pages, except for panels that own a self-contained sub-resource
//! (comments, knowledge items).

pub mod badges;
pub mod chat_panel;
pub mod knowledge_panel;
pub mod meeting_calendar;
pub mod milestone_progress;
pub mod plan_card;
pub mod project_selector;
pub mod review_panel;
pub mod stat_tiles;
pub mod ticket_detail;
pub mod ticket_filters;
pub mod ticket_table;
pub mod toolbar;
pub mod upload_form;

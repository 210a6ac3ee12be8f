//! View-model derivation helpers for the agency portal.
//!
//! This crate is UI-framework agnostic so the Leptos client and the CLI share
//! one implementation of every in-memory rule the screens rely on: ticket
//! filtering, milestone progress, project selection, product-plan actions,
//! the delivery review prompt, dashboard tiles, the meeting calendar, and the
//! streaming chat session.
//!
//! None of this enforces business rules; the backend owns validation and
//! state transitions. These helpers only decide what to show.

pub mod calendar;
pub mod chat;
pub mod dashboard;
pub mod dates;
pub mod milestones;
pub mod plans;
pub mod review;
pub mod selection;
pub mod tickets;

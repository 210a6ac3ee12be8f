//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `chat`, etc.) so individual
//! components can depend on small focused models. Page-local collections use
//! [`loadable::Loadable`] signals owned by the page.

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod loadable;
pub mod ui;

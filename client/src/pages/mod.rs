//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and auth redirects and delegates
//! rendering details to `components`.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod plan;
pub mod project;
pub mod tickets;

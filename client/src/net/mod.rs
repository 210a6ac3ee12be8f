//! Networking modules for the portal backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles plain REST calls, `rag` handles the project assistant
//! (streaming chat, knowledge base, document generation). Record types come
//! from the shared `wire` crate.

pub mod api;
pub mod rag;

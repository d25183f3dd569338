//! Networking for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON bodies exchanged with the backend and `api`
//! performs the HTTP calls.

pub mod api;
pub mod types;

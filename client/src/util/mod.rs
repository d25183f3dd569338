//! Helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser concerns (logging) and submit orchestration out of the view
//! code so they can be tested without a DOM.

pub mod auth_flow;
pub mod logging;

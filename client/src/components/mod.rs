//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `nav_drawer` is the chrome around every routed view; `credential_form`
//! renders the email/password fields shared by the login and register pages.

pub mod credential_form;
pub mod nav_drawer;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view-local state and delegates shared markup to
//! `components` and submit behavior to `util::auth_flow`.

pub mod home;
pub mod landing;
pub mod login;
pub mod register;

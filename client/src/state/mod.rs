//! View-local client state.
//!
//! DESIGN
//! ======
//! Nothing here is shared across views or persisted. Each form creates its
//! own draft when it mounts and drops it when it unmounts.

pub mod credentials;

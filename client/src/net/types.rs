//! Wire DTOs for the auth backend.
//!
//! DESIGN
//! ======
//! The backend has no documented response schema. `AuthResponse` only pulls
//! out `message` and tolerates anything else, including a body that is not
//! JSON at all.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// JSON body for both `POST /base/login/` and `POST /base/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Successful auth response. Only `message` is read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Decode a success body leniently. Unparseable bodies yield an empty
    /// response rather than an error.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

//! Email + password draft owned by the login and register forms.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;

use crate::net::types::AuthRequest;

/// Not-yet-submitted email and password held by a login or register form.
///
/// Updated on every keystroke. No format validation: whatever the user typed
/// is what gets submitted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub email: String,
    pub password: String,
}

impl CredentialDraft {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Snapshot the draft into the request body sent to the auth API.
    #[must_use]
    pub fn to_request(&self) -> AuthRequest {
        AuthRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

impl fmt::Debug for CredentialDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDraft")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

//! Submit and redirect handlers shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the draft and the router; this module owns what a submit does
//! with them. Transport and navigation come in as parameters so the flows run
//! unchanged in the browser and in unit tests.
//!
//! Each submit issues exactly one request. There is no in-flight guard: a
//! second click while the first request is pending issues a second request,
//! and responses may resolve in any order. Failures are logged and swallowed.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use crate::net::api::{ApiError, AuthTransport, LOGIN_ENDPOINT, REGISTER_ENDPOINT};
use crate::net::types::AuthResponse;
use crate::routes;
use crate::state::credentials::CredentialDraft;

/// What happened to one submit. Returned for observability only; the pages
/// ignore it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(AuthResponse),
    Rejected(ApiError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// POST the draft to the login endpoint and log the result.
pub async fn submit_login<T: AuthTransport>(transport: &T, draft: &CredentialDraft) -> SubmitOutcome {
    post_and_log(transport, LOGIN_ENDPOINT, draft).await
}

/// POST the draft to the register endpoint, log the result, and on success
/// navigate to [`routes::POST_REGISTER`] regardless of the response body.
pub async fn submit_register<T, N>(transport: &T, draft: &CredentialDraft, navigate: N) -> SubmitOutcome
where
    T: AuthTransport,
    N: FnOnce(&str),
{
    let outcome = post_and_log(transport, REGISTER_ENDPOINT, draft).await;
    if outcome.is_accepted() {
        navigate(routes::POST_REGISTER);
    }
    outcome
}

/// Secondary action on the login page.
pub fn go_to_register<N: FnOnce(&str)>(navigate: N) {
    navigate(routes::REGISTER);
}

/// Secondary action on the register page.
pub fn go_to_login<N: FnOnce(&str)>(navigate: N) {
    navigate(routes::LOGIN);
}

async fn post_and_log<T: AuthTransport>(transport: &T, endpoint: &str, draft: &CredentialDraft) -> SubmitOutcome {
    let body = draft.to_request();
    match transport.post_credentials(endpoint, &body).await {
        Ok(resp) => {
            log::info!("{endpoint}: {}", resp.message.as_deref().unwrap_or("<no message>"));
            SubmitOutcome::Accepted(resp)
        }
        Err(e) => {
            log::error!("{endpoint}: {e}");
            SubmitOutcome::Rejected(e)
        }
    }
}

//! HTTP calls to the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport returns `ApiError::Unavailable` since
//! submits only ever happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an `ApiError`. Callers log it and move on;
//! nothing here panics, retries, or times out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AuthRequest, AuthResponse};

/// Backend address used when `FORCASTOCK_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

pub const LOGIN_ENDPOINT: &str = "/base/login/";
pub const REGISTER_ENDPOINT: &str = "/base/register/";

/// Failure of a single auth request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("not available on server")]
    Unavailable,
}

/// Backend base URL baked in at compile time. An empty value means
/// same-origin requests.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("FORCASTOCK_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join a base URL and an endpoint path without doubling the slash.
#[must_use]
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base.trim_end_matches('/'))
}

/// Seam between the auth flow and the network.
///
/// The browser build uses [`HttpTransport`]; tests substitute a recording
/// fake. Futures are not `Send` because everything runs on the single UI
/// event loop.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// POST `body` as JSON to `endpoint` (a path such as [`LOGIN_ENDPOINT`]).
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request cannot be sent or the backend
    /// answers with a non-2xx status.
    async fn post_credentials(&self, endpoint: &str, body: &AuthRequest) -> Result<AuthResponse, ApiError>;
}

/// `gloo-net` backed transport talking to the configured backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        endpoint_url(&self.base, endpoint)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl AuthTransport for HttpTransport {
    async fn post_credentials(&self, endpoint: &str, body: &AuthRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url_for(endpoint);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { endpoint: endpoint.to_owned(), status: resp.status() });
            }
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(AuthResponse::from_body(&text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}

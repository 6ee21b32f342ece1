//! Login and signup calls against the external auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports an error, since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status/body classification is split into pure `interpret_*` functions so
//! the success/failure rules are testable without a network. Only a server
//! supplied `error` message becomes `AuthError::Rejected`; anything else is
//! `Malformed` or `Transport` and is left to the caller's failure policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::{Credentials, ErrorBody, LoginResponse};
use crate::state::session::Token;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Why a login or signup call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a failure status and an `error` message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The server answered, but the body was not what the endpoint promises.
    #[error("unexpected response: {0}")]
    Malformed(String),

    /// No response was received.
    #[error("request failed: {0}")]
    Transport(String),
}

impl AuthError {
    /// Message suitable for showing to the user, if the server supplied one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            Self::Malformed(_) | Self::Transport(_) => None,
        }
    }
}

/// The two operations the view controller needs from the auth service.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    /// Exchange credentials for a session token.
    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError>;

    /// Register credentials. Does not log in.
    async fn signup(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// `AuthClient` backed by JSON POSTs to `{base_url}/login` and `{base_url}/signup`.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// POST `credentials` as JSON and return the raw status and body text.
    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<(u16, String), AuthError> {
        let url = endpoint(&self.base_url, path);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            log::debug!("POST {url} -> {status}");
            Ok((status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(AuthError::Transport(format!("{url}: not available outside the browser")))
        }
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        let (status, body) = self.post_credentials(LOGIN_PATH, credentials).await?;
        interpret_login(status, &body)
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let (status, body) = self.post_credentials(SIGNUP_PATH, credentials).await?;
        interpret_signup(status, &body)
    }
}

/// Join the base URL and an endpoint path with exactly one `/`.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Classify a `/login` response: any 2xx with a token field is success.
///
/// # Errors
///
/// `Malformed` for a 2xx body without a token; otherwise see [`rejection`].
pub fn interpret_login(status: u16, body: &str) -> Result<Token, AuthError> {
    if !(200..300).contains(&status) {
        return Err(rejection(status, body));
    }
    let parsed: LoginResponse =
        serde_json::from_str(body).map_err(|e| AuthError::Malformed(format!("login body: {e}")))?;
    parsed
        .into_token()
        .and_then(Token::parse)
        .ok_or_else(|| AuthError::Malformed("login body: missing token".to_owned()))
}

/// Classify a `/signup` response: only `204 No Content` is success.
///
/// # Errors
///
/// Any other status is classified by [`rejection`].
pub fn interpret_signup(status: u16, body: &str) -> Result<(), AuthError> {
    if status == 204 {
        Ok(())
    } else {
        Err(rejection(status, body))
    }
}

/// `Rejected` when the body carries an `error` message, `Malformed` otherwise.
pub fn rejection(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message) }) => AuthError::Rejected { status, message },
        Ok(ErrorBody { error: None }) => AuthError::Malformed(format!("status {status} without error message")),
        Err(e) => AuthError::Malformed(format!("status {status}: {e}")),
    }
}

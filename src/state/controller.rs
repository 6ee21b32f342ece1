//! View controller: the login/dashboard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Coordinates the session store, auth client and advisory provider, and
//! publishes every state change and notification through a `ViewSink`. The
//! Leptos layer implements the sink with signals; tests record into vectors.
//!
//! TRANSITIONS
//! ===========
//! start (token)      -> Loading -> Authenticated
//! start (no token)   -> Unauthenticated, no network calls
//! login ok           -> token written -> Loading -> Authenticated
//! login failed       -> Unauthenticated + notification
//! signup (any)       -> Unauthenticated + notification
//!
//! There is no logout transition.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::advisory::AdvisoryProvider;
use super::session::SessionStore;
use super::view::{Notification, ViewState};
use crate::net::auth::{AuthClient, AuthError};
use crate::net::types::Credentials;

pub const LOGIN_FAILED: &str = "Login Failed";
pub const SIGNUP_FAILED: &str = "Signup Failed";
pub const SIGNUP_OK: &str = "Signup Successful";
pub const SIGNUP_OK_DETAIL: &str = "You can now log in with your credentials.";
pub const REQUEST_FAILED_DETAIL: &str = "Request failed. Check your connection and try again.";

/// What to do when a call fails without a server-supplied message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailurePolicy {
    /// Log it and raise a generic error notification.
    Notify,
    /// Log it only; the form just stops being busy.
    LogOnly,
}

/// Receiver for controller output.
pub trait ViewSink {
    fn set_state(&self, state: ViewState);
    fn notify(&self, notification: Notification);
}

pub struct ViewController<S, A, P> {
    session: S,
    auth: A,
    advisory: P,
    transport_failures: TransportFailurePolicy,
}

impl<S, A, P> ViewController<S, A, P>
where
    S: SessionStore,
    A: AuthClient,
    P: AdvisoryProvider,
{
    pub fn new(session: S, auth: A, advisory: P, transport_failures: TransportFailurePolicy) -> Self {
        Self { session, auth, advisory, transport_failures }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// State to render before `start` runs: `Loading` when a token is stored.
    pub fn initial_state(&self) -> ViewState {
        if self.session.read().is_some() { ViewState::Loading } else { ViewState::default() }
    }

    /// Enter the dashboard if a token is already stored; otherwise show the form.
    pub async fn start(&self, sink: &impl ViewSink) {
        if self.session.read().is_some() {
            log::debug!("stored session found; loading advisory");
            sink.set_state(ViewState::Loading);
            self.load_advisory(sink).await;
        } else {
            log::debug!("no stored session");
            sink.set_state(ViewState::default());
        }
    }

    /// Submit the login form.
    pub async fn login(&self, credentials: &Credentials, sink: &impl ViewSink) {
        sink.set_state(ViewState::Unauthenticated { busy: true });
        match self.auth.login(credentials).await {
            Ok(token) => {
                log::debug!("login succeeded for {}", credentials.email);
                self.session.write(&token);
                sink.set_state(ViewState::Loading);
                self.load_advisory(sink).await;
            }
            Err(err) => {
                sink.set_state(ViewState::Unauthenticated { busy: false });
                self.report(LOGIN_FAILED, &err, sink);
            }
        }
    }

    /// Submit the signup form. Never logs the user in.
    pub async fn signup(&self, credentials: &Credentials, sink: &impl ViewSink) {
        sink.set_state(ViewState::Unauthenticated { busy: true });
        let result = self.auth.signup(credentials).await;
        sink.set_state(ViewState::Unauthenticated { busy: false });
        match result {
            Ok(()) => {
                log::debug!("signup succeeded for {}", credentials.email);
                sink.notify(Notification::success(SIGNUP_OK, SIGNUP_OK_DETAIL));
            }
            Err(err) => self.report(SIGNUP_FAILED, &err, sink),
        }
    }

    async fn load_advisory(&self, sink: &impl ViewSink) {
        let record = self.advisory.fetch().await;
        sink.set_state(ViewState::Authenticated(record));
    }

    fn report(&self, title: &str, err: &AuthError, sink: &impl ViewSink) {
        if let Some(message) = err.user_message() {
            sink.notify(Notification::error(title, message));
            return;
        }
        log::error!("{title}: {err}");
        if self.transport_failures == TransportFailurePolicy::Notify {
            sink.notify(Notification::error(title, REQUEST_FAILED_DETAIL));
        }
    }
}

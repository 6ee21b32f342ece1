//! Data the controller publishes to the UI.
//!
//! DESIGN
//! ======
//! The screen is one of three mutually exclusive states. Carrying the
//! advisory inside `Authenticated` rules out "loading while showing data"
//! and "logged in without data" combinations.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use uuid::Uuid;

use super::advisory::AdvisoryRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// Login/signup form. `busy` is set while a form request is in flight.
    Unauthenticated { busy: bool },
    /// A token is stored and the advisory is being fetched.
    Loading,
    /// Dashboard with the fetched advisory.
    Authenticated(AdvisoryRecord),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Unauthenticated { busy: false }
    }
}

impl ViewState {
    /// True once a token is stored, whether or not the advisory has arrived.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Loading | Self::Authenticated(_))
    }

    /// True while the login/signup buttons should show their busy indicator.
    pub fn form_busy(&self) -> bool {
        matches!(self, Self::Unauthenticated { busy: true })
    }

    pub fn advisory(&self) -> Option<&AdvisoryRecord> {
        match self {
            Self::Authenticated(record) => Some(record),
            Self::Unauthenticated { .. } | Self::Loading => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// Transient toast shown over the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, description)
    }

    fn new(level: NotificationLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), level, title: title.into(), description: description.into() }
    }
}

use futures::executor::block_on;

use super::*;
use crate::state::advisory::{AdvisoryProvider, StaticAdvisoryProvider};

// =============================================================
// ViewState
// =============================================================

#[test]
fn view_state_default_is_idle_form() {
    let state = ViewState::default();
    assert_eq!(state, ViewState::Unauthenticated { busy: false });
    assert!(!state.is_logged_in());
    assert!(!state.form_busy());
}

#[test]
fn busy_form_is_not_logged_in() {
    let state = ViewState::Unauthenticated { busy: true };
    assert!(state.form_busy());
    assert!(!state.is_logged_in());
    assert!(state.advisory().is_none());
}

#[test]
fn loading_is_logged_in_without_advisory() {
    let state = ViewState::Loading;
    assert!(state.is_logged_in());
    assert!(!state.form_busy());
    assert!(state.advisory().is_none());
}

#[test]
fn authenticated_exposes_advisory() {
    let record = block_on(StaticAdvisoryProvider.fetch());
    let state = ViewState::Authenticated(record.clone());
    assert!(state.is_logged_in());
    assert_eq!(state.advisory(), Some(&record));
}

// =============================================================
// Notification
// =============================================================

#[test]
fn notification_constructors_set_level() {
    let ok = Notification::success("Signup Successful", "You can now log in with your credentials.");
    assert_eq!(ok.level, NotificationLevel::Success);
    assert_eq!(ok.title, "Signup Successful");

    let err = Notification::error("Login Failed", "bad password");
    assert_eq!(err.level, NotificationLevel::Error);
    assert_eq!(err.description, "bad password");
}

#[test]
fn notifications_get_distinct_ids() {
    let a = Notification::error("x", "y");
    let b = Notification::error("x", "y");
    assert_ne!(a.id, b.id);
}

#[test]
fn level_css_modifiers() {
    assert_eq!(NotificationLevel::Success.css_modifier(), "toast--success");
    assert_eq!(NotificationLevel::Error.css_modifier(), "toast--error");
}

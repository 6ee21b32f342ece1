use futures::executor::block_on;

use super::*;
use crate::state::advisory::AdvisoryProvider;
use crate::state::session::{MemorySessionStore, SessionStore, Token};

fn sink() -> SignalSink {
    SignalSink {
        view: RwSignal::new(ViewState::default()),
        notifications: RwSignal::new(Vec::new()),
        notify_ms: 3000,
    }
}

#[test]
fn signal_sink_publishes_state() {
    let sink = sink();
    sink.set_state(ViewState::Loading);
    assert_eq!(sink.view.get_untracked(), ViewState::Loading);
}

#[test]
fn signal_sink_appends_notifications() {
    let sink = sink();
    let note = Notification::error("Login Failed", "Invalid credentials");
    sink.notify(note.clone());
    assert_eq!(sink.notifications.get_untracked(), vec![note]);
}

#[test]
fn controller_drives_signal_sink_to_dashboard() {
    let sink = sink();
    let ctl = ViewController::new(
        MemorySessionStore::with_token(Token::parse("stored").unwrap()),
        HttpAuthClient::new("https://auth.test"),
        StaticAdvisoryProvider,
        crate::state::controller::TransportFailurePolicy::Notify,
    );
    assert!(ctl.session().read().is_some());

    block_on(ctl.start(&sink));

    let expected = block_on(StaticAdvisoryProvider.fetch());
    assert_eq!(sink.view.get_untracked(), ViewState::Authenticated(expected));
    assert!(sink.notifications.get_untracked().is_empty());
}

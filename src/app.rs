//! Root application component and the signal-backed view sink.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::toasts::{self, ToastStack};
use crate::config::AppConfig;
use crate::net::auth::HttpAuthClient;
use crate::net::types::Credentials;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::advisory::StaticAdvisoryProvider;
use crate::state::controller::{ViewController, ViewSink};
use crate::state::session::LocalSessionStore;
use crate::state::view::{Notification, ViewState};

pub type AppController = ViewController<LocalSessionStore, HttpAuthClient, StaticAdvisoryProvider>;

/// Publishes controller output into the reactive signals the pages read.
#[derive(Clone, Copy)]
pub struct SignalSink {
    pub view: RwSignal<ViewState>,
    pub notifications: RwSignal<Vec<Notification>>,
    pub notify_ms: u32,
}

impl ViewSink for SignalSink {
    fn set_state(&self, state: ViewState) {
        self.view.set(state);
    }

    fn notify(&self, notification: Notification) {
        toasts::push(self.notifications, notification, self.notify_ms);
    }
}

/// Root application component.
///
/// Builds the controller from config, provides the view and notification
/// signals as context, and switches between the form and the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    log::debug!("auth service at {}", config.api_base_url);

    let controller: Rc<AppController> = Rc::new(ViewController::new(
        LocalSessionStore::new(config.session_key.clone()),
        HttpAuthClient::new(config.api_base_url.clone()),
        StaticAdvisoryProvider,
        config.transport_failures,
    ));

    let view_state = RwSignal::new(controller.initial_state());
    let notifications = RwSignal::new(Vec::<Notification>::new());
    let sink = SignalSink { view: view_state, notifications, notify_ms: config.notify_ms };

    provide_context(view_state);
    provide_context(notifications);

    let controller = StoredValue::new_local(controller);

    #[cfg(feature = "csr")]
    {
        let ctl = controller.get_value();
        leptos::task::spawn_local(async move {
            ctl.start(&sink).await;
        });
    }

    let on_login = Callback::new(move |credentials: Credentials| {
        #[cfg(feature = "csr")]
        {
            let ctl = controller.get_value();
            leptos::task::spawn_local(async move {
                ctl.login(&credentials, &sink).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, controller, sink);
        }
    });

    let on_signup = Callback::new(move |credentials: Credentials| {
        #[cfg(feature = "csr")]
        {
            let ctl = controller.get_value();
            leptos::task::spawn_local(async move {
                ctl.signup(&credentials, &sink).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, controller, sink);
        }
    });

    let busy = Signal::derive(move || view_state.get().form_busy());
    // Only swap pages on login, so busy toggles keep the typed form values.
    let logged_in = Memo::new(move |_| view_state.get().is_logged_in());

    view! {
        <Title text="Kheti App"/>
        <ToastStack/>
        {move || {
            if logged_in.get() {
                view! { <DashboardPage/> }.into_any()
            } else {
                view! { <LoginPage busy on_login on_signup/> }.into_any()
            }
        }}
    }
}

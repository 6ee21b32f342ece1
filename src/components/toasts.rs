//! Transient notification stack rendered over every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller pushes notifications through the app's `ViewSink`; this
//! module owns how long they stay and how they are dismissed.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::view::Notification;

/// Append `notification` and, in the browser, schedule its removal after `ttl_ms`.
pub fn push(list: RwSignal<Vec<Notification>>, notification: Notification, ttl_ms: u32) {
    let id = notification.id;
    list.update(|l| l.push(notification));
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(ttl_ms, move || {
            // The stack may already be disposed.
            let _ = list.try_update(|l| dismiss(l, id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, ttl_ms);
    }
}

/// Remove the notification with `id`, if still present.
pub fn dismiss(list: &mut Vec<Notification>, id: Uuid) {
    list.retain(|n| n.id != id);
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Vec<Notification>>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=format!("toast {}", n.level.css_modifier())>
                            <div class="toast__body">
                                <strong class="toast__title">{n.title}</strong>
                                <p class="toast__description">{n.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| notifications.update(|l| dismiss(l, id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

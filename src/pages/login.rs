//! Login/signup form shown while no session token is stored.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Credentials;

/// Label for a form button, swapped for an ellipsis while a request runs.
fn button_label(idle: &'static str, busy: bool) -> &'static str {
    if busy { "…" } else { idle }
}

#[component]
pub fn LoginPage(
    #[prop(into)] busy: Signal<bool>,
    on_login: Callback<Credentials>,
    on_signup: Callback<Credentials>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let current = move || Credentials::new(email.get(), password.get());

    view! {
        <div class="login-page">
            <h1 class="login-page__title">"Kheti App"</h1>
            <div class="login-form">
                <input
                    class="login-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    class="login-button"
                    class:login-button--busy=move || busy.get()
                    disabled=move || busy.get()
                    on:click=move |_| on_login.run(current())
                >
                    {move || button_label("Login", busy.get())}
                </button>
                <button
                    class="login-button login-button--outline"
                    class:login-button--busy=move || busy.get()
                    disabled=move || busy.get()
                    on:click=move |_| on_signup.run(current())
                >
                    {move || button_label("Signup", busy.get())}
                </button>
            </div>
        </div>
    }
}

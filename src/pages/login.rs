//! Login page. The form posts natively to the backend; the client only
//! blocks submission when a field is empty.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::flash_messages::FlashMessages;
use crate::state::session::PageBootstrap;
use crate::util::browser::alert;

/// Both fields must be non-empty. Values are not trimmed, so a password of
/// spaces is allowed through to the server.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields.");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_context::<PageBootstrap>().unwrap_or_default();
    let endpoints = session.config.endpoints;
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(()) => log::debug!("login form passed client-side checks"),
            Err(message) => {
                ev.prevent_default();
                alert(message);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <FlashMessages flashes=session.flashes/>
                <form id="loginForm" class="auth-form" method="post" action=endpoints.login on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class="auth-input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class="auth-input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit">
                        "Login"
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href=endpoints.signup rel="external">
                        "Sign up"
                    </a>
                </p>
            </div>
        </div>
    }
}

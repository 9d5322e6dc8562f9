//! Signup page. Like login, the form posts natively once the client-side
//! check passes.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::flash_messages::FlashMessages;
use crate::state::session::PageBootstrap;
use crate::util::browser::alert;

/// Username, email and password must all be non-blank after trimming.
pub(crate) fn validate_signup_input(username: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if [username, email, password].iter().any(|v| v.trim().is_empty()) {
        return Err("Please fill in username, email, and password.");
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_context::<PageBootstrap>().unwrap_or_default();
    let endpoints = session.config.endpoints;
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let checked = validate_signup_input(&username.get_untracked(), &email.get_untracked(), &password.get_untracked());
        if let Err(message) = checked {
            ev.prevent_default();
            alert(message);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <FlashMessages flashes=session.flashes/>
                <form id="signupForm" class="auth-form" method="post" action=endpoints.signup on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        class="auth-input"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        "Sign Up"
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href=endpoints.login rel="external">
                        "Log in"
                    </a>
                </p>
            </div>
        </div>
    }
}

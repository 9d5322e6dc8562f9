//! "New chat" control.

use leptos::prelude::*;

use crate::config::UiConfig;

const NEW_CHAT_CONFIRM: &str = "Start a new chat? This will clear the current conversation and create a new thread.";

/// Asks for confirmation, resets the active thread on the server and
/// reloads the main view. Failures are alerted.
#[component]
pub fn NewChatButton() -> impl IntoView {
    let endpoints = StoredValue::new(use_context::<UiConfig>().unwrap_or_default().endpoints);

    let on_click = move |_| {
        if !crate::util::browser::confirm(NEW_CHAT_CONFIRM) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use crate::net::api::{new_chat_alert, start_new_chat};
            use crate::util::browser::{alert, navigate};

            let (url, main_view) = endpoints.with_value(|e| (e.new_chat.clone(), e.main_view.clone()));
            leptos::task::spawn_local(async move {
                match start_new_chat(&url).await {
                    Ok(()) => navigate(&main_view),
                    Err(e) => {
                        log::warn!("new chat error: {e}");
                        alert(&new_chat_alert(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = endpoints;
        }
    };

    view! {
        <button class="btn new-chat-btn" id="newChatBtn" title="Start a new chat" on:click=on_click>
            "+ New Chat"
        </button>
    }
}

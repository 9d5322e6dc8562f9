//! Copy-to-clipboard affordance attached to AI messages.

use leptos::prelude::*;

use crate::config::UiConfig;

const COPY_TITLE: &str = "Copy Message";
const COPIED_TITLE: &str = "Copied!";

/// Copies the raw (pre-render) message text. The title flips to a
/// confirmation for a while after a successful write; failures are only
/// logged.
#[component]
pub fn CopyButton(text: String) -> impl IntoView {
    let confirm_ms = use_context::<UiConfig>().unwrap_or_default().copy_confirm_ms;
    let copied = RwSignal::new(false);
    let raw = StoredValue::new(text);

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            let text = raw.get_value();
            leptos::task::spawn_local(async move {
                match crate::util::browser::copy_to_clipboard(&text).await {
                    Ok(()) => {
                        copied.set(true);
                        gloo_timers::future::TimeoutFuture::new(confirm_ms).await;
                        copied.set(false);
                    }
                    Err(e) => log::error!("could not copy text: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (raw, confirm_ms);
        }
    };

    view! {
        <button
            class="icon-btn copy-message-btn"
            class:copy-message-btn--copied=move || copied.get()
            title=move || if copied.get() { COPIED_TITLE } else { COPY_TITLE }
            on:click=on_click
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="16"
                height="16"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
                <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
            </svg>
        </button>
    }
}

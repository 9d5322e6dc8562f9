//! Sidebar list of the user's chat threads.

use leptos::prelude::*;

use crate::config::{Endpoints, UiConfig};
use crate::net::types::ThreadId;
use crate::state::session::PageBootstrap;

const DELETE_CONFIRM: &str = "Delete this thread and all its messages?";

/// Threads from the page bootstrap. Links force a full page load so the
/// server renders that thread's history. The active thread is highlighted.
#[component]
pub fn ThreadList() -> impl IntoView {
    let session = use_context::<PageBootstrap>().unwrap_or_default();
    let endpoints = StoredValue::new(use_context::<UiConfig>().unwrap_or_default().endpoints);

    let items = session
        .threads
        .iter()
        .cloned()
        .map(|thread| {
            let is_active = session.is_active(&thread.id);
            let href = endpoints.with_value(|e| e.thread_view(Some(&thread.id)));
            let id = StoredValue::new(thread.id);
            let on_delete = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                endpoints.with_value(|e| id.with_value(|id| request_delete(e, id)));
            };

            view! {
                <li class="thread-item" class:active=is_active>
                    <a class="thread-link" href=href rel="external">
                        {thread.title}
                    </a>
                    <button class="icon-btn thread-delete-btn" title="Delete thread" on:click=on_delete>
                        "🗑"
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <ul class="thread-list">
            {items}
        </ul>
    }
}

/// Confirm, then delete `thread` and move to whichever thread the server
/// picks next (or the unscoped main view).
fn request_delete(endpoints: &Endpoints, thread: &ThreadId) {
    if !crate::util::browser::confirm(DELETE_CONFIRM) {
        return;
    }
    log::debug!("deleting thread {thread}");

    #[cfg(feature = "csr")]
    {
        use crate::net::api::{delete_thread, delete_thread_alert};
        use crate::util::browser::{alert, navigate};

        let url = endpoints.delete_thread(thread);
        let endpoints = endpoints.clone();
        leptos::task::spawn_local(async move {
            match delete_thread(&url).await {
                Ok(next) => navigate(&endpoints.thread_view(next.as_ref())),
                Err(e) => {
                    log::warn!("delete thread error: {e}");
                    alert(&delete_thread_alert(&e));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoints;
    }
}

//! Server flash messages (one-shot notices queued by the previous request).

use leptos::prelude::*;

use crate::net::types::Flash;

#[component]
pub fn FlashMessages(flashes: Vec<Flash>) -> impl IntoView {
    (!flashes.is_empty()).then(|| {
        let items = flashes
            .into_iter()
            .map(|flash| {
                view! { <div class=format!("alert alert-{}", flash.category)>{flash.message}</div> }
            })
            .collect_view();
        view! { <div class="flash-messages">{items}</div> }
    })
}

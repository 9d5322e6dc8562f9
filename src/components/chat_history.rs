//! Scrollable conversation history.
//!
//! Renders the entries of [`ConversationState`] in order, the typing
//! placeholder included, and scrolls the newest visible entry into view
//! after every change once layout has had time to settle.

use leptos::prelude::*;

use crate::components::message::{MessageView, TypingIndicator};
use crate::config::UiConfig;
use crate::state::conversation::{ConversationState, HistoryEntry};
use crate::state::ui::UiState;

#[component]
pub fn ChatHistory(
    conversation: RwSignal<ConversationState>,
    ui: RwSignal<UiState>,
    user_initial: String,
) -> impl IntoView {
    let settle_ms = use_context::<UiConfig>().unwrap_or_default().scroll_settle_ms;
    let history_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        conversation.track();
        #[cfg(feature = "csr")]
        {
            if let Some(el) = history_ref.get() {
                crate::util::browser::scroll_last_child_into_view(el.into(), settle_ms);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (history_ref, settle_ms);
        }
    });

    let typing_visible = Signal::derive(move || conversation.with(ConversationState::typing_visible));

    view! {
        <div class="chat-history" id="chatHistory" node_ref=history_ref>
            <For
                each=move || conversation.with(|c| c.entries().to_vec())
                key=HistoryEntry::key
                children=move |entry| match entry {
                    HistoryEntry::Message(message) => {
                        view! { <MessageView message user_initial=user_initial.clone() ui/> }.into_any()
                    }
                    HistoryEntry::TypingPlaceholder => {
                        view! { <TypingIndicator visible=typing_visible/> }.into_any()
                    }
                }
            />
        </div>
    }
}

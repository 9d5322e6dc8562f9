//! Main chat screen: thread sidebar, conversation and composer.
//!
//! ARCHITECTURE
//! ============
//! The page owns the conversation and request signals and hands them to the
//! components that read or mutate them. History arrives as raw text in the
//! page bootstrap and is rendered through the same path as live replies.

use leptos::prelude::*;

use crate::components::{
    chat_history::ChatHistory, composer::Composer, flash_messages::FlashMessages, image_modal::ImageModal,
    new_chat_button::NewChatButton, thread_list::ThreadList,
};
use crate::state::conversation::{ConversationState, user_avatar_initial};
use crate::state::request::RequestState;
use crate::state::session::PageBootstrap;
use crate::state::ui::UiState;

#[component]
pub fn MainActivityPage() -> impl IntoView {
    let session = use_context::<PageBootstrap>().unwrap_or_default();
    let ui = use_context::<RwSignal<UiState>>().unwrap_or_else(|| RwSignal::new(UiState::default()));

    let conversation = RwSignal::new(ConversationState::from_history(&session.history));
    let request = RwSignal::new(RequestState::default());
    let user_initial = user_avatar_initial(session.username.as_deref());
    log::debug!(
        "main view: {} history messages, active thread {:?}",
        conversation.with_untracked(ConversationState::message_count),
        session.active_thread_id
    );

    let PageBootstrap { username, flashes, config, .. } = session;

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h2>"Diagnosis Chat"</h2>
                    <NewChatButton/>
                </div>
                <ThreadList/>
                <div class="sidebar-footer">
                    <span class="sidebar-username">{username}</span>
                    <a class="logout-link" href=config.endpoints.logout rel="external">
                        "Logout"
                    </a>
                </div>
            </aside>
            <main class="chat-container">
                <FlashMessages flashes/>
                <ChatHistory conversation ui user_initial/>
                <Composer conversation request/>
            </main>
            <ImageModal ui/>
        </div>
    }
}

//! User bubbles and AI diagnosis cards.

use leptos::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::format::{markdown::render_markdown_html, render_ai_html};
use crate::state::conversation::{Message, Role};
use crate::state::ui::UiState;

const AI_AVATAR: &str = "🤖";

/// One conversation message. `user_initial` is the user avatar letter.
#[component]
pub fn MessageView(message: Message, user_initial: String, ui: RwSignal<UiState>) -> impl IntoView {
    let Message { role, text, image_url, .. } = message;
    let image = image_url.map(|src| view! { <BubbleImage src ui/> });

    match role {
        Role::User => {
            let rendered = text.as_deref().map(render_markdown_html).unwrap_or_default();
            view! {
                <div class="message user-message">
                    <div class="avatar user-avatar">{user_initial}</div>
                    <div class="message-content-wrapper">
                        <div class="message-bubble">
                            {image}
                            <div class="text-content" inner_html=rendered></div>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
        Role::Ai => {
            let raw = text.unwrap_or_default();
            let rendered = render_ai_html(&raw);
            view! {
                <div class="message ai-message">
                    <div class="avatar ai-avatar">{AI_AVATAR}</div>
                    <div class="message-content-wrapper">
                        {image}
                        <div class="diagnosis-card">
                            <div class="text-content" inner_html=rendered></div>
                        </div>
                        <CopyButton text=raw/>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

/// Thumbnail that opens the image modal with the full source on click.
#[component]
fn BubbleImage(src: String, ui: RwSignal<UiState>) -> impl IntoView {
    let full = StoredValue::new(src.clone());
    view! {
        <div class="image-bubble-wrapper">
            <img
                src=src
                class="uploaded-img-preview-bubble"
                alt="User uploaded image"
                on:click=move |_| ui.update(|u| u.open_image(full.get_value()))
            />
        </div>
    }
}

/// The "assistant is typing" placeholder. Shown and hidden in place.
#[component]
pub fn TypingIndicator(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="message ai-message typing-indicator"
            id="typingIndicator"
            style:display=move || if visible.get() { "flex" } else { "none" }
        >
            <div class="avatar ai-avatar">{AI_AVATAR}</div>
            <div class="message-content-wrapper">
                <div class="typing-dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}

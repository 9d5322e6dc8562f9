//! Chat input form: text, image attachment, preview strip and submission.
//!
//! SUBMISSION FLOW
//! ===============
//! 1. Refuse while a request is in flight, alert on an empty submission.
//! 2. Append the user bubble, show the typing placeholder.
//! 3. Clear the composer straight away, whatever the network does.
//! 4. POST the multipart form; the outcome always lands as one AI message,
//!    the placeholder is hidden and the request settles back to idle.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::net::api::ChatPayload;
use crate::net::outcome::ChatOutcome;
use crate::state::composer::{Attachment, ComposerState, is_submit_key};
use crate::state::conversation::{ConversationState, Role, user_message_text};
use crate::state::request::RequestState;
use crate::util::browser::{alert, revoke_object_url};

/// Land a finished round trip: Sending → Rendering, render the reply, hide
/// the placeholder, back to Idle.
pub(crate) fn apply_outcome(conversation: &mut ConversationState, request: &mut RequestState, outcome: &ChatOutcome) {
    request.response_received();
    conversation.append_message(Role::Ai, Some(outcome.message_text()), None);
    conversation.hide_typing();
    request.settle();
    log::debug!("chat request settled ({} total)", request.completed());
}

fn release_preview(attachment: Option<Attachment>) {
    if let Some(url) = attachment.and_then(|a| a.preview_url) {
        revoke_object_url(&url);
    }
}

fn clear_file_input(file_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "csr")]
    {
        if let Some(input) = file_ref.get_untracked() {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = file_ref;
    }
}

#[cfg(feature = "csr")]
fn selected_file(file_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    file_ref.get_untracked()?.files()?.get(0)
}

#[component]
pub fn Composer(conversation: RwSignal<ConversationState>, request: RwSignal<RequestState>) -> impl IntoView {
    let config = StoredValue::new(use_context::<UiConfig>().unwrap_or_default());
    let composer = RwSignal::new(ComposerState::default());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Auto-resize whenever the text or the attachment changes.
    Effect::new(move || {
        let max_height = config.with_value(|cfg| composer.with(|c| c.max_input_height(cfg)));
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                crate::util::browser::fit_textarea(&el, max_height);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = max_height;
        }
    });

    // Focus on load and after every settled request.
    Effect::new(move || {
        let _settled = request.with(RequestState::completed);
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let on_file_change = move |_: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::state::composer::check_attachment;
            use crate::util::browser::create_object_url;

            let Some(file) = selected_file(file_ref) else {
                return;
            };
            let name = file.name();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(e) = config.with_value(|cfg| check_attachment(&name, size, cfg)) {
                log::warn!("attachment rejected: {e}");
                alert(&e.to_string());
                clear_file_input(file_ref);
                return;
            }
            let mut attachment = Attachment { name, mime: file.type_(), size, preview_url: None };
            if attachment.is_image() {
                attachment.preview_url = create_object_url(&file);
            }
            let previous = composer.try_update(|c| c.attach(attachment));
            release_preview(previous.flatten());
        }
    };

    let on_remove = move |_| {
        release_preview(composer.try_update(ComposerState::detach).flatten());
        clear_file_input(file_ref);
    };

    let submit = move || {
        if request.with_untracked(RequestState::in_flight) {
            log::debug!("submission ignored: a chat request is already in flight");
            return;
        }
        let submission = match composer.with_untracked(ComposerState::prepare) {
            Ok(submission) => submission,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        if let Some(Err(e)) = request.try_update(RequestState::begin) {
            log::debug!("submission ignored: {e}");
            return;
        }

        // The preview URL moves to the user bubble and stays alive.
        let image_url = composer.with_untracked(|c| c.attachment.as_ref().and_then(|a| a.preview_url.clone()));
        let text = user_message_text(submission.query.as_deref(), submission.attachment_name.as_deref());
        conversation.update(|c| {
            c.append_message(Role::User, text, image_url);
            c.show_typing();
        });

        let payload = ChatPayload {
            query: submission.query,
            #[cfg(feature = "csr")]
            image: selected_file(file_ref),
        };
        composer.update(|c| {
            c.clear();
        });
        clear_file_input(file_ref);

        let endpoint = config.with_value(|cfg| cfg.endpoints.chat.clone());
        log::debug!("sending chat request to {endpoint}");

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_chat(&endpoint, payload).await;
            conversation.update(|c| request.update(|r| apply_outcome(c, r, &outcome)));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    let attachment_name = move || composer.with(|c| c.attachment.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let preview_thumb = move || {
        composer
            .with(|c| c.attachment.as_ref().and_then(|a| a.preview_url.clone()))
            .map(|src| view! { <img class="file-preview-thumb" src=src alt="Preview"/> })
    };

    view! {
        <form class="chat-form" id="chatForm" on:submit=on_submit>
            <Show when=move || composer.with(|c| c.attachment.is_some())>
                <div class="file-preview" id="filePreview">
                    {preview_thumb}
                    <span class="file-name">{attachment_name}</span>
                    <button type="button" class="icon-btn remove-file-btn" title="Remove file" on:click=on_remove>
                        "✕"
                    </button>
                </div>
            </Show>
            <div class="chat-input-row">
                <label for="imageUpload" class="icon-btn add-file-btn" title="Attach image">
                    "📎"
                </label>
                <input
                    type="file"
                    id="imageUpload"
                    name="image"
                    accept="image/*"
                    class="hidden-file-input"
                    node_ref=file_ref
                    on:change=on_file_change
                />
                <textarea
                    id="queryInput"
                    name="query"
                    class="query-input"
                    rows="1"
                    placeholder="Describe your symptoms or upload an image..."
                    node_ref=input_ref
                    prop:value=move || composer.with(|c| c.text.clone())
                    on:input=move |ev| composer.update(|c| c.text = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    type="submit"
                    class="btn btn--primary send-btn"
                    disabled=move || request.with(RequestState::in_flight)
                >
                    "Send"
                </button>
            </div>
        </form>
    }
}

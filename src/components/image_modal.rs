//! Full-size image overlay.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Lightbox for message images. The backdrop, the close control and Escape
/// all dismiss it, which also drops the loaded source.
#[component]
pub fn ImageModal(ui: RwSignal<UiState>) -> impl IntoView {
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // Focus on open so Escape reaches the keydown handler.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = modal_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let close = move || {
        if ui.with_untracked(UiState::modal_open) {
            ui.update(UiState::close_image);
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };
    let source = move || ui.with(|u| u.modal_image.clone().unwrap_or_default());

    view! {
        <Show when=move || ui.with(UiState::modal_open)>
            <div
                class="image-modal"
                id="imageModal"
                tabindex="-1"
                node_ref=modal_ref
                on:click=move |_| close()
                on:keydown=on_keydown
            >
                <span
                    class="close-modal"
                    title="Close"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        close();
                    }
                >
                    "×"
                </span>
                <img
                    class="modal-content"
                    alt="Enlarged image"
                    src=source
                    on:click=move |ev| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}

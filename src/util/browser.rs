//! Thin wrappers over browser APIs: dialogs, navigation, clipboard,
//! object URLs, scrolling and input sizing.
//!
//! Everything degrades to a no-op (or a refusal) outside the browser so the
//! callers stay testable natively. Failures of the underlying APIs are
//! logged, never raised to the user.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Render a thrown JS value as text for logs and error variants.
#[cfg(feature = "csr")]
pub fn describe_js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {}", describe_js_error(e));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("alert outside browser: {message}");
    }
}

/// Blocking `window.confirm`. Anything but an explicit OK counts as no.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Full page navigation (leaves the single-page app).
pub fn navigate(url: &str) {
    log::debug!("navigating to {url}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::warn!("navigation to {url} failed: {}", describe_js_error(e));
            }
        }
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description of the failure when the clipboard rejects the
/// write or no browser is available.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(describe_js_error)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err("clipboard unavailable outside the browser".to_owned())
    }
}

/// Object URL for a picked file, used for the preview thumbnail.
#[cfg(feature = "csr")]
pub fn create_object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file)
        .map_err(|e| log::warn!("preview url failed: {}", describe_js_error(e)))
        .ok()
}

pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("revoking {url} failed: {}", describe_js_error(e));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// After `delay_ms`, smoothly scroll the last visible child of `container`
/// so its bottom edge is in view. Hidden children (zero height) are skipped.
#[cfg(feature = "csr")]
pub fn scroll_last_child_into_view(container: web_sys::Element, delay_ms: u32) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;

        let mut child = container.last_element_child();
        while let Some(el) = child {
            if el.client_height() > 0 {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::End);
                el.scroll_into_view_with_scroll_into_view_options(&options);
                return;
            }
            child = el.previous_element_sibling();
        }
    });
}

/// Grow or shrink a textarea to its content, capped at `max_height` px.
#[cfg(feature = "csr")]
pub fn fit_textarea(el: &web_sys::HtmlTextAreaElement, max_height: u32) {
    use crate::state::composer::fit_input_height;

    let style = el.style();
    // Collapse first so scroll_height reflects the content, not the old box.
    let _ = style.set_property("height", "auto");
    let content = u32::try_from(el.scroll_height()).unwrap_or(0);
    let size = fit_input_height(content, max_height);
    let _ = style.set_property("height", &format!("{}px", size.height));
    let _ = style.set_property("overflow-y", if size.scrolls { "auto" } else { "hidden" });
}

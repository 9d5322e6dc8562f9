//! REST helpers for the chat backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs that report the browser as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! The chat call never fails; every way it can end is folded into a
//! [`ChatOutcome`] that renders as a conversation message. The new-chat and
//! delete-thread calls return [`ApiError`], and the `*_alert` helpers turn
//! those into the blocking alert text shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::outcome::ChatOutcome;
use super::types::{DeleteThreadReply, ErrorBody, ThreadId};

/// Failure of a non-chat backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Multipart body for `POST /chat`.
#[derive(Clone, Debug, Default)]
pub struct ChatPayload {
    /// Trimmed query text, `None` when blank.
    pub query: Option<String>,
    #[cfg(feature = "csr")]
    pub image: Option<web_sys::File>,
}

/// Interpret a `/new_chat` response. Error bodies must be JSON.
pub(crate) fn new_chat_result(ok: bool, status: u16, body: &str) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    let err: ErrorBody = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Err(ApiError::Status { status, message: err.message })
}

/// Interpret a `/threads/{id}/delete` response, yielding the thread to show next.
///
/// The body is decoded before the status is looked at, so a non-JSON body is
/// a decode failure whatever the status.
pub(crate) fn delete_thread_result(ok: bool, status: u16, body: &str) -> Result<Option<ThreadId>, ApiError> {
    let reply: DeleteThreadReply = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if ok {
        Ok(reply.next_thread_id)
    } else {
        Err(ApiError::Status { status, message: reply.message })
    }
}

/// Alert text for a failed new-chat request.
pub fn new_chat_alert(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => {
            format!("Failed to start new chat: {}", message.as_deref().unwrap_or("unknown error"))
        }
        _ => "A server error occurred while trying to start a new chat.".to_owned(),
    }
}

/// Alert text for a failed thread deletion.
pub fn delete_thread_alert(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("Failed to delete thread.")
            .to_owned(),
        _ => "Server error deleting thread.".to_owned(),
    }
}

/// Send a chat submission to `endpoint` as multipart form data.
pub async fn send_chat(endpoint: &str, payload: ChatPayload) -> ChatOutcome {
    #[cfg(feature = "csr")]
    {
        let form = match chat_form_data(&payload) {
            Ok(form) => form,
            Err(e) => return ChatOutcome::Transport(e),
        };
        let request = match gloo_net::http::Request::post(endpoint).body(form) {
            Ok(request) => request,
            Err(e) => return ChatOutcome::Transport(e.to_string()),
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("chat request failed: {e}");
                return ChatOutcome::Transport(e.to_string());
            }
        };
        let body = resp.text().await.unwrap_or_default();
        let outcome = ChatOutcome::from_response(resp.ok(), resp.status(), &resp.status_text(), &body);
        if outcome.is_transport_failure() {
            log::error!("chat reply unusable: {outcome:?}");
        } else if outcome.is_client_rejection() {
            log::warn!("chat request rejected by server: {}", outcome.message_text());
        }
        outcome
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
        ChatOutcome::Transport(ApiError::Unavailable.to_string())
    }
}

#[cfg(feature = "csr")]
fn chat_form_data(payload: &ChatPayload) -> Result<web_sys::FormData, String> {
    use crate::util::browser::describe_js_error;

    let form = web_sys::FormData::new().map_err(describe_js_error)?;
    if let Some(query) = &payload.query {
        form.append_with_str("query", query).map_err(describe_js_error)?;
    }
    if let Some(image) = &payload.image {
        form.append_with_blob_and_filename("image", image, &image.name())
            .map_err(describe_js_error)?;
    }
    Ok(form)
}

/// Reset the session's active thread via `POST /new_chat`.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers non-2xx, or the
/// error body cannot be decoded.
pub async fn start_new_chat(endpoint: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = resp.text().await.unwrap_or_default();
        new_chat_result(resp.ok(), resp.status(), &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// Delete a thread via `POST /threads/{id}/delete`.
///
/// # Errors
///
/// Returns an error if the request fails, the body is not JSON, or the
/// server answers non-2xx.
pub async fn delete_thread(endpoint: &str) -> Result<Option<ThreadId>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        delete_thread_result(resp.ok(), resp.status(), &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

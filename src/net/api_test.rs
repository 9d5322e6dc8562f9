use super::*;
use crate::config::Endpoints;

// =============================================================
// new_chat_result
// =============================================================

#[test]
fn new_chat_ok_ignores_body() {
    assert_eq!(new_chat_result(true, 200, "not json"), Ok(()));
}

#[test]
fn new_chat_failure_carries_server_message() {
    let err = new_chat_result(false, 500, r#"{"message":"Failed to start a new chat due to a server error."}"#)
        .expect_err("should fail");
    assert_eq!(
        err,
        ApiError::Status { status: 500, message: Some("Failed to start a new chat due to a server error.".to_owned()) }
    );
    assert_eq!(
        new_chat_alert(&err),
        "Failed to start new chat: Failed to start a new chat due to a server error."
    );
}

#[test]
fn new_chat_failure_with_html_body_is_decode_error() {
    let err = new_chat_result(false, 502, "<html>").expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(new_chat_alert(&err), "A server error occurred while trying to start a new chat.");
}

// =============================================================
// delete_thread_result
// =============================================================

#[test]
fn delete_last_thread_navigates_to_unscoped_main_view() {
    let next = delete_thread_result(true, 200, r#"{"message":"Thread deleted.","next_thread_id":null}"#)
        .expect("delete ok");
    assert!(next.is_none());
    assert_eq!(Endpoints::default().thread_view(next.as_ref()), "/main_activity");
}

#[test]
fn delete_thread_navigates_to_next_thread() {
    let next = delete_thread_result(true, 200, r#"{"message":"Thread deleted.","next_thread_id":12}"#)
        .expect("delete ok");
    assert_eq!(Endpoints::default().thread_view(next.as_ref()), "/main_activity?thread_id=12");
}

#[test]
fn delete_thread_not_found_alerts_server_message() {
    let err = delete_thread_result(false, 404, r#"{"message":"Thread not found."}"#).expect_err("should fail");
    assert_eq!(delete_thread_alert(&err), "Thread not found.");
}

#[test]
fn delete_thread_failure_without_message_uses_fallback() {
    let err = delete_thread_result(false, 500, "{}").expect_err("should fail");
    assert_eq!(delete_thread_alert(&err), "Failed to delete thread.");
}

#[test]
fn delete_thread_non_json_body_is_server_error() {
    let err = delete_thread_result(true, 200, "").expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(delete_thread_alert(&err), "Server error deleting thread.");
}

#[test]
fn network_errors_use_generic_alerts() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(delete_thread_alert(&err), "Server error deleting thread.");
    assert_eq!(new_chat_alert(&err), "A server error occurred while trying to start a new chat.");
}

// =============================================================
// Native stubs
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn send_chat_outside_browser_is_transport_failure() {
    let outcome = block_on_ready(send_chat("/chat", ChatPayload::default()));
    assert!(outcome.is_transport_failure());
}

/// Minimal executor for the stubbed futures, which complete on first poll.
#[cfg(not(feature = "csr"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}

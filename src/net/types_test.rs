use super::*;

// =============================================================
// ThreadId
// =============================================================

#[test]
fn thread_id_accepts_number() {
    let id: ThreadId = serde_json::from_str("17").expect("numeric id");
    assert_eq!(id.as_str(), "17");
}

#[test]
fn thread_id_accepts_string() {
    let id: ThreadId = serde_json::from_str(r#""t-abc""#).expect("string id");
    assert_eq!(id, ThreadId::from("t-abc"));
    assert_eq!(id.to_string(), "t-abc");
}

#[test]
fn thread_id_rejects_blank_and_other_shapes() {
    assert!(serde_json::from_str::<ThreadId>(r#""  ""#).is_err());
    assert!(serde_json::from_str::<ThreadId>("true").is_err());
    assert!(serde_json::from_str::<ThreadId>("[1]").is_err());
}

// =============================================================
// ChatReply
// =============================================================

#[test]
fn chat_reply_parses_known_roles() {
    let reply: ChatReply = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).expect("reply");
    assert_eq!(reply.role, ReplyRole::Assistant);
    assert_eq!(reply.content.as_deref(), Some("hi"));

    let reply: ChatReply = serde_json::from_str(r#"{"role":"error_internal","content":"x"}"#).expect("reply");
    assert_eq!(reply.role, ReplyRole::ErrorInternal);
}

#[test]
fn chat_reply_unknown_or_missing_role_is_unknown() {
    let reply: ChatReply = serde_json::from_str(r#"{"role":"model","content":"a"}"#).expect("reply");
    assert_eq!(reply.role, ReplyRole::Unknown);

    let reply: ChatReply = serde_json::from_str(r#"{"content":"a"}"#).expect("reply");
    assert_eq!(reply.role, ReplyRole::Unknown);
}

#[test]
fn chat_reply_null_content_is_none() {
    let reply: ChatReply = serde_json::from_str(r#"{"role":"ai","content":null}"#).expect("reply");
    assert!(reply.content.is_none());
}

#[test]
fn only_error_and_internal_error_roles_are_errors() {
    assert!(ReplyRole::Error.is_error());
    assert!(ReplyRole::ErrorInternal.is_error());
    assert!(!ReplyRole::ErrorClient.is_error());
    assert!(!ReplyRole::Ai.is_error());
    assert!(!ReplyRole::Unknown.is_error());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_prefers_content_then_message() {
    let body = ErrorBody { content: Some("c".to_owned()), message: Some("m".to_owned()) };
    assert_eq!(body.detail(), Some("c"));

    let body = ErrorBody { content: Some(String::new()), message: Some("m".to_owned()) };
    assert_eq!(body.detail(), Some("m"));

    assert_eq!(ErrorBody::default().detail(), None);
}

// =============================================================
// DeleteThreadReply / bootstrap pieces
// =============================================================

#[test]
fn delete_reply_with_and_without_next_thread() {
    let reply: DeleteThreadReply =
        serde_json::from_str(r#"{"message":"Thread deleted.","next_thread_id":3}"#).expect("reply");
    assert_eq!(reply.next_thread_id, Some(ThreadId::from("3")));

    let reply: DeleteThreadReply =
        serde_json::from_str(r#"{"message":"Thread deleted.","next_thread_id":null}"#).expect("reply");
    assert!(reply.next_thread_id.is_none());
}

#[test]
fn history_message_accepts_text_content_alias() {
    let msg: HistoryMessage =
        serde_json::from_str(r#"{"role":"user","text_content":"hello","image_url":"/static/uploads/a.png"}"#)
            .expect("history");
    assert_eq!(msg.content.as_deref(), Some("hello"));
    assert_eq!(msg.image_url.as_deref(), Some("/static/uploads/a.png"));
}

#[test]
fn flash_defaults_category() {
    let flash: Flash = serde_json::from_str(r#"{"message":"Logged out"}"#).expect("flash");
    assert_eq!(flash.category, "info");
}

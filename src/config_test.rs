use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_uses_backend_routes() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.endpoints.chat, "/chat");
    assert_eq!(cfg.endpoints.new_chat, "/new_chat");
    assert_eq!(cfg.endpoints.main_view, "/main_activity");
}

#[test]
fn default_config_timings_and_heights() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.scroll_settle_ms, 100);
    assert_eq!(cfg.copy_confirm_ms, 2000);
    assert_eq!(cfg.max_input_height, 200);
    assert_eq!(cfg.max_input_height_with_attachment, 100);
    assert_eq!(cfg.max_upload_bytes, 5 * 1024 * 1024);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let cfg: UiConfig = serde_json::from_str(r#"{ "copy_confirm_ms": 500, "endpoints": { "chat": "/api/chat" } }"#)
        .expect("config json");
    assert_eq!(cfg.copy_confirm_ms, 500);
    assert_eq!(cfg.endpoints.chat, "/api/chat");
    assert_eq!(cfg.endpoints.new_chat, "/new_chat");
    assert_eq!(cfg.scroll_settle_ms, DEFAULT_SCROLL_SETTLE_MS);
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn delete_thread_endpoint_formats_path() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.delete_thread(&ThreadId::from("42")), "/threads/42/delete");
}

#[test]
fn delete_thread_endpoint_tolerates_trailing_slash() {
    let endpoints = Endpoints { threads: "/threads/".to_owned(), ..Endpoints::default() };
    assert_eq!(endpoints.delete_thread(&ThreadId::from("7")), "/threads/7/delete");
}

#[test]
fn thread_view_scoped_and_unscoped() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.thread_view(Some(&ThreadId::from("9"))), "/main_activity?thread_id=9");
    assert_eq!(endpoints.thread_view(None), "/main_activity");
}

#[test]
fn thread_ids_are_percent_encoded() {
    let endpoints = Endpoints::default();
    let id = ThreadId::from("a&b/c#d?");
    assert_eq!(endpoints.delete_thread(&id), "/threads/a%26b%2Fc%23d%3F/delete");
    assert_eq!(endpoints.thread_view(Some(&id)), "/main_activity?thread_id=a%26b%2Fc%23d%3F");
}

// =============================================================
// Upload whitelist
// =============================================================

#[test]
fn accepts_known_image_extensions_case_insensitively() {
    let cfg = UiConfig::default();
    assert!(cfg.accepts_extension("scan.PNG"));
    assert!(cfg.accepts_extension("photo.jpeg"));
    assert!(cfg.accepts_extension("archive.tar.webp"));
}

#[test]
fn rejects_unknown_or_missing_extensions() {
    let cfg = UiConfig::default();
    assert!(!cfg.accepts_extension("notes.pdf"));
    assert!(!cfg.accepts_extension("README"));
}

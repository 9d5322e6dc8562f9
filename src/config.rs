//! UI configuration delivered with the page bootstrap.
//!
//! Every field has a default so a page that ships no `config` object (or a
//! partial one) still gets working endpoints and timings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::net::types::ThreadId;

pub const DEFAULT_SCROLL_SETTLE_MS: u32 = 100;
pub const DEFAULT_COPY_CONFIRM_MS: u32 = 2000;
pub const DEFAULT_MAX_INPUT_HEIGHT: u32 = 200;
pub const DEFAULT_MAX_INPUT_HEIGHT_WITH_ATTACHMENT: u32 = 100;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Extensions the backend accepts for uploaded images.
pub const DEFAULT_UPLOAD_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp", "svg", "ico", "heic", "heif", "raw", "cr2", "nef",
    "arw", "dng", "orf", "rw2", "pef",
];

/// Backend routes the UI talks to or navigates to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub chat: String,
    pub new_chat: String,
    pub threads: String,
    pub main_view: String,
    pub login: String,
    pub signup: String,
    pub logout: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat: "/chat".to_owned(),
            new_chat: "/new_chat".to_owned(),
            threads: "/threads".to_owned(),
            main_view: "/main_activity".to_owned(),
            login: "/login".to_owned(),
            signup: "/signup".to_owned(),
            logout: "/logout".to_owned(),
        }
    }
}

impl Endpoints {
    /// `POST` target that deletes `thread`.
    pub fn delete_thread(&self, thread: &ThreadId) -> String {
        format!("{}/{}/delete", self.threads.trim_end_matches('/'), urlencoding::encode(thread.as_str()))
    }

    /// Main view scoped to `thread`, or the unscoped main view when `None`.
    pub fn thread_view(&self, thread: Option<&ThreadId>) -> String {
        match thread {
            Some(id) => format!("{}?thread_id={}", self.main_view, urlencoding::encode(id.as_str())),
            None => self.main_view.clone(),
        }
    }
}

/// Tunables for the chat UI.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub endpoints: Endpoints,
    pub scroll_settle_ms: u32,
    pub copy_confirm_ms: u32,
    pub max_input_height: u32,
    pub max_input_height_with_attachment: u32,
    pub max_upload_bytes: u64,
    pub upload_extensions: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            scroll_settle_ms: DEFAULT_SCROLL_SETTLE_MS,
            copy_confirm_ms: DEFAULT_COPY_CONFIRM_MS,
            max_input_height: DEFAULT_MAX_INPUT_HEIGHT,
            max_input_height_with_attachment: DEFAULT_MAX_INPUT_HEIGHT_WITH_ATTACHMENT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            upload_extensions: DEFAULT_UPLOAD_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect(),
        }
    }
}

impl UiConfig {
    /// Whether `file_name` carries an extension from the upload whitelist.
    pub fn accepts_extension(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.upload_extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext))
    }
}

//! Wire DTOs for the chat backend's JSON responses and page bootstrap.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes (numeric or string thread ids, `null`
//! content, unknown roles), so these types accept every variant it has been
//! seen to emit and normalize at the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Opaque server-owned thread identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThreadId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ThreadId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ThreadId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) if !s.trim().is_empty() => Ok(Self(s)),
            serde_json::Value::Number(number) => Ok(Self(number.to_string())),
            _ => Err(D::Error::custom("expected non-empty string or number thread id")),
        }
    }
}

/// Role tag on a `/chat` reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyRole {
    Ai,
    Assistant,
    Error,
    ErrorInternal,
    /// The backend's own input validation turned the request away (bad
    /// upload type or size, nothing submitted). The content is already a
    /// user-facing sentence, so it renders as a plain reply.
    ErrorClient,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ReplyRole {
    /// Roles rendered as an "AI Response Error" notice.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::ErrorInternal)
    }
}

/// Success body of `POST /chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub role: ReplyRole,
    #[serde(default)]
    pub content: Option<String>,
}

/// Error body shape shared by all endpoints; either field may carry the detail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First non-empty of `content`, then `message`.
    pub fn detail(&self) -> Option<&str> {
        [self.content.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

/// Success body of `POST /threads/{id}/delete`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteThreadReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub next_thread_id: Option<ThreadId>,
}

/// Sidebar entry for one of the user's threads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ThreadSummary {
    pub id: ThreadId,
    #[serde(default)]
    pub title: String,
}

/// A persisted message as delivered in the page bootstrap (raw text only).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    #[serde(default, alias = "text_content")]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Server flash message (`category` is e.g. `success`, `warning`, `danger`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Flash {
    #[serde(default = "default_flash_category")]
    pub category: String,
    pub message: String,
}

fn default_flash_category() -> String {
    "info".to_owned()
}

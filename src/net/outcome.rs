//! Classification of a `/chat` round trip into the text shown in the
//! conversation.
//!
//! Every terminal branch of a chat request ends as exactly one AI-side
//! message; this module decides which one. The texts are Markdown and go
//! through the same rendering path as model replies.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::types::{ChatReply, ErrorBody, ReplyRole};

pub const EMPTY_REPLY_NOTICE: &str = "I received an empty response. Please try again.";
pub const NETWORK_ERROR_NOTICE: &str =
    "**Network Error:** Could not connect to the server. Please check your network connection or server status.";
const NO_DETAILS: &str = "No further details available.";

/// How a chat request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    /// 2xx with a JSON body.
    Reply(ChatReply),
    /// Non-2xx. `detail` is `Err(())` when the body was not JSON.
    HttpFailure { status: u16, status_text: String, detail: Result<Option<String>, ()> },
    /// No usable response reached the client.
    Transport(String),
}

impl ChatOutcome {
    /// Classify a received response from its status line and raw body.
    ///
    /// A 2xx body that is not valid JSON is treated like a transport failure.
    pub fn from_response(ok: bool, status: u16, status_text: &str, body: &str) -> Self {
        if ok {
            return match serde_json::from_str::<ChatReply>(body) {
                Ok(reply) => Self::Reply(reply),
                Err(e) => Self::Transport(format!("malformed reply body: {e}")),
            };
        }

        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|err| err.detail().map(str::to_owned))
            .map_err(|_| ());
        Self::HttpFailure { status, status_text: status_text.to_owned(), detail }
    }

    /// Markdown text of the AI-side message for this outcome.
    pub fn message_text(&self) -> String {
        match self {
            Self::Reply(reply) => {
                let content = reply.content.as_deref().unwrap_or_default();
                if reply.role.is_error() {
                    format!("**AI Response Error:**\n\n{content}")
                } else if content.is_empty() {
                    EMPTY_REPLY_NOTICE.to_owned()
                } else {
                    content.to_owned()
                }
            }
            Self::HttpFailure { status, status_text, detail } => {
                let mut message = format!("Server responded with status {status} ({status_text}).");
                match detail {
                    Ok(detail) => {
                        let detail = detail.as_deref().unwrap_or(NO_DETAILS);
                        message.push_str(&format!("\nDetails: `{detail}`"));
                    }
                    Err(()) => message.push_str("\nCould not parse server error details."),
                }
                format!("**Request Failed:**\n\n{message}")
            }
            Self::Transport(_) => NETWORK_ERROR_NOTICE.to_owned(),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The backend rejected the submission itself, whatever the status code.
    pub fn is_client_rejection(&self) -> bool {
        match self {
            Self::Reply(reply) => reply.role == ReplyRole::ErrorClient,
            Self::HttpFailure { .. } | Self::Transport(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::types::HistoryMessage;

/// Who a message came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

impl Role {
    /// Map a persisted history role; anything that is not the user is the AI.
    pub fn from_history(role: &str) -> Self {
        if role.eq_ignore_ascii_case("user") { Self::User } else { Self::Ai }
    }
}

/// A rendered chat message. Text is kept raw (pre-Markdown).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub text: Option<String>,
    pub image_url: Option<String>,
}

/// One child of the history container, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryEntry {
    Message(Message),
    TypingPlaceholder,
}

impl HistoryEntry {
    /// Stable render key; the placeholder always keys as `0`.
    pub fn key(&self) -> u64 {
        match self {
            Self::Message(m) => m.id,
            Self::TypingPlaceholder => 0,
        }
    }
}

/// Conversation history plus the singleton typing placeholder.
///
/// The placeholder is always present in `entries` exactly once; it is only
/// shown while `typing_visible` is set, and while shown it is the last entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationState {
    entries: Vec<HistoryEntry>,
    typing_visible: bool,
    next_id: u64,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self { entries: vec![HistoryEntry::TypingPlaceholder], typing_visible: false, next_id: 1 }
    }
}

impl ConversationState {
    /// Seed from persisted history, which is replayed in order.
    pub fn from_history(history: &[HistoryMessage]) -> Self {
        let mut state = Self::default();
        for msg in history {
            state.append_message(Role::from_history(&msg.role), msg.content.clone(), msg.image_url.clone());
        }
        state
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|e| match e {
            HistoryEntry::Message(m) => Some(m),
            HistoryEntry::TypingPlaceholder => None,
        })
    }

    pub fn message_count(&self) -> usize {
        self.messages().count()
    }

    pub fn typing_visible(&self) -> bool {
        self.typing_visible
    }

    fn placeholder_index(&self) -> usize {
        self.entries
            .iter()
            .position(|e| matches!(e, HistoryEntry::TypingPlaceholder))
            .unwrap_or(self.entries.len())
    }

    /// Add a message, keeping a visible placeholder last. An AI message hides
    /// the placeholder once inserted. Returns the new message id.
    pub fn append_message(&mut self, role: Role, text: Option<String>, image_url: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let entry = HistoryEntry::Message(Message { id, role, text, image_url });

        if self.typing_visible {
            let at = self.placeholder_index();
            self.entries.insert(at, entry);
            if role == Role::Ai {
                self.typing_visible = false;
            }
        } else {
            self.entries.push(entry);
        }
        id
    }

    /// Show the placeholder, moving it to the end of the history.
    pub fn show_typing(&mut self) {
        let at = self.placeholder_index();
        if at < self.entries.len() {
            self.entries.remove(at);
        }
        self.entries.push(HistoryEntry::TypingPlaceholder);
        self.typing_visible = true;
    }

    /// Hide the placeholder. Hiding a hidden placeholder does nothing.
    pub fn hide_typing(&mut self) {
        self.typing_visible = false;
    }

    /// Whether the visible-placeholder-is-last invariant holds.
    #[cfg(test)]
    pub(crate) fn placeholder_is_last_when_visible(&self) -> bool {
        !self.typing_visible || matches!(self.entries.last(), Some(HistoryEntry::TypingPlaceholder))
    }
}

/// Letter shown in the user's avatar: first character of the username,
/// upper-cased, or `Y` when there is no username.
pub fn user_avatar_initial(username: Option<&str>) -> String {
    username
        .and_then(|name| name.trim().chars().next())
        .map_or_else(|| "Y".to_owned(), |c| c.to_uppercase().collect())
}

/// Text of the user bubble for a submission.
pub fn user_message_text(query: Option<&str>, attachment_name: Option<&str>) -> Option<String> {
    match (query, attachment_name) {
        (Some(q), _) if !q.is_empty() => Some(q.to_owned()),
        (_, Some(name)) => Some(format!("*Uploaded image: {name}*")),
        _ => None,
    }
}

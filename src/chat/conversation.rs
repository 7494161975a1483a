use chrono::{DateTime, Local};

use super::message::{ConversationId, Message, Sender};

pub const DEFAULT_TITLE: &str = "Nouvelle conversation";
pub const EMPTY_PREVIEW: &str = "Aucun message";
pub const TITLE_ELLIPSIS: &str = "...";

/// A linear log of messages. Title and preview are always computed from
/// `messages`, never stored next to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub created_at: DateTime<Local>,
    messages: Vec<Message>,
}

/// Row data for the history sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub title: String,
    pub last_message: String,
    pub timestamp: DateTime<Local>,
}

impl Conversation {
    pub fn new(id: ConversationId, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            created_at,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn title(&self, max_chars: usize) -> String {
        derive_title(&self.messages, max_chars).unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn preview(&self) -> String {
        self.messages
            .last()
            .map(|m| m.text.clone())
            .unwrap_or_else(|| EMPTY_PREVIEW.to_string())
    }

    pub fn last_timestamp(&self) -> DateTime<Local> {
        self.messages
            .last()
            .map(|m| m.timestamp)
            .unwrap_or(self.created_at)
    }

    pub fn summary(&self, title_max_chars: usize) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            title: self.title(title_max_chars),
            last_message: self.preview(),
            timestamp: self.last_timestamp(),
        }
    }
}

/// First user message cut to `max_chars` characters, always followed by the
/// ellipsis marker. `None` until the user has said something.
pub fn derive_title(messages: &[Message], max_chars: usize) -> Option<String> {
    messages
        .iter()
        .find(|m| m.sender == Sender::User)
        .map(|m| {
            let mut title: String = m.text.chars().take(max_chars).collect();
            title.push_str(TITLE_ELLIPSIS);
            title
        })
}

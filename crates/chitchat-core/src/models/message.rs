use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{ChatItem, ChatKind, Presence, Rgb};
use crate::constants::LAST_SEEN_HEADER_MAX_HOURS;
use crate::grouping::TimestampedItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub is_from_user: bool,
    /// Only set for incoming messages
    pub sender_name: Option<String>,
    pub sender_color: Rgb,
}

impl Message {
    pub fn outgoing(id: impl Into<String>, text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            timestamp,
            is_from_user: true,
            sender_name: None,
            sender_color: Rgb(0, 0, 255),
        }
    }

    pub fn incoming(
        id: impl Into<String>,
        text: impl Into<String>,
        timestamp: NaiveDateTime,
        sender_name: impl Into<String>,
        sender_color: Rgb,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            timestamp,
            is_from_user: false,
            sender_name: Some(sender_name.into()),
            sender_color,
        }
    }
}

impl TimestampedItem for Message {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Everything the conversation screen shows for one chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatDetail {
    pub id: String,
    pub name: String,
    pub kind: ChatKind,
    pub avatar_color: Rgb,
    pub messages: Vec<Message>,
    pub is_online: bool,
    pub last_seen: Option<NaiveDateTime>,
    pub is_typing: bool,
}

impl ChatDetail {
    pub fn from_chat(chat: &ChatItem, messages: Vec<Message>) -> Self {
        Self {
            id: chat.id.clone(),
            name: chat.name.clone(),
            kind: chat.kind,
            avatar_color: chat.avatar_color,
            messages,
            is_online: chat.is_online,
            last_seen: chat.last_seen,
            is_typing: chat.is_typing,
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == ChatKind::Group
    }

    /// Header presence. "Last seen" is only shown within the last day.
    pub fn presence(&self, now: NaiveDateTime) -> Presence {
        if self.is_group() {
            return Presence::Offline;
        }
        Presence::resolve(
            self.is_online,
            self.is_typing,
            self.last_seen,
            now,
            Some(LAST_SEEN_HEADER_MAX_HOURS),
        )
    }

    pub fn initial(&self) -> String {
        if self.is_group() {
            return "G".to_string();
        }
        super::chat::initial_of(&self.name)
    }

    /// Distinct senders in the conversation; the user's own messages count
    /// as one member.
    pub fn member_count(&self) -> usize {
        self.messages
            .iter()
            .map(|m| m.sender_name.as_deref())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Append a local outgoing message. Blank drafts are ignored.
    pub fn push_outgoing(&mut self, text: &str, now: NaiveDateTime) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let id = format!("local{}", self.messages.len() + 1);
        tracing::debug!(chat_id = %self.id, message_id = %id, "appending outgoing message");
        self.messages.push(Message::outgoing(id, text, now));
        true
    }
}

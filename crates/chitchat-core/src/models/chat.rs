use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Presence, Rgb};
use crate::format::format_date_for_chat;
use crate::grouping::TimestampedItem;

/// Where a conversation is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatKind {
    Individual,
    Group,
    Channel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStatus {
    /// One check
    Sent,
    /// Double check
    Delivered,
}

impl MessageStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            MessageStatus::Sent => "\u{2713}",
            MessageStatus::Delivered => "\u{2713}\u{2713}",
        }
    }
}

/// One row of the conversation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatItem {
    pub id: String,
    pub name: String,
    pub last_message: String,
    /// Time of the last message, app-local clock
    pub date_time: NaiveDateTime,
    pub kind: ChatKind,
    pub unread_count: u32,
    pub avatar_color: Rgb,
    pub is_favorite: bool,
    pub message_status: MessageStatus,
    pub is_online: bool,
    pub last_seen: Option<NaiveDateTime>,
    pub is_typing: bool,
}

impl ChatItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        last_message: impl Into<String>,
        date_time: NaiveDateTime,
        kind: ChatKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_message: last_message.into(),
            date_time,
            kind,
            unread_count: 0,
            avatar_color: Rgb(0, 0, 255),
            is_favorite: false,
            message_status: MessageStatus::Delivered,
            is_online: false,
            last_seen: None,
            is_typing: false,
        }
    }

    pub fn with_unread(mut self, count: u32) -> Self {
        self.unread_count = count;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.avatar_color = color;
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.message_status = status;
        self
    }

    pub fn online(mut self, typing: bool) -> Self {
        self.is_online = true;
        self.is_typing = typing;
        self
    }

    pub fn last_seen_at(mut self, when: NaiveDateTime) -> Self {
        self.last_seen = Some(when);
        self
    }

    pub fn is_group(&self) -> bool {
        self.kind == ChatKind::Group
    }

    pub fn is_channel(&self) -> bool {
        self.kind == ChatKind::Channel
    }

    /// Short time/date label shown in the top-right of a card
    pub fn time_label(&self, now: NaiveDateTime) -> String {
        format_date_for_chat(self.date_time, now)
    }

    /// Presence as shown on a list card. Groups never carry presence.
    pub fn presence(&self, now: NaiveDateTime) -> Presence {
        if self.is_group() {
            return Presence::Offline;
        }
        Presence::resolve(self.is_online, self.is_typing, self.last_seen, now, None)
    }

    pub fn initial(&self) -> String {
        if self.is_group() {
            return "G".to_string();
        }
        initial_of(&self.name)
    }
}

impl TimestampedItem for ChatItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.date_time
    }
}

pub(crate) fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_group_initial_is_g() {
        let now = at(2024, 6, 15, 12, 0);
        let chat = ChatItem::new("2", "Family Group", "hi", now, ChatKind::Group);
        assert_eq!(chat.initial(), "G");
        assert!(chat.is_group());
    }

    #[test]
    fn test_initial_uppercases_first_char() {
        let now = at(2024, 6, 15, 12, 0);
        let chat = ChatItem::new("1", "john", "hi", now, ChatKind::Individual);
        assert_eq!(chat.initial(), "J");
        let empty = ChatItem::new("1", "", "hi", now, ChatKind::Individual);
        assert_eq!(empty.initial(), "?");
    }

    #[test]
    fn test_group_has_no_presence() {
        let now = at(2024, 6, 15, 12, 0);
        let chat = ChatItem::new("2", "Team", "hi", now, ChatKind::Group).online(true);
        assert_eq!(chat.presence(now), Presence::Offline);
    }

    #[test]
    fn test_channel_is_not_group() {
        let now = at(2024, 6, 15, 12, 0);
        let chat = ChatItem::new("12", "Support", "hi", now, ChatKind::Channel);
        assert!(chat.is_channel());
        assert!(!chat.is_group());
    }
}

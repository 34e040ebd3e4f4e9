//! Sample conversations for the mock client.
//!
//! All timestamps are relative to the injected `now` so the list exercises
//! every date bucket. Presence values are fixed.

use chrono::{Duration, Months, NaiveDateTime};

use crate::models::{ChatDetail, ChatItem, ChatKind, Message, MessageStatus, OnlineUser, Rgb};

const BLUE: Rgb = Rgb(0, 0, 255);
const GREEN: Rgb = Rgb(0, 255, 0);
const RED: Rgb = Rgb(255, 0, 0);
const CYAN: Rgb = Rgb(0, 255, 255);
const PINK: Rgb = Rgb::from_hex(0xE91E63);
const DAD_BLUE: Rgb = Rgb::from_hex(0x2196F3);

fn months_ago(now: NaiveDateTime, months: u32) -> NaiveDateTime {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}

pub fn online_users() -> Vec<OnlineUser> {
    vec![
        OnlineUser::new("u1", "Alice", Rgb::from_hex(0x9C27B0)),
        OnlineUser::new("u2", "Bob", Rgb::from_hex(0x2196F3)),
        OnlineUser::new("u3", "Charlie", Rgb::from_hex(0x4CAF50)),
        OnlineUser::new("u4", "Diana", Rgb::from_hex(0xFF9800)),
        OnlineUser::new("u5", "Eve", Rgb::from_hex(0xF44336)),
        OnlineUser::new("u6", "Frank", Rgb::from_hex(0x795548)),
        OnlineUser::new("u7", "Grace", Rgb::from_hex(0x607D8B)),
    ]
}

pub fn sample_chats(now: NaiveDateTime) -> Vec<ChatItem> {
    use ChatKind::{Channel, Group, Individual};
    use MessageStatus::Sent;

    vec![
        ChatItem::new("1", "John Doe", "Hey, how are you?", now - Duration::hours(2), Individual)
            .with_unread(2)
            .with_color(BLUE)
            .favorite()
            .online(true),
        ChatItem::new("2", "Family Group", "Mom: Dinner at 7 PM", now - Duration::hours(3), Group)
            .with_unread(5)
            .with_color(GREEN)
            .favorite()
            .with_status(Sent),
        ChatItem::new("3", "Sarah Wilson", "Thanks for the help!", now - Duration::hours(5), Individual)
            .with_color(Rgb::from_hex(0x9C27B0))
            .last_seen_at(now - Duration::minutes(41)),
        ChatItem::new(
            "4",
            "Work Team",
            "Meeting tomorrow at 10 AM",
            now - Duration::days(1) - Duration::hours(2),
            Group,
        )
        .with_unread(1)
        .with_color(Rgb::from_hex(0xFF9800))
        .favorite(),
        ChatItem::new(
            "5",
            "Mike Johnson",
            "Sure, see you then",
            now - Duration::days(1) - Duration::hours(5),
            Individual,
        )
        .with_color(RED)
        .with_status(Sent)
        .last_seen_at(now - Duration::hours(4)),
        ChatItem::new("6", "College Friends", "Anyone up for movies?", now - Duration::days(2), Group)
            .with_unread(3)
            .with_color(Rgb::from_hex(0x009688)),
        ChatItem::new("7", "Alice Brown", "Happy birthday! 🎉", now - Duration::days(8), Individual)
            .with_unread(1)
            .with_color(PINK)
            .online(false),
        ChatItem::new("8", "Gaming Squad", "New game tonight?", now - Duration::days(10), Group)
            .with_unread(7)
            .with_color(CYAN)
            .with_status(Sent),
        ChatItem::new("9", "Mom", "Don't forget to call", now - Duration::days(15), Individual)
            .with_color(Rgb::from_hex(0x8BC34A))
            .favorite()
            .last_seen_at(now - Duration::days(3)),
        ChatItem::new(
            "10",
            "Project Team",
            "Final presentation ready",
            months_ago(now, 1) - Duration::days(5),
            Group,
        )
        .with_color(Rgb::from_hex(0x3F51B5)),
        ChatItem::new(
            "11",
            "Old Friend",
            "Long time no see!",
            months_ago(now, 14),
            Individual,
        )
        .with_color(Rgb::from_hex(0x795548))
        .with_status(Sent),
        ChatItem::new(
            "12",
            "Support Channel",
            "Update available",
            months_ago(now, 18),
            Channel,
        )
        .with_color(Rgb::from_hex(0x607D8B)),
    ]
}

/// Messages for one conversation.
pub fn chat_detail(chat: &ChatItem, now: NaiveDateTime) -> ChatDetail {
    let h = Duration::hours;
    let m = Duration::minutes;
    let them = |id: &str, text: &str, at: NaiveDateTime| {
        Message::incoming(id, text, at, chat.name.as_str(), chat.avatar_color)
    };

    let messages = match chat.id.as_str() {
        "1" => vec![
            them("m1", "Hey, how are you?", now - h(3)),
            Message::outgoing("m2", "I'm doing great! How about you?", now - h(2) - m(45)),
            them("m3", "Pretty good, just working on some projects", now - h(2) - m(30)),
            Message::outgoing("m4", "That sounds interesting! What kind of projects?", now - h(2) - m(15)),
            them("m5", "Mostly terminal apps. I'm learning ratatui", now - h(2)),
            Message::outgoing("m6", "Oh nice! I've heard good things about it. How's it going?", now - h(1) - m(45)),
            them("m7", "It's going well! Immediate-mode rendering is really refreshing", now - h(1) - m(30)),
            Message::outgoing("m8", "That's great to hear! If you need any help, feel free to ask", now - h(1) - m(15)),
            them("m9", "Thanks! I might take you up on that 😊", now - h(1)),
            Message::outgoing("m10", "Sure, just let me know when you're free", now - m(45)),
            them("m11", "Will do! By the way, are you free for lunch tomorrow?", now - m(30)),
            Message::outgoing("m12", "Yeah, that sounds good! What time?", now - m(15)),
            them("m13", "How about 12:30 PM?", now),
        ],
        "2" => vec![
            Message::incoming("g1", "Don't forget about dinner tonight!", now - h(4), "Mom", PINK),
            Message::incoming("g2", "What time again?", now - h(3) - m(45), "Dad", DAD_BLUE),
            Message::incoming("g3", "7 PM, as usual 😊", now - h(3) - m(30), "Mom", PINK),
            Message::outgoing("g4", "I'll be there!", now - h(3) - m(15)),
            Message::incoming("g5", "Perfect! See you all then", now - h(3), "Mom", PINK),
        ],
        _ => vec![
            them("default1", "Hello!", now - h(1)),
            Message::outgoing("default2", "Hi there!", now - m(30)),
            them("default3", &chat.last_message, now - m(15)),
        ],
    };

    ChatDetail::from_chat(chat, messages)
}

/// Detail for a chat id; unknown ids fall back to the first sample chat.
pub fn chat_detail_by_id(id: &str, now: NaiveDateTime) -> Option<ChatDetail> {
    let chats = sample_chats(now);
    let chat = chats.iter().find(|c| c.id == id).or_else(|| chats.first())?;
    Some(chat_detail(chat, now))
}

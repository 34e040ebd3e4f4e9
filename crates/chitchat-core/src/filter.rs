use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::ChatItem;

/// Filter chip shown above the conversation list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChatFilter {
    All,
    Unread,
    Group,
    Chat,
}

impl ChatFilter {
    /// Chips in display order
    pub const ALL_FILTERS: [ChatFilter; 4] = [Self::All, Self::Unread, Self::Group, Self::Chat];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Group => "Group",
            Self::Chat => "Chat",
        }
    }

    pub fn matches(&self, chat: &ChatItem) -> bool {
        match self {
            Self::All => true,
            Self::Unread => chat.unread_count > 0,
            Self::Group => chat.is_group(),
            Self::Chat => !chat.is_group(),
        }
    }

    /// Group and Chat are mutually exclusive
    fn opposite(&self) -> Option<Self> {
        match self {
            Self::Group => Some(Self::Chat),
            Self::Chat => Some(Self::Group),
            _ => None,
        }
    }
}

/// Set of active filter chips. Never empty: falls back to `All`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    active: BTreeSet<ChatFilter>,
}

impl FilterSelection {
    pub fn contains(&self, filter: ChatFilter) -> bool {
        self.active.contains(&filter)
    }

    pub fn active(&self) -> impl Iterator<Item = ChatFilter> + '_ {
        self.active.iter().copied()
    }

    fn only(filter: ChatFilter) -> BTreeSet<ChatFilter> {
        BTreeSet::from([filter])
    }

    /// Apply a chip tap.
    pub fn toggle(&mut self, filter: ChatFilter) {
        let mut next = self.active.clone();

        self.active = if filter == ChatFilter::All {
            Self::only(ChatFilter::All)
        } else if let Some(opposite) = filter.opposite().filter(|o| next.contains(o)) {
            next.remove(&opposite);
            next.insert(filter);
            if next.contains(&ChatFilter::All) {
                Self::only(filter)
            } else {
                next
            }
        } else if next.contains(&filter) {
            next.remove(&filter);
            if next.is_empty() {
                Self::only(ChatFilter::All)
            } else {
                next
            }
        } else {
            next.remove(&ChatFilter::All);
            next.insert(filter);
            next
        };

        tracing::debug!(filter = filter.label(), active = ?self.active, "toggled chat filter");
    }

    /// A chat passes when any active filter matches it.
    pub fn matches(&self, chat: &ChatItem) -> bool {
        self.active.iter().any(|f| f.matches(chat))
    }

    /// Keep matching chats, preserving order.
    pub fn apply<'a, I>(&self, chats: I) -> Vec<ChatItem>
    where
        I: IntoIterator<Item = &'a ChatItem>,
    {
        chats
            .into_iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            active: Self::only(ChatFilter::All),
        }
    }
}

//! View model for the conversation list screen.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::config::ListGeometryConfig;
use crate::constants::FAVORITES_SECTION_TITLE;
use crate::filter::FilterSelection;
use crate::geometry::ChatListStateManager;
use crate::grouping::{classify, DateBucket};
use crate::models::ChatItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Favorites,
    Date(DateBucket),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: SectionKey,
    pub title: &'static str,
    pub chats: Vec<ChatItem>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}

/// Filtered conversation list split into display sections:
/// favorites first (input order), then date buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatListSections {
    pub sections: Vec<Section>,
}

impl ChatListSections {
    pub fn build(chats: &[ChatItem], filters: &FilterSelection, now: NaiveDateTime) -> Self {
        let (favorites, regular): (Vec<ChatItem>, Vec<ChatItem>) = filters
            .apply(chats)
            .into_iter()
            .partition(|c| c.is_favorite);

        let mut sections = Vec::new();
        if !favorites.is_empty() {
            sections.push(Section {
                key: SectionKey::Favorites,
                title: FAVORITES_SECTION_TITLE,
                chats: favorites,
            });
        }
        sections.extend(classify(regular, now).into_iter().map(|group| Section {
            key: SectionKey::Date(group.bucket),
            title: group.label(),
            chats: group.items,
        }));

        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn total_chats(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn section(&self, key: SectionKey) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Flat (section, index) addressing of every card, top to bottom
    pub fn positions(&self) -> Vec<(SectionKey, usize)> {
        self.sections
            .iter()
            .flat_map(|s| (0..s.len()).map(move |i| (s.key, i)))
            .collect()
    }

    pub fn chat_at(&self, key: SectionKey, index: usize) -> Option<&ChatItem> {
        self.section(key).and_then(|s| s.chats.get(index))
    }
}

/// One `ChatListStateManager` per visible section, rebuilt whenever the
/// section's item count changes.
#[derive(Debug, Default)]
pub struct ListStateRegistry {
    managers: HashMap<SectionKey, ChatListStateManager>,
}

impl ListStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager_for(
        &mut self,
        key: SectionKey,
        item_count: usize,
        config: &ListGeometryConfig,
    ) -> &mut ChatListStateManager {
        let stale = self
            .managers
            .get(&key)
            .is_some_and(|m| m.item_count() != item_count);
        if stale {
            tracing::debug!(?key, item_count, "section length changed, resetting card state");
            self.managers.remove(&key);
        }
        self.managers
            .entry(key)
            .or_insert_with(|| ChatListStateManager::new(item_count, config))
    }

    pub fn get(&self, key: SectionKey) -> Option<&ChatListStateManager> {
        self.managers.get(&key)
    }

    /// Drop managers whose sections are no longer shown
    pub fn retain(&mut self, keys: &[SectionKey]) {
        self.managers.retain(|k, _| keys.contains(k));
    }

    /// Keep at most one hovered card across all sections
    pub fn clear_hover_except(&mut self, key: Option<SectionKey>) {
        for (k, manager) in &mut self.managers {
            if Some(*k) != key {
                manager.clear_hover();
            }
        }
    }

    pub fn clear_pressed(&mut self) {
        for manager in self.managers.values_mut() {
            manager.clear_pressed();
        }
    }

    /// Selection is exclusive across sections as well
    pub fn clear_selection_except(&mut self, key: SectionKey) {
        for (k, manager) in &mut self.managers {
            if *k != key {
                manager.clear_selection();
            }
        }
    }

    pub fn clear_selection(&mut self) {
        for manager in self.managers.values_mut() {
            manager.clear_selection();
        }
    }

    /// The card currently hovered anywhere in the list
    pub fn hovered(&self) -> Option<(SectionKey, usize)> {
        self.managers
            .iter()
            .find_map(|(k, m)| m.hovered_index().map(|i| (*k, i)))
    }

    /// The card currently held down anywhere in the list
    pub fn pressed(&self) -> Option<(SectionKey, usize)> {
        self.managers
            .iter()
            .find_map(|(k, m)| m.pressed_index().map(|i| (*k, i)))
    }

    pub fn selected(&self) -> Option<(SectionKey, usize)> {
        self.managers
            .iter()
            .find_map(|(k, m)| m.selected_index().map(|i| (*k, i)))
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

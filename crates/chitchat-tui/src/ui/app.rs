use chitchat_core::models::{ChatDetail, ChatItem, MessageStatus, OnlineUser};
use chitchat_core::sample;
use chitchat_core::{
    ChatFilter, ChatListSections, ChatListStateManager, CoreConfig, FilterSelection,
    ListStateRegistry, SectionKey,
};
use chrono::NaiveDateTime;
use ratatui::layout::Rect;
use std::collections::HashMap;

use crate::ui::card::CornerStyle;
use crate::ui::layout::contains;
use crate::ui::services::AnimationClock;
use crate::ui::views::chat_list::{list_rows, ListRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    ChatList,
    ChatDetail,
}

/// Screen rectangle of a rendered card, recorded for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHit {
    pub area: Rect,
    pub section: SectionKey,
    pub index: usize,
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C arms, second quits
    pub pending_quit: bool,
    pub view: View,
    pub config: CoreConfig,
    pub corner_style: CornerStyle,

    now: NaiveDateTime,
    chats: Vec<ChatItem>,
    pub online_users: Vec<OnlineUser>,
    pub filters: FilterSelection,
    sections: ChatListSections,
    pub list_state: ListStateRegistry,

    /// Rows scrolled off the top of the list body
    pub list_scroll: u16,
    /// Height of the list body at the last render
    pub list_viewport_height: u16,
    pub card_hits: Vec<CardHit>,
    pub chip_hits: Vec<(Rect, ChatFilter)>,

    /// Conversations opened so far, keyed by chat id
    details: HashMap<String, ChatDetail>,
    open_chat_id: Option<String>,
    pub draft: String,
    /// Lines scrolled up from the newest message
    pub detail_scroll: u16,

    animation: AnimationClock,
}

impl App {
    pub fn new(config: CoreConfig, now: NaiveDateTime) -> Self {
        let chats = sample::sample_chats(now);
        Self::with_chats(config, chats, now)
    }

    pub fn with_chats(config: CoreConfig, chats: Vec<ChatItem>, now: NaiveDateTime) -> Self {
        let corner_style = CornerStyle::from_config(&config.geometry);
        let animation = AnimationClock::new(config.tick_rate_ms);
        let mut app = Self {
            running: true,
            pending_quit: false,
            view: View::ChatList,
            config,
            corner_style,
            now,
            chats,
            online_users: sample::online_users(),
            filters: FilterSelection::default(),
            sections: ChatListSections::default(),
            list_state: ListStateRegistry::new(),
            list_scroll: 0,
            list_viewport_height: 0,
            card_hits: Vec::new(),
            chip_hits: Vec::new(),
            details: HashMap::new(),
            open_chat_id: None,
            draft: String::new(),
            detail_scroll: 0,
            animation,
        };
        app.refresh_sections();
        app
    }

    pub fn quit(&mut self) {
        tracing::info!("quitting");
        self.running = false;
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn chats(&self) -> &[ChatItem] {
        &self.chats
    }

    pub fn sections(&self) -> &ChatListSections {
        &self.sections
    }

    pub fn animation(&self) -> &AnimationClock {
        &self.animation
    }

    /// Advance the animation and the wall clock. Buckets are only rebuilt
    /// when the date rolls over.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.animation.tick();
        let day_changed = now.date() != self.now.date();
        self.now = now;
        if day_changed {
            tracing::debug!(%now, "date changed, rebuilding sections");
            self.refresh_sections();
        }
    }

    /// Rebuild sections from the chats and filters, keeping one state manager
    /// per visible section.
    pub fn refresh_sections(&mut self) {
        self.sections = ChatListSections::build(&self.chats, &self.filters, self.now);
        let geometry = self.config.geometry;
        for section in &self.sections.sections {
            self.list_state
                .manager_for(section.key, section.len(), &geometry);
        }
        let keys: Vec<SectionKey> = self.sections.sections.iter().map(|s| s.key).collect();
        self.list_state.retain(&keys);
    }

    /// State manager for a visible section
    pub fn manager(&self, key: SectionKey) -> Option<&ChatListStateManager> {
        self.list_state.get(key)
    }

    fn manager_mut(&mut self, key: SectionKey) -> Option<&mut ChatListStateManager> {
        let count = self.sections.section(key)?.len();
        Some(self.list_state.manager_for(key, count, &self.config.geometry))
    }

    pub fn toggle_filter(&mut self, filter: ChatFilter) {
        self.filters.toggle(filter);
        self.list_scroll = 0;
        self.refresh_sections();
    }

    // ===== Hover / press / select =====

    pub fn focused(&self) -> Option<(SectionKey, usize)> {
        self.list_state.hovered()
    }

    pub fn set_hover(&mut self, target: Option<(SectionKey, usize)>) {
        self.list_state.clear_hover_except(target.map(|(key, _)| key));
        if let Some((key, index)) = target {
            if let Some(manager) = self.manager_mut(key) {
                manager.set_hovered(index);
            }
        }
    }

    /// Move keyboard focus through every card, across section boundaries
    pub fn move_focus(&mut self, delta: isize) {
        let positions = self.sections.positions();
        if positions.is_empty() {
            return;
        }
        let last = positions.len() - 1;
        let next = match self
            .focused()
            .and_then(|f| positions.iter().position(|p| *p == f))
        {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None if delta < 0 => last,
            None => 0,
        };
        let target = positions[next];
        self.set_hover(Some(target));
        self.ensure_visible(target);
    }

    pub fn press(&mut self, key: SectionKey, index: usize) {
        self.list_state.clear_pressed();
        if let Some(manager) = self.manager_mut(key) {
            manager.set_pressed(index);
        }
    }

    /// Release the press; opens the card when released over the pressed one
    pub fn release(&mut self, target: Option<(SectionKey, usize)>) {
        let pressed = self.list_state.pressed();
        self.list_state.clear_pressed();
        if let Some((key, index)) = pressed.filter(|p| Some(*p) == target) {
            self.open_chat(key, index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.list_state.clear_selection();
    }

    // ===== Scrolling =====

    pub fn scroll_list(&mut self, delta: i32) {
        let content: u16 = list_rows(&self.sections)
            .last()
            .map(|row| row.offset + row.height)
            .unwrap_or(0);
        let max = content.saturating_sub(self.list_viewport_height);
        let next = (self.list_scroll as i32 + delta).clamp(0, max as i32);
        self.list_scroll = next as u16;
    }

    fn ensure_visible(&mut self, target: (SectionKey, usize)) {
        let rows = list_rows(&self.sections);
        let Some(pos) = rows
            .iter()
            .position(|r| r.row == ListRow::Card(target.0, target.1))
        else {
            return;
        };
        let card = rows[pos];
        // Keep a section title in view along with the first card under it
        let top = match pos.checked_sub(1).map(|p| rows[p]) {
            Some(prev) if matches!(prev.row, ListRow::Header(_)) => prev.offset,
            _ => card.offset,
        };
        let bottom = card.offset + card.height;
        let viewport = self.list_viewport_height;

        if top < self.list_scroll {
            self.list_scroll = top;
        } else if viewport > 0 && bottom > self.list_scroll + viewport {
            self.list_scroll = bottom.saturating_sub(viewport);
        }
    }

    // ===== Hit testing =====

    pub fn card_at(&self, column: u16, row: u16) -> Option<(SectionKey, usize)> {
        self.card_hits
            .iter()
            .find(|hit| contains(hit.area, column, row))
            .map(|hit| (hit.section, hit.index))
    }

    pub fn chip_at(&self, column: u16, row: u16) -> Option<ChatFilter> {
        self.chip_hits
            .iter()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, filter)| *filter)
    }

    // ===== Conversation screen =====

    pub fn open_focused(&mut self) {
        if let Some((key, index)) = self.focused() {
            self.open_chat(key, index);
        }
    }

    /// Select the card and navigate to its conversation
    pub fn open_chat(&mut self, key: SectionKey, index: usize) {
        let Some(chat) = self.sections.chat_at(key, index).cloned() else {
            return;
        };
        self.list_state.clear_selection_except(key);
        if let Some(manager) = self.manager_mut(key) {
            manager.select(index);
        }

        let now = self.now;
        self.details
            .entry(chat.id.clone())
            .or_insert_with(|| sample::chat_detail(&chat, now));
        tracing::info!(chat_id = %chat.id, name = %chat.name, "opening conversation");

        self.open_chat_id = Some(chat.id);
        self.draft.clear();
        self.detail_scroll = 0;
        self.view = View::ChatDetail;
    }

    pub fn close_detail(&mut self) {
        self.open_chat_id = None;
        self.draft.clear();
        self.view = View::ChatList;
    }

    pub fn open_detail(&self) -> Option<&ChatDetail> {
        self.open_chat_id
            .as_deref()
            .and_then(|id| self.details.get(id))
    }

    /// Send the draft to the open conversation. The list card picks up the
    /// new last message and moves to Today.
    pub fn send_draft(&mut self) {
        let Some(id) = self.open_chat_id.clone() else {
            return;
        };
        let now = self.now;
        let Some(detail) = self.details.get_mut(&id) else {
            return;
        };
        if !detail.push_outgoing(&self.draft, now) {
            return;
        }
        let sent = self.draft.trim().to_string();
        self.draft.clear();
        self.detail_scroll = 0;

        if let Some(chat) = self.chats.iter_mut().find(|c| c.id == id) {
            chat.last_message = sent;
            chat.date_time = now;
            chat.message_status = MessageStatus::Sent;
        }
        self.refresh_sections();
    }

    pub fn scroll_detail(&mut self, delta: i32) {
        let next = (self.detail_scroll as i32 + delta).max(0);
        self.detail_scroll = next.min(u16::MAX as i32) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitchat_core::DateBucket;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn app() -> App {
        let mut app = App::new(CoreConfig::default(), now());
        app.list_viewport_height = 20;
        app
    }

    #[test]
    fn test_starts_on_list_with_a_manager_per_section() {
        let app = app();
        assert_eq!(app.view, View::ChatList);
        assert_eq!(app.sections().sections[0].key, SectionKey::Favorites);
        assert_eq!(app.list_state.len(), app.sections().sections.len());
        for section in &app.sections().sections {
            assert_eq!(app.manager(section.key).map(|m| m.item_count()), Some(section.len()));
        }
    }

    #[test]
    fn test_focus_walks_across_sections() {
        let mut app = app();
        let favorites = app.sections().section(SectionKey::Favorites).map(|s| s.len());
        let favorites = favorites.unwrap_or(0);

        app.move_focus(1);
        assert_eq!(app.focused(), Some((SectionKey::Favorites, 0)));
        for _ in 0..favorites {
            app.move_focus(1);
        }
        assert_eq!(app.focused(), Some((SectionKey::Date(DateBucket::Today), 0)));
        assert_eq!(app.list_state.hovered(), app.focused(), "only one card hovered");

        app.move_focus(-100);
        assert_eq!(app.focused(), Some((SectionKey::Favorites, 0)));
    }

    #[test]
    fn test_focus_scrolls_the_list() {
        let mut app = app();
        app.list_viewport_height = 10;
        for _ in 0..8 {
            app.move_focus(1);
        }
        assert!(app.list_scroll > 0);
        app.move_focus(-100);
        assert_eq!(app.list_scroll, 0);
    }

    #[test]
    fn test_press_and_release_over_same_card_opens_it() {
        let mut app = app();
        let target = (SectionKey::Favorites, 1);
        app.press(target.0, target.1);
        assert!(app.manager(target.0).is_some_and(|m| m.is_pressed(1)));

        app.release(Some(target));
        assert_eq!(app.list_state.pressed(), None);
        assert_eq!(app.view, View::ChatDetail);
        assert_eq!(app.list_state.selected(), Some(target));
        assert_eq!(app.open_detail().map(|d| d.name.as_str()), Some("Family Group"));
    }

    #[test]
    fn test_release_elsewhere_only_clears_press() {
        let mut app = app();
        app.press(SectionKey::Favorites, 0);
        app.release(Some((SectionKey::Favorites, 1)));
        assert_eq!(app.view, View::ChatList);
        assert_eq!(app.list_state.pressed(), None);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_selection_is_exclusive_across_sections() {
        let mut app = app();
        app.open_chat(SectionKey::Favorites, 0);
        app.close_detail();
        app.open_chat(SectionKey::Date(DateBucket::Today), 0);
        assert_eq!(
            app.list_state.selected(),
            Some((SectionKey::Date(DateBucket::Today), 0))
        );
        assert!(app
            .manager(SectionKey::Favorites)
            .is_some_and(|m| m.selected_index().is_none()));
    }

    #[test]
    fn test_filter_change_resets_changed_sections() {
        let mut app = app();
        app.open_chat(SectionKey::Favorites, 0);
        app.close_detail();
        app.toggle_filter(ChatFilter::Unread);

        let favorites = app.sections().section(SectionKey::Favorites).map(|s| s.len());
        assert_eq!(favorites, Some(3), "John, Family and Work have unread messages");
        assert_eq!(app.list_state.selected(), None, "favorites shrank, state starts fresh");
        assert!(app.sections().section(SectionKey::Date(DateBucket::Today)).is_none());
        assert!(app.manager(SectionKey::Date(DateBucket::Today)).is_none());
    }

    #[test]
    fn test_send_draft_appends_and_updates_card() {
        let mut app = app();
        app.open_chat(SectionKey::Date(DateBucket::Today), 0);
        let before = app.open_detail().map(|d| d.messages.len()).unwrap_or(0);

        app.draft = "   ".to_string();
        app.send_draft();
        assert_eq!(app.open_detail().map(|d| d.messages.len()), Some(before));

        app.draft = " on my way ".to_string();
        app.send_draft();
        assert!(app.draft.is_empty());
        let detail = app.open_detail().cloned();
        assert_eq!(detail.as_ref().map(|d| d.messages.len()), Some(before + 1));
        assert_eq!(
            detail.as_ref().and_then(|d| d.messages.last()).map(|m| m.text.as_str()),
            Some("on my way")
        );

        let chat = app.chats().iter().find(|c| Some(&c.id) == detail.as_ref().map(|d| &d.id));
        assert_eq!(chat.map(|c| c.last_message.as_str()), Some("on my way"));
        assert_eq!(chat.map(|c| c.date_time), Some(now()));
    }

    #[test]
    fn test_reopening_keeps_sent_messages() {
        let mut app = app();
        app.open_chat(SectionKey::Favorites, 0);
        app.draft = "hello".to_string();
        app.send_draft();
        let count = app.open_detail().map(|d| d.messages.len());
        app.close_detail();

        app.open_chat(SectionKey::Favorites, 0);
        assert_eq!(app.open_detail().map(|d| d.messages.len()), count);
    }

    #[test]
    fn test_tick_rebuilds_on_new_day() {
        let mut app = app();
        let today = SectionKey::Date(DateBucket::Today);
        assert!(app.sections().section(today).is_some());

        app.tick(now() + chrono::Duration::minutes(30));
        assert!(app.sections().section(today).is_some());

        app.tick(now() + chrono::Duration::days(1));
        assert!(app.sections().section(today).is_none());
        assert!(app
            .sections()
            .section(SectionKey::Date(DateBucket::Yesterday))
            .is_some());
    }

    #[test]
    fn test_hit_testing() {
        let mut app = app();
        app.card_hits.push(CardHit {
            area: Rect::new(2, 10, 40, 4),
            section: SectionKey::Favorites,
            index: 2,
        });
        app.chip_hits.push((Rect::new(2, 6, 7, 1), ChatFilter::Unread));

        assert_eq!(app.card_at(5, 12), Some((SectionKey::Favorites, 2)));
        assert_eq!(app.card_at(5, 14), None);
        assert_eq!(app.chip_at(8, 6), Some(ChatFilter::Unread));
        assert_eq!(app.chip_at(9, 6), None);
    }
}

use chitchat_core::ChatFilter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::{App, View};

/// Rows moved per mouse wheel notch
const SCROLL_STEP: i32 = 3;
/// Rows moved per PageUp/PageDown
const PAGE_STEP: i32 = 10;

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::ChatList => handle_list_key(app, key),
        View::ChatDetail => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(1),
        KeyCode::Enter => app.open_focused(),
        KeyCode::Esc => app.clear_selection(),
        KeyCode::PageUp => app.scroll_list(-PAGE_STEP),
        KeyCode::PageDown => app.scroll_list(PAGE_STEP),
        KeyCode::Home => app.list_scroll = 0,
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.toggle_filter(ChatFilter::ALL_FILTERS[index]);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.close_detail(),
        KeyCode::Enter => app.send_draft(),
        KeyCode::Backspace => {
            app.draft.pop();
        }
        KeyCode::Char('u') if has_ctrl => app.draft.clear(),
        KeyCode::Char(c) if !has_ctrl => app.draft.push(c),
        KeyCode::Up => app.scroll_detail(1),
        KeyCode::Down => app.scroll_detail(-1),
        KeyCode::PageUp => app.scroll_detail(PAGE_STEP),
        KeyCode::PageDown => app.scroll_detail(-PAGE_STEP),
        _ => {}
    }
}

pub(crate) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match app.view {
        View::ChatList => handle_list_mouse(app, mouse),
        View::ChatDetail => match mouse.kind {
            MouseEventKind::ScrollUp => app.scroll_detail(SCROLL_STEP),
            MouseEventKind::ScrollDown => app.scroll_detail(-SCROLL_STEP),
            _ => {}
        },
    }
}

fn handle_list_mouse(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            let target = app.card_at(column, row);
            app.set_hover(target);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(filter) = app.chip_at(column, row) {
                app.toggle_filter(filter);
            } else if let Some((section, index)) = app.card_at(column, row) {
                app.press(section, index);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let target = app.card_at(column, row);
            app.release(target);
        }
        MouseEventKind::ScrollUp => app.scroll_list(-SCROLL_STEP),
        MouseEventKind::ScrollDown => app.scroll_list(SCROLL_STEP),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::CardHit;
    use chitchat_core::{CoreConfig, SectionKey};
    use chrono::{NaiveDate, NaiveDateTime};
    use ratatui::layout::Rect;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn app() -> App {
        let mut app = App::new(CoreConfig::default(), now());
        app.list_viewport_height = 30;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keyboard_open_and_back() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.view, View::ChatDetail);
        assert_eq!(app.list_state.selected(), Some((SectionKey::Favorites, 1)));

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.view, View::ChatList);
        assert_eq!(
            app.list_state.selected(),
            Some((SectionKey::Favorites, 1)),
            "selection survives going back"
        );

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_typing_and_sending() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        for c in "hi!".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.draft, "hi");

        let before = app.open_detail().map(|d| d.messages.len()).unwrap_or(0);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.open_detail().map(|d| d.messages.len()), Some(before + 1));
        assert!(app.draft.is_empty());
    }

    #[test]
    fn test_q_types_in_composer_but_quits_on_list() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.draft, "q");

        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_digit_keys_toggle_chips() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert!(app.filters.contains(ChatFilter::Unread));
        assert!(!app.filters.contains(ChatFilter::All));
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert!(app.filters.contains(ChatFilter::All));
    }

    #[test]
    fn test_mouse_hover_press_release() {
        let mut app = app();
        app.card_hits = vec![
            CardHit {
                area: Rect::new(2, 10, 40, 4),
                section: SectionKey::Favorites,
                index: 0,
            },
            CardHit {
                area: Rect::new(2, 14, 40, 4),
                section: SectionKey::Favorites,
                index: 1,
            },
        ];

        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 5, 15));
        assert_eq!(app.list_state.hovered(), Some((SectionKey::Favorites, 1)));
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 50, 15));
        assert_eq!(app.list_state.hovered(), None, "leaving the card clears hover");

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 11));
        assert_eq!(app.list_state.pressed(), Some((SectionKey::Favorites, 0)));
        assert_eq!(app.view, View::ChatList);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 11));
        assert_eq!(app.list_state.pressed(), None);
        assert_eq!(app.list_state.selected(), Some((SectionKey::Favorites, 0)));
        assert_eq!(app.view, View::ChatDetail);
    }

    #[test]
    fn test_mouse_chip_click() {
        let mut app = app();
        app.chip_hits = vec![(Rect::new(2, 6, 10, 1), ChatFilter::Group)];
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 4, 6));
        assert!(app.filters.contains(ChatFilter::Group));
        assert!(app.sections().sections.iter().all(|s| s.chats.iter().all(|c| c.is_group())));
    }
}

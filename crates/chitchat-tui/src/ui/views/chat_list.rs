use chitchat_core::format::unread_badge;
use chitchat_core::models::MessageStatus;
use chitchat_core::{ChatListSections, SectionKey};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::app::CardHit;
use crate::ui::card::{CHANNEL_GLYPH, META_SEPARATOR, STAR_GLYPH};
use crate::ui::components::avatar::AVATAR_WIDTH;
use crate::ui::components::{
    avatar_span, presence_span, render_filter_chips, render_footer, render_online_strip,
};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::layout::{
    self, CARD_HEIGHT, CHIP_ROW_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, ONLINE_STRIP_HEIGHT,
    SECTION_HEADER_HEIGHT,
};
use crate::ui::{theme, App};

const LIST_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "move"),
    ("enter", "open"),
    ("1-4", "filter"),
    ("esc", "clear"),
    ("q", "quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    Header(&'static str),
    Card(SectionKey, usize),
}

/// A row of the scrollable list body, positioned in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub offset: u16,
    pub height: u16,
    pub row: ListRow,
}

/// Section titles and cards, top to bottom
pub fn list_rows(sections: &ChatListSections) -> Vec<RowLayout> {
    let mut rows = Vec::new();
    let mut offset = 0u16;
    let mut push = |row: ListRow, height: u16| {
        rows.push(RowLayout {
            offset,
            height,
            row,
        });
        offset = offset.saturating_add(height);
    };

    for section in &sections.sections {
        push(ListRow::Header(section.title), SECTION_HEADER_HEIGHT);
        for index in 0..section.len() {
            push(ListRow::Card(section.key, index), CARD_HEIGHT);
        }
    }
    rows
}

pub fn render_chat_list(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(ONLINE_STRIP_HEIGHT),
        Constraint::Length(CHIP_ROW_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    render_header(f, app, layout::with_content_padding(chunks[0]));
    render_online_strip(f, &app.online_users, layout::with_content_padding(chunks[1]));
    render_filter_chips(f, app, layout::with_content_padding(chunks[2]));
    render_body(f, app, layout::with_content_padding(chunks[3]));
    render_footer(f, chunks[4], LIST_HINTS, app.pending_quit);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let unread: u32 = app.chats().iter().map(|c| c.unread_count).sum();
    let mut spans = vec![Span::styled("ChitChat", theme::title())];
    if unread > 0 {
        spans.push(Span::styled(META_SEPARATOR, theme::text_muted()));
        spans.push(Span::styled(format!("{unread} unread"), theme::text_muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = list_rows(app.sections());
    let content_height = rows.last().map(|r| r.offset + r.height).unwrap_or(0);
    app.list_viewport_height = area.height;
    app.list_scroll = app
        .list_scroll
        .min(content_height.saturating_sub(area.height));

    if rows.is_empty() {
        let empty = Paragraph::new("No chats match the selected filters")
            .style(theme::text_muted())
            .alignment(Alignment::Center);
        f.render_widget(empty, Rect { height: 1, ..area });
        app.card_hits.clear();
        return;
    }

    let scroll = app.list_scroll;
    let mut hits = Vec::new();
    for row in rows {
        // Only rows that fit entirely
        if row.offset < scroll || row.offset + row.height > scroll + area.height {
            continue;
        }
        let rect = Rect::new(area.x, area.y + row.offset - scroll, area.width, row.height);
        match row.row {
            ListRow::Header(title) => {
                let title_row = Rect {
                    y: rect.y + rect.height.saturating_sub(1),
                    height: 1,
                    ..rect
                };
                f.render_widget(
                    Paragraph::new(Span::styled(title, theme::section_header())),
                    title_row,
                );
            }
            ListRow::Card(section, index) => {
                render_card(f, app, rect, section, index);
                hits.push(CardHit {
                    area: rect,
                    section,
                    index,
                });
            }
        }
    }
    app.card_hits = hits;
}

fn render_card(f: &mut Frame, app: &App, area: Rect, key: SectionKey, index: usize) {
    let Some(section) = app.sections().section(key) else {
        return;
    };
    let Some(chat) = section.chats.get(index) else {
        return;
    };
    let manager = app.manager(key);
    let is_hovered = manager.is_some_and(|m| m.is_hovered(index));
    let is_pressed = manager.is_some_and(|m| m.is_pressed(index));
    let is_selected = manager.is_some_and(|m| m.is_selected(index));
    let radii = manager
        .map(|m| m.corner_radius_for(index, index == 0, index + 1 == section.len(), is_hovered))
        .unwrap_or_default();

    let background = if is_pressed {
        theme::BG_PRESSED
    } else if is_hovered {
        theme::BG_HOVER
    } else {
        theme::BG_CARD
    };
    let border_color = if is_selected {
        theme::ACCENT_PRIMARY
    } else if is_hovered {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    let block = Block::bordered()
        .border_set(app.corner_style.border_set(&radii))
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let now = app.now();

    // Line 1: avatar, presence, name, star ... status, time
    let mut left = vec![avatar_span(&chat.initial(), chat.avatar_color), Span::raw(" ")];
    if let Some(span) = presence_span(&chat.presence(now), app.animation()) {
        left.push(span);
        left.push(Span::raw(" "));
    }
    if chat.is_channel() {
        left.push(Span::styled(format!("{CHANNEL_GLYPH} "), theme::text_muted()));
    }
    let suffix = if chat.is_favorite {
        vec![Span::styled(
            format!(" {STAR_GLYPH}"),
            Style::default().fg(theme::ACCENT_FAVORITE),
        )]
    } else {
        Vec::new()
    };
    let status_color = if chat.message_status == MessageStatus::Delivered {
        theme::ACCENT_PRIMARY
    } else {
        theme::TEXT_MUTED
    };
    let right = vec![
        Span::styled(chat.message_status.glyph(), Style::default().fg(status_color)),
        Span::raw(" "),
        Span::styled(chat.time_label(now), theme::text_muted()),
    ];
    let name_style = if chat.unread_count > 0 {
        theme::title()
    } else {
        theme::text_primary()
    };
    let name_room = width
        .saturating_sub(spans_width(&left) + spans_width(&suffix) + spans_width(&right) + 1);
    left.push(Span::styled(
        truncate_with_ellipsis(&chat.name, name_room),
        name_style,
    ));
    left.extend(suffix);
    let top = spread(left, right, width);

    // Line 2: last message ... unread badge
    let badge: Vec<Span> = unread_badge(chat.unread_count)
        .map(|text| vec![Span::styled(format!(" {text} "), theme::badge())])
        .unwrap_or_default();
    let indent = " ".repeat(AVATAR_WIDTH + 1);
    let message_room = width.saturating_sub(indent.len() + spans_width(&badge) + 1);
    let message_style = if chat.unread_count > 0 {
        theme::text_primary()
    } else {
        theme::text_muted()
    };
    let bottom = spread(
        vec![
            Span::raw(indent),
            Span::styled(
                truncate_with_ellipsis(&chat.last_message, message_room),
                message_style,
            ),
        ],
        badge,
        width,
    );

    let selected_marker = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(vec![top, bottom]).style(selected_marker),
        inner,
    );
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Left spans, padding, right spans, filling `width` cells
fn spread<'a>(mut left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: usize) -> Line<'a> {
    let gap = width.saturating_sub(spans_width(&left) + spans_width(&right));
    left.push(Span::raw(" ".repeat(gap)));
    left.extend(right);
    Line::from(left)
}

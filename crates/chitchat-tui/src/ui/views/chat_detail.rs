use chitchat_core::format::format_message_time;
use chitchat_core::models::{ChatDetail, Presence};
use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::card::META_SEPARATOR;
use crate::ui::components::{avatar_span, render_footer};
use crate::ui::format::wrap_text;
use crate::ui::layout::{
    self, BUBBLE_WIDTH_RATIO, COMPOSER_HEIGHT, DETAIL_HEADER_HEIGHT, FOOTER_HEIGHT,
};
use crate::ui::services::AnimationClock;
use crate::ui::{theme, App};

const DETAIL_HINTS: &[(&str, &str)] = &[
    ("enter", "send"),
    ("esc", "back"),
    ("\u{2191}\u{2193}", "scroll"),
];

const COMPOSER_PLACEHOLDER: &str = "Type a message...";
const CURSOR_GLYPH: &str = "\u{258f}";

pub fn render_chat_detail(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(detail) = app.open_detail() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(DETAIL_HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(COMPOSER_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    let header_area = layout::with_content_padding(chunks[0]);
    let header = header_lines(detail, app.now(), app.animation(), header_area.width);
    f.render_widget(Paragraph::new(header), header_area);

    let messages_area = layout::with_content_padding(chunks[1]);
    let lines = message_lines(detail, messages_area.width as usize);
    let total = lines.len() as u16;
    let max_scroll = total.saturating_sub(messages_area.height);
    app.detail_scroll = app.detail_scroll.min(max_scroll);
    // Pinned to the newest message unless scrolled back
    let offset = max_scroll - app.detail_scroll;
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), messages_area);

    render_composer(f, &app.draft, layout::with_content_padding(chunks[2]));
    render_footer(f, chunks[3], DETAIL_HINTS, app.pending_quit);
}

/// Avatar and name, presence or group info, then a rule
fn header_lines(
    detail: &ChatDetail,
    now: NaiveDateTime,
    animation: &AnimationClock,
    width: u16,
) -> Vec<Line<'static>> {
    let title = Line::from(vec![
        Span::styled("\u{2190} ", theme::text_muted()),
        avatar_span(&detail.initial(), detail.avatar_color),
        Span::raw(" "),
        Span::styled(detail.name.clone(), theme::title()),
    ]);

    let subtitle = if detail.is_group() {
        Span::styled(
            format!("Group{META_SEPARATOR}{} members", detail.member_count()),
            theme::text_muted(),
        )
    } else {
        match detail.presence(now) {
            Presence::Typing => Span::styled(
                format!("{} {}", animation.typing_indicator(), Presence::Typing.describe()),
                Style::default().fg(theme::ACCENT_PRIMARY),
            ),
            Presence::Online => Span::styled(
                Presence::Online.describe(),
                Style::default().fg(theme::ACCENT_ONLINE),
            ),
            other => Span::styled(other.describe(), theme::text_muted()),
        }
    };

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(width as usize),
        Style::default().fg(theme::BORDER_INACTIVE),
    ));

    vec![
        title,
        Line::from(vec![Span::raw("    "), subtitle]),
        rule,
    ]
}

/// Bubbles for every message: sender name in groups, wrapped text padded to
/// a block, and the send time. Outgoing bubbles sit on the right.
pub fn message_lines(detail: &ChatDetail, width: usize) -> Vec<Line<'static>> {
    let bubble_width = ((width as f32 * BUBBLE_WIDTH_RATIO) as usize).max(3);
    let text_width = bubble_width - 2;
    let mut lines = Vec::new();

    for message in &detail.messages {
        let alignment = if message.is_from_user {
            Alignment::Right
        } else {
            Alignment::Left
        };

        if detail.is_group() && !message.is_from_user {
            if let Some(sender) = &message.sender_name {
                lines.push(Line::from(Span::styled(
                    sender.clone(),
                    Style::default()
                        .fg(theme::rgb(message.sender_color))
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }

        let bubble_style = if message.is_from_user {
            Style::default().fg(theme::TEXT_PRIMARY).bg(theme::BG_BUBBLE_OUT)
        } else {
            Style::default().fg(theme::TEXT_PRIMARY).bg(theme::BG_BUBBLE_IN)
        };
        let wrapped = wrap_text(&message.text, text_width);
        let block_width = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
        for row in wrapped {
            let pad = block_width.saturating_sub(row.width());
            let text = format!(" {row}{} ", " ".repeat(pad));
            lines.push(Line::from(Span::styled(text, bubble_style)).alignment(alignment));
        }

        lines.push(
            Line::from(Span::styled(
                format_message_time(message.timestamp),
                Style::default().fg(theme::TEXT_DIM),
            ))
            .alignment(alignment),
        );
        lines.push(Line::default());
    }
    lines
}

fn render_composer(f: &mut Frame, draft: &str, area: Rect) {
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(theme::BORDER_ACTIVE))
        .style(Style::default().bg(theme::BG_INPUT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = if draft.is_empty() {
        Line::from(vec![
            Span::styled(CURSOR_GLYPH, Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(COMPOSER_PLACEHOLDER, Style::default().fg(theme::TEXT_DIM)),
        ])
    } else {
        // Keep the tail of a long draft in view
        let room = (inner.width as usize).saturating_sub(1);
        let mut visible: String = String::new();
        let mut used = 0;
        for ch in draft.chars().rev() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > room {
                break;
            }
            used += w;
            visible.insert(0, ch);
        }
        Line::from(vec![
            Span::styled(visible, theme::text_primary()),
            Span::styled(CURSOR_GLYPH, Style::default().fg(theme::ACCENT_PRIMARY)),
        ])
    };
    f.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitchat_core::{sample, CoreConfig, SectionKey};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| render_chat_detail(f, app, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_group_lines_carry_sender_names() {
        let detail = sample::chat_detail_by_id("2", now()).unwrap();
        let lines = message_lines(&detail, 60);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[0], "Mom");
        assert!(text[1].contains("Don't forget about dinner tonight!"));
        assert!(text.iter().any(|l| l == "Dad"));
        assert!(
            !text.iter().any(|l| l == "You"),
            "outgoing messages carry no sender line"
        );
    }

    #[test]
    fn test_outgoing_bubbles_align_right() {
        let detail = sample::chat_detail_by_id("1", now()).unwrap();
        let lines = message_lines(&detail, 60);
        let outgoing = lines
            .iter()
            .find(|l| l.to_string().contains("I'm doing great"))
            .map(|l| l.alignment);
        assert_eq!(outgoing, Some(Some(Alignment::Right)));
        let incoming = lines
            .iter()
            .find(|l| l.to_string().contains("Hey, how are you?"))
            .map(|l| l.alignment);
        assert_eq!(incoming, Some(Some(Alignment::Left)));
    }

    #[test]
    fn test_bubble_rows_share_a_width() {
        let mut detail = sample::chat_detail_by_id("3", now()).unwrap();
        detail.messages.truncate(0);
        detail.push_outgoing("one two three four five six seven", now());
        let lines = message_lines(&detail, 20);
        // 20 * 0.75 = 15 cells of bubble, 13 of text
        let bubble: Vec<usize> = lines
            .iter()
            .take_while(|l| l.spans.first().is_some_and(|s| s.style.bg.is_some()))
            .map(|l| l.width())
            .collect();
        assert!(bubble.len() > 1);
        assert!(bubble.iter().all(|w| *w == bubble[0]));
        assert!(bubble[0] <= 15);
    }

    #[test]
    fn test_renders_header_messages_and_composer() {
        let mut app = App::new(CoreConfig::default(), now());
        app.open_chat(SectionKey::Favorites, 1);
        let text = draw(&mut app);
        assert!(text.contains("Family Group"));
        assert!(text.contains("3 members"));
        assert!(text.contains("Perfect! See you all then"), "newest message is in view");
        assert!(text.contains(COMPOSER_PLACEHOLDER));
    }

    #[test]
    fn test_draft_replaces_placeholder() {
        let mut app = App::new(CoreConfig::default(), now());
        app.open_chat(SectionKey::Favorites, 0);
        app.draft = "see you at noon".to_string();
        let text = draw(&mut app);
        assert!(text.contains("see you at noon"));
        assert!(!text.contains(COMPOSER_PLACEHOLDER));
        assert!(text.contains("typing..."), "John is online and typing");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = App::new(CoreConfig::default(), now());
        app.open_chat(SectionKey::Favorites, 0);
        app.detail_scroll = u16::MAX;
        let text = draw(&mut app);
        assert!(app.detail_scroll < u16::MAX);
        assert!(text.contains("Hey, how are you?"), "scrolled all the way back");
    }
}

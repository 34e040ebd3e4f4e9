use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::card::SPACER;
use crate::ui::layout::CONTENT_PADDING_H;
use crate::ui::theme;

/// Key hints, or the quit warning after a first Ctrl+C
pub fn render_footer(f: &mut Frame, area: Rect, hints: &[(&str, &str)], pending_quit: bool) {
    let padding = " ".repeat(CONTENT_PADDING_H as usize);
    let line = if pending_quit {
        Line::from(vec![
            Span::raw(padding),
            Span::styled(
                "Press Ctrl+C again to quit",
                Style::default().fg(theme::ACCENT_ERROR),
            ),
        ])
    } else {
        let mut spans = vec![Span::raw(padding)];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(SPACER));
            }
            spans.push(Span::styled(*key, theme::text_primary()));
            spans.push(Span::styled(format!(" {action}"), theme::text_muted()));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line), area);
}

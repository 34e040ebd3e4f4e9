use chitchat_core::ChatFilter;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;
use crate::ui::App;

const CHIP_GAP: u16 = 1;

/// Chip row under the online strip. Records each chip's rect for mouse
/// toggling.
pub fn render_filter_chips(f: &mut Frame, app: &mut App, area: Rect) {
    app.chip_hits.clear();
    if area.height == 0 {
        return;
    }

    let mut spans = Vec::new();
    let mut x = area.x;
    for (i, filter) in ChatFilter::ALL_FILTERS.iter().enumerate() {
        let text = format!(" {} {} ", i + 1, filter.label());
        let width = text.width() as u16;
        if x + width > area.x + area.width {
            break;
        }
        app.chip_hits.push((Rect::new(x, area.y, width, 1), *filter));
        spans.push(Span::styled(text, theme::chip(app.filters.contains(*filter))));
        spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
        x += width + CHIP_GAP;
    }

    let row = Rect { height: 1, ..area };
    f.render_widget(Paragraph::new(Line::from(spans)), row);
}

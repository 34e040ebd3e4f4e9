use chitchat_core::constants::ONLINE_SECTION_TITLE;
use chitchat_core::models::OnlineUser;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::card::{BULLET_GLYPH, HOLLOW_BULLET_GLYPH};
use crate::ui::components::avatar::{avatar_span, AVATAR_WIDTH};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::theme;

/// Cells per user slot (avatar, dot and a gap)
const SLOT_WIDTH: usize = 8;

/// "Online" title, a row of avatars with online dots, names underneath.
/// Users that do not fit the width are dropped.
pub fn render_online_strip(f: &mut Frame, users: &[OnlineUser], area: Rect) {
    let fits = (area.width as usize / SLOT_WIDTH).min(users.len());
    let visible = &users[..fits];

    let title = Line::from(Span::styled(
        format!("{ONLINE_SECTION_TITLE} ({})", users.len()),
        theme::text_muted(),
    ));

    let mut avatars = Vec::new();
    let mut names = Vec::new();
    for user in visible {
        avatars.push(avatar_span(&user.initial(), user.avatar_color));
        let (dot, dot_style) = if user.is_online {
            (BULLET_GLYPH, Style::default().fg(theme::ACCENT_ONLINE))
        } else {
            (HOLLOW_BULLET_GLYPH, Style::default().fg(theme::TEXT_DIM))
        };
        avatars.push(Span::styled(dot, dot_style));
        avatars.push(Span::raw(" ".repeat(SLOT_WIDTH - AVATAR_WIDTH - 1)));

        let name = truncate_with_ellipsis(&user.name, SLOT_WIDTH - 1);
        names.push(Span::styled(
            format!("{name:<width$}", width = SLOT_WIDTH),
            theme::text_primary(),
        ));
    }

    let lines = vec![title, Line::from(avatars), Line::from(names)];
    f.render_widget(Paragraph::new(lines), area);
}

// Avatar badge and the presence indicator next to it

use chitchat_core::models::{Presence, Rgb};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::ui::card::BULLET_GLYPH;
use crate::ui::services::AnimationClock;
use crate::ui::theme;

/// Width of an avatar badge in cells
pub const AVATAR_WIDTH: usize = 3;

/// Initial on the avatar colour, e.g. " J "
pub fn avatar_span(initial: &str, color: Rgb) -> Span<'static> {
    Span::styled(
        format!(" {initial} "),
        Style::default()
            .fg(Color::Black)
            .bg(theme::rgb(color))
            .add_modifier(Modifier::BOLD),
    )
}

/// Status glyph shown after the avatar. `None` when there is nothing to show.
pub fn presence_span(presence: &Presence, animation: &AnimationClock) -> Option<Span<'static>> {
    match presence {
        Presence::Typing => Some(Span::styled(
            animation.typing_indicator(),
            Style::default().fg(theme::ACCENT_PRIMARY),
        )),
        Presence::Online => Some(Span::styled(
            BULLET_GLYPH,
            Style::default().fg(theme::ACCENT_ONLINE),
        )),
        Presence::LastSeen(age) => Some(Span::styled(
            age.clone(),
            Style::default().fg(theme::TEXT_DIM),
        )),
        Presence::Offline => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_is_padded_initial() {
        let span = avatar_span("J", Rgb(0, 0, 255));
        assert_eq!(span.content, " J ");
        assert_eq!(span.style.bg, Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_presence_glyphs() {
        let clock = AnimationClock::new(50);
        assert_eq!(
            presence_span(&Presence::Online, &clock).map(|s| s.content.into_owned()),
            Some(BULLET_GLYPH.to_string())
        );
        assert_eq!(
            presence_span(&Presence::LastSeen("41m".into()), &clock)
                .map(|s| s.content.into_owned()),
            Some("41m".to_string())
        );
        assert!(presence_span(&Presence::Offline, &clock).is_none());
        assert_eq!(
            presence_span(&Presence::Typing, &clock).map(|s| s.content.into_owned()),
            Some(clock.typing_indicator().to_string())
        );
    }
}

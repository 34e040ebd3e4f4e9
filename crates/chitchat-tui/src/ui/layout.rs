// Layout constants and helpers shared by the views

use ratatui::layout::Rect;

/// Horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Title bar height (title + blank line)
pub const HEADER_HEIGHT: u16 = 2;

/// Online users strip (avatars + names)
pub const ONLINE_STRIP_HEIGHT: u16 = 3;

/// Filter chip row
pub const CHIP_ROW_HEIGHT: u16 = 2;

/// Footer help line
pub const FOOTER_HEIGHT: u16 = 1;

/// Card: top border, two content lines, bottom border
pub const CARD_HEIGHT: u16 = 4;

/// Section title plus the blank line above it
pub const SECTION_HEADER_HEIGHT: u16 = 2;

/// Detail header: name + presence, then a rule
pub const DETAIL_HEADER_HEIGHT: u16 = 3;

/// Detail composer (bordered single line)
pub const COMPOSER_HEIGHT: u16 = 3;

/// Maximum bubble width as a share of the message area
pub const BUBBLE_WIDTH_RATIO: f32 = 0.75;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

/// Whether a terminal cell lies inside a Rect
#[inline]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

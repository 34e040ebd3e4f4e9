// Centralized theme: every colour and style used by the views lives here

use chitchat_core::models::Rgb;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background ("surface container")
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Pressed card background
pub const BG_PRESSED: Color = Color::Rgb(32, 32, 32);

/// Hovered card background
pub const BG_HOVER: Color = Color::Rgb(26, 26, 30);

/// Outgoing message bubble
pub const BG_BUBBLE_OUT: Color = Color::Rgb(28, 44, 64);

/// Incoming message bubble
pub const BG_BUBBLE_IN: Color = Color::Rgb(23, 23, 23);

/// Composer background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Interactive elements, delivered checks, typing pulse
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Online dot
pub const ACCENT_ONLINE: Color = Color::Rgb(106, 153, 85);

/// Favorite star
pub const ACCENT_FAVORITE: Color = Color::Rgb(255, 215, 0);

/// Quit warning, unread badge
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

/// Map a domain colour onto the terminal palette
pub fn rgb(color: Rgb) -> Color {
    let Rgb(r, g, b) = color;
    Color::Rgb(r, g, b)
}

// =============================================================================
// STYLES
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn section_header() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn chip(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(BG_APP)
            .bg(ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MUTED).bg(BG_CARD)
    }
}

pub fn badge() -> Style {
    Style::default()
        .fg(BG_APP)
        .bg(ACCENT_ERROR)
        .add_modifier(Modifier::BOLD)
}

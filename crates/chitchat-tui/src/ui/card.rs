use chitchat_core::{CornerRadii, ListGeometryConfig};
use ratatui::symbols::border::{self, Set};

pub const SPACER: &str = "  ";
pub const BULLET_GLYPH: &str = "\u{25cf}";
pub const HOLLOW_BULLET_GLYPH: &str = "\u{25cb}";
pub const STAR_GLYPH: &str = "\u{2605}";
pub const CHANNEL_GLYPH: &str = "#";
pub const TYPING_GLYPH_ON: &str = "\u{25c9}";
pub const TYPING_GLYPH_OFF: &str = "\u{25cb}";
pub const META_SEPARATOR: &str = " \u{2022} ";

const ROUNDED_TOP_LEFT: &str = "\u{256d}"; // ╭
const ROUNDED_TOP_RIGHT: &str = "\u{256e}"; // ╮
const ROUNDED_BOTTOM_LEFT: &str = "\u{2570}"; // ╰
const ROUNDED_BOTTOM_RIGHT: &str = "\u{256f}"; // ╯

/// Terminal cells can only draw a corner round or square; radii at or above
/// the midpoint between the inner and default radius render round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerStyle {
    threshold: f32,
}

impl CornerStyle {
    pub fn from_config(config: &ListGeometryConfig) -> Self {
        Self {
            threshold: (config.default_radius + config.inner_radius) / 2.0,
        }
    }

    pub fn is_rounded(&self, radius: f32) -> bool {
        radius > 0.0 && radius >= self.threshold
    }

    /// Border glyphs for a card with the given corner radii
    pub fn border_set(&self, radii: &CornerRadii) -> Set {
        let plain = border::PLAIN;
        let pick = |radius: f32, rounded: &'static str, square: &'static str| {
            if self.is_rounded(radius) {
                rounded
            } else {
                square
            }
        };
        Set {
            top_left: pick(radii.top_start, ROUNDED_TOP_LEFT, plain.top_left),
            top_right: pick(radii.top_end, ROUNDED_TOP_RIGHT, plain.top_right),
            bottom_left: pick(radii.bottom_start, ROUNDED_BOTTOM_LEFT, plain.bottom_left),
            bottom_right: pick(radii.bottom_end, ROUNDED_BOTTOM_RIGHT, plain.bottom_right),
            ..plain
        }
    }
}

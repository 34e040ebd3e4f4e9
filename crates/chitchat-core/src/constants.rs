//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Outer corner radius of the first/last card in an idle run
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;

/// Corner radius between two cards of an unbroken run
pub const INNER_CORNER_RADIUS: f32 = 5.0;

/// Corner radius applied to every corner of a hovered card
pub const HOVER_CORNER_RADIUS: f32 = 12.0;

/// Radius of the "sharp" corners of a detached (active) card
pub const SHARP_CORNER_RADIUS: f32 = 8.0;

/// Frame tick used by the front-end event loop
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// The detail header only shows "last seen" for contacts seen within this window
pub const LAST_SEEN_HEADER_MAX_HOURS: i64 = 24;

/// Unread counts above this are shown as "99+"
pub const UNREAD_BADGE_CAP: u32 = 99;

// Section titles
pub const FAVORITES_SECTION_TITLE: &str = "Favorites";
pub const ONLINE_SECTION_TITLE: &str = "Online";

/// Config file name inside the per-user config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "chitchat";

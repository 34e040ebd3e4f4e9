pub mod avatar;
pub mod filter_chips;
pub mod footer;
pub mod online_strip;

pub use avatar::{avatar_span, presence_span};
pub use filter_chips::render_filter_chips;
pub use footer::render_footer;
pub use online_strip::render_online_strip;

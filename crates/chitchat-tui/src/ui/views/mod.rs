pub mod chat_detail;
pub mod chat_list;

pub use chat_detail::render_chat_detail;
pub use chat_list::render_chat_list;

pub mod chat;
pub mod color;
pub mod message;
pub mod presence;
pub mod user;

pub use chat::{ChatItem, ChatKind, MessageStatus};
pub use color::Rgb;
pub use message::{ChatDetail, Message};
pub use presence::Presence;
pub use user::OnlineUser;

use serde::{Deserialize, Serialize};

use super::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineUser {
    pub id: String,
    pub name: String,
    pub avatar_color: Rgb,
    pub is_online: bool,
}

impl OnlineUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar_color: Rgb) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_color,
            is_online: true,
        }
    }

    /// First letter of the name, upper-cased, for avatar rendering
    pub fn initial(&self) -> String {
        super::chat::initial_of(&self.name)
    }
}

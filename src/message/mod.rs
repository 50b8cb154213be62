//! The read-only view of a chat message that gesture handling and
//! action-menu resolution consume.
//!
//! Nothing in this crate mutates a [`MessageFacade`]; it is owned by the
//! host's message-data layer and only borrowed here.

use serde::{Deserialize, Serialize};

pub mod content;
pub mod facade;
pub mod sender;

pub use content::*;
pub use facade::*;
pub use sender::*;

#[cfg(test)]
pub(crate) mod fixtures;


/// The unique ID of a chat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);
impl ChatId {
    /// Returns `true` if this ID refers to no chat at all.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// The ID of a message, unique within its chat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

/// The unique ID of a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// The kind of chat that a message belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatKind {
    #[default]
    Private,
    /// An end-to-end encrypted one-on-one chat.
    Secret,
    BasicGroup,
    Supergroup,
    Channel,
}
impl ChatKind {
    /// Returns `true` for chats with more than two possible participants.
    pub fn is_multi_chat(&self) -> bool {
        matches!(self, Self::BasicGroup | Self::Supergroup | Self::Channel)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Secret)
    }

    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel)
    }
}

/// Info about the chat that contains a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatInfo {
    pub id: ChatId,
    pub kind: ChatKind,
    /// The reactions that may be sent in this chat.
    ///
    /// If `None`, the chat's reaction settings are not known.
    pub available_reactions: Option<Vec<String>>,
}
impl ChatInfo {
    /// Returns `true` if the chat offers at least one reaction,
    /// in which case the action menu should be shown alongside a reaction bar.
    pub fn has_reactions(&self) -> bool {
        self.available_reactions.as_ref().is_some_and(|r| !r.is_empty())
    }
}

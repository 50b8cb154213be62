//! The non-message inputs of action menu resolution.

use serde::{Deserialize, Serialize};

use crate::{
    config::ResolverConfig,
    message::{ChatMember, MemberStatus, UserId},
};

/// What the current user is allowed to do in the chat that contains a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatPermissions {
    pub self_user_id: Option<UserId>,
    pub can_write_messages: bool,
    pub can_pin_messages: bool,
    /// Whether stickers, GIFs and dice may be sent to this chat.
    pub can_send_stickers: bool,
    /// The current user's own status in the chat, if known.
    pub my_status: Option<MemberStatus>,
}
impl ChatPermissions {
    pub fn is_admin(&self) -> bool {
        self.my_status.as_ref().is_some_and(MemberStatus::is_admin)
    }
}

/// How much is known about the sender of a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "member")]
pub enum SenderContext {
    /// The sender's membership hasn't been looked up (yet).
    #[default]
    Pending,
    Resolved(ChatMember),
    /// The lookup failed or the sender isn't a member; admin tools are unavailable.
    Unavailable,
}
impl SenderContext {
    pub fn member(&self) -> Option<&ChatMember> {
        match self {
            Self::Resolved(member) => Some(member),
            _ => None,
        }
    }
}
impl From<Option<ChatMember>> for SenderContext {
    fn from(member: Option<ChatMember>) -> Self {
        member.map_or(Self::Unavailable, Self::Resolved)
    }
}

/// A snapshot of everything besides the message itself that the resolver depends on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionContext {
    pub permissions: ChatPermissions,
    pub sender: SenderContext,
    pub config: ResolverConfig,
}
impl ActionContext {
    pub fn new(permissions: ChatPermissions, config: ResolverConfig) -> Self {
        Self {
            permissions,
            sender: SenderContext::Pending,
            config,
        }
    }

    /// Returns a copy of this context with the given sender info.
    pub fn with_sender(&self, sender: SenderContext) -> Self {
        Self {
            sender,
            ..self.clone()
        }
    }
}

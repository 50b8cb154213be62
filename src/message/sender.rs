//! Message senders and their membership status within a chat.

use serde::{Deserialize, Serialize};

use super::{ChatId, UserId};

/// The sender of a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MessageSender {
    /// A regular user, including bots.
    User {
        id: UserId,
        #[serde(default)]
        is_bot: bool,
    },
    /// A chat posting on its own behalf, e.g., a channel or an anonymous group.
    Chat {
        id: ChatId,
        #[serde(default)]
        is_channel: bool,
    },
}
impl Default for MessageSender {
    fn default() -> Self {
        Self::User { id: UserId::default(), is_bot: false }
    }
}
impl MessageSender {
    pub fn is_chat(&self) -> bool {
        matches!(self, Self::Chat { .. })
    }

    /// Returns `true` if this sender is a chat that is a channel.
    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Chat { is_channel: true, .. })
    }

    pub fn is_bot(&self) -> bool {
        matches!(self, Self::User { is_bot: true, .. })
    }

    /// Returns `true` if this sender is the given chat itself.
    pub fn is_chat_itself(&self, chat_id: ChatId) -> bool {
        matches!(self, Self::Chat { id, .. } if *id == chat_id)
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User { id, .. } => Some(*id),
            Self::Chat { .. } => None,
        }
    }
}

/// The status of a member within a chat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MemberStatus {
    /// The owner of the chat.
    Creator {
        #[serde(default = "default_true")]
        is_member: bool,
    },
    Administrator {
        /// Whether the current user may edit this administrator's rights.
        #[serde(default)]
        can_be_edited: bool,
        #[serde(default)]
        can_restrict_members: bool,
        #[serde(default)]
        can_promote_members: bool,
    },
    Member,
    /// A member with some of their rights taken away.
    Restricted {
        #[serde(default = "default_true")]
        is_member: bool,
    },
    Left,
    Banned,
}
fn default_true() -> bool { true }

impl MemberStatus {
    pub fn is_creator(&self) -> bool {
        matches!(self, Self::Creator { .. })
    }

    /// Returns `true` for creators and administrators.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Creator { .. } | Self::Administrator { .. })
    }

    /// Returns `true` if the holder of this status is currently in the chat.
    pub fn is_member(&self) -> bool {
        match self {
            Self::Creator { is_member } | Self::Restricted { is_member } => *is_member,
            Self::Administrator { .. } | Self::Member => true,
            Self::Left | Self::Banned => false,
        }
    }

    /// Returns `true` if this status can be lifted, i.e., it is a ban or restriction.
    pub fn is_restricted_or_banned(&self) -> bool {
        matches!(self, Self::Restricted { .. } | Self::Banned)
    }

    pub fn can_restrict_members(&self) -> bool {
        match self {
            Self::Creator { .. } => true,
            Self::Administrator { can_restrict_members, .. } => *can_restrict_members,
            _ => false,
        }
    }

    pub fn can_promote_members(&self) -> bool {
        match self {
            Self::Creator { .. } => true,
            Self::Administrator { can_promote_members, .. } => *can_promote_members,
            _ => false,
        }
    }
}

/// A resolved chat member, as returned by a sender-status lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    pub member_id: MessageSender,
    pub status: MemberStatus,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restricted_member_is_still_a_member() {
        assert!(MemberStatus::Restricted { is_member: true }.is_member());
        assert!(!MemberStatus::Restricted { is_member: false }.is_member());
        assert!(!MemberStatus::Banned.is_member());
        assert!(MemberStatus::Restricted { is_member: true }.is_restricted_or_banned());
    }

    #[test]
    fn sender_is_chat_itself() {
        let sender = MessageSender::Chat { id: ChatId(-100), is_channel: true };
        assert!(sender.is_chat_itself(ChatId(-100)));
        assert!(!sender.is_chat_itself(ChatId(-200)));
        assert!(!MessageSender::User { id: UserId(7), is_bot: false }.is_chat_itself(ChatId(7)));
    }

    #[test]
    fn member_status_deserializes_with_defaults() {
        let status: MemberStatus = serde_json::from_str(r#"{"type":"restricted"}"#).unwrap();
        assert_eq!(status, MemberStatus::Restricted { is_member: true });
        let admin: MemberStatus = serde_json::from_str(
            r#"{"type":"administrator","can_restrict_members":true}"#
        ).unwrap();
        assert!(admin.can_restrict_members());
        assert!(!admin.can_promote_members());
    }
}

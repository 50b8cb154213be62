//! The [`MessageFacade`]: a capability snapshot of one message (or album).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{
    AlbumKind, ChatInfo, DownloadedFile, FileState, GroupedMessage, MessageContent,
    MessageId, MessageSender, PlaylistAddMode,
};

bitflags! {
    /// State predicates of a message that are decided by the message-data layer.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MessageState: u16 {
        /// The message is pending or failed to send.
        const NotSent = 1 << 0;
        /// The message is an advertisement injected into the chat.
        const Sponsored = 1 << 1;
        /// The message is shown as part of a chat's admin event log.
        const EventLog = 1 << 2;
        /// The message is self-destructing media.
        const Hot = 1 << 3;
        /// The message is scheduled to be sent later.
        const Scheduled = 1 << 4;
        /// The message was sent by the current user.
        const Outgoing = 1 << 5;
        /// The message has a discussion thread that belongs to a channel post.
        const ThreadChannelPost = 1 << 6;
        /// The message is a copy of another message that can be jumped to.
        const HasSourceMessage = 1 << 7;
        /// The message was sent by an anonymous group administrator.
        const AnonymousAdmin = 1 << 8;
    }
}

bitflags! {
    /// Possible actions that the user can perform on a message.
    ///
    /// This is used to determine which entries to show in the message action menu.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MessageAbilities: u16 {
        const CanResend = 1 << 0;
        const CanReplyTo = 1 << 1;
        const CanBeSelected = 1 << 2;
        const CanBeForwarded = 1 << 3;
        /// Whether the message content may be saved or copied out of the app.
        const CanBeSaved = 1 << 4;
        const CanBeDeletedForSomebody = 1 << 5;
        /// Whether the text or caption of this message can be edited.
        const CanEditText = 1 << 6;
        /// Whether the message itself can be edited, e.g., to stop a poll.
        const CanBeEdited = 1 << 7;
        const CanViewStatistics = 1 << 8;
        const CanBeReported = 1 << 9;
        /// Whether a public link to this message can be copied.
        const CanCopyLink = 1 << 10;
        /// Whether this message has text that can be copied.
        const CanCopyText = 1 << 11;
    }
}

/// A read-only view of a message, as consumed by gesture handling and menu resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageFacade {
    pub chat: ChatInfo,
    pub id: MessageId,
    pub sender: MessageSender,
    /// The short display name of the sender, used in menu labels.
    pub sender_short_name: String,
    pub content: MessageContent,
    pub state: MessageState,
    pub abilities: MessageAbilities,
    pub album_kind: AlbumKind,
    /// All messages grouped into this one logical unit, including this message.
    ///
    /// Empty for a plain single message without any file info.
    pub album: Vec<GroupedMessage>,
    /// How many messages of the group are currently pinned.
    pub pinned_count: usize,
    pub reply_count: u32,
    /// The main file of this message, if any.
    pub file: Option<FileState>,
    pub playlist_add_mode: PlaylistAddMode,
    /// Quick reactions revealed by swiping this message to the right.
    pub left_quick_reactions: Vec<String>,
    /// Quick reactions revealed by swiping this message to the left.
    pub right_quick_reactions: Vec<String>,
}

impl MessageFacade {
    pub fn is_not_sent(&self) -> bool { self.state.contains(MessageState::NotSent) }
    pub fn is_sent(&self) -> bool { !self.is_not_sent() }
    pub fn is_sponsored(&self) -> bool { self.state.contains(MessageState::Sponsored) }
    pub fn is_event_log(&self) -> bool { self.state.contains(MessageState::EventLog) }
    pub fn is_hot(&self) -> bool { self.state.contains(MessageState::Hot) }
    pub fn is_scheduled(&self) -> bool { self.state.contains(MessageState::Scheduled) }
    pub fn is_outgoing(&self) -> bool { self.state.contains(MessageState::Outgoing) }

    pub fn can(&self, ability: MessageAbilities) -> bool {
        self.abilities.contains(ability)
    }
    pub fn can_resend(&self) -> bool { self.can(MessageAbilities::CanResend) }
    pub fn can_reply_to(&self) -> bool { self.can(MessageAbilities::CanReplyTo) }
    pub fn can_be_selected(&self) -> bool { self.can(MessageAbilities::CanBeSelected) }
    pub fn can_be_forwarded(&self) -> bool { self.can(MessageAbilities::CanBeForwarded) }
    pub fn can_be_saved(&self) -> bool { self.can(MessageAbilities::CanBeSaved) }
    pub fn can_be_deleted_for_somebody(&self) -> bool { self.can(MessageAbilities::CanBeDeletedForSomebody) }
    pub fn can_edit_text(&self) -> bool { self.can(MessageAbilities::CanEditText) }
    pub fn can_view_statistics(&self) -> bool { self.can(MessageAbilities::CanViewStatistics) }
    pub fn can_be_reported(&self) -> bool { self.can(MessageAbilities::CanBeReported) }

    /// Returns `true` if this message belongs to no chat and is not
    /// a placeholder that is allowed to exist outside of one.
    pub fn is_detached(&self) -> bool {
        self.chat.id.is_none() && !self.content.is_bot_info()
    }

    /// The number of messages in this message's group (at least one).
    pub fn message_count(&self) -> usize {
        self.album.len().max(1)
    }

    /// Returns `true` if this message was sent by the chat it was posted in.
    pub fn is_sent_by_chat_itself(&self) -> bool {
        self.sender.is_chat_itself(self.chat.id)
    }

    /// Returns the quick reactions revealed by a horizontal drag of `dx` pixels.
    ///
    /// Dragging to the left (`dx < 0`) reveals the right-edge zone and vice versa.
    pub fn quick_reactions_for_drag(&self, dx: f32) -> &[String] {
        if dx < 0.0 {
            &self.right_quick_reactions
        } else if dx > 0.0 {
            &self.left_quick_reactions
        } else {
            &[]
        }
    }

    /// Collects the downloaded files of all grouped messages, falling back to
    /// the file of a text message's link preview if no grouped message has one.
    pub fn downloaded_files(&self) -> Vec<DownloadedFile> {
        let mut files: Vec<DownloadedFile> = self.album.iter()
            .filter_map(|m| m.downloaded_file.clone())
            .collect();
        if files.is_empty() {
            if let MessageContent::Text { web_page_file: Some(file) } = &self.content {
                files.push(file.clone());
            }
        }
        files
    }

    /// Returns `true` if any grouped message has a local file that can be removed from the cache.
    pub fn has_deletable_files(&self) -> bool {
        self.album.iter().any(|m| m.has_deletable_file)
    }
}

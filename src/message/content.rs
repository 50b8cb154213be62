//! The kinds of content that a message can carry, and the file state
//! attached to them.

use serde::{Deserialize, Serialize};

use super::{ChatId, UserId};

/// The file extension of an installable language pack document.
pub const LANGUAGE_PACK_EXTENSION: &str = ".xml";
/// The file extension of an installable theme document.
pub const THEME_EXTENSION: &str = ".tgx-theme";

/// The emoji of a darts "dice" message.
pub const EMOJI_DART: &str = "\u{1F3AF}";
/// The emoji of a regular six-sided dice message.
pub const EMOJI_DICE: &str = "\u{1F3B2}";

/// The content of a message, as a closed set of variants.
///
/// Only the details that affect gesture handling or the action menu are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MessageContent {
    Text {
        /// The downloaded file of an attached link preview, if any.
        #[serde(default)]
        web_page_file: Option<DownloadedFile>,
    },
    Poll(Poll),
    Call {
        /// The call duration in seconds; zero for missed or declined calls.
        #[serde(default)]
        duration: u32,
    },
    Contact(Contact),
    Location {
        /// Whether this is a live location that the current user can stop sharing.
        #[serde(default)]
        can_stop_live: bool,
    },
    Venue {
        #[serde(default)]
        provider: String,
        #[serde(default)]
        venue_id: String,
    },
    Sticker(Sticker),
    Dice {
        emoji: String,
    },
    Document(Document),
    Animation,
    Photo,
    Video,
    Audio,
    VoiceNote,
    VideoNote,
    /// A structural chat event, e.g., a member joining or a title change.
    ChatEvent(ChatEventKind),
    /// The bot description placeholder shown at the top of an empty bot chat.
    BotInfo,
    Other,
}
impl Default for MessageContent {
    fn default() -> Self {
        Self::Text { web_page_file: None }
    }
}
impl MessageContent {
    pub fn is_chat_event(&self) -> bool {
        matches!(self, Self::ChatEvent(_))
    }

    pub fn is_bot_info(&self) -> bool {
        matches!(self, Self::BotInfo)
    }
}

/// The specific kind of a structural chat event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChatEventKind {
    /// This supergroup was upgraded from the given basic group.
    UpgradeFrom { basic_group_id: ChatId },
    /// This basic group was upgraded to the given supergroup.
    UpgradeTo { supergroup_id: ChatId },
    #[default]
    Other,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poll {
    pub is_closed: bool,
    pub is_quiz: bool,
    /// Whether the current user has already chosen an option.
    pub has_chosen_option: bool,
}
impl Poll {
    /// Quizzes can never be re-voted, and closed polls can't be changed.
    pub fn can_retract_vote(&self) -> bool {
        !self.is_closed && !self.is_quiz && self.has_chosen_option
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// The user ID of the shared contact, if they are a registered user.
    pub user_id: Option<UserId>,
    /// Whether the shared contact is the current user.
    pub is_self: bool,
    /// Whether the shared contact is already in the current user's contacts.
    ///
    /// `None` if the user is not known locally.
    pub is_known_contact: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sticker {
    pub sticker_id: i64,
    /// The ID of the sticker set, or 0 if the sticker doesn't belong to a set.
    pub set_id: i64,
    /// Whether this sticker is in the current user's favorites.
    pub is_favorite: bool,
    /// Whether the message should offer a shortcut to its sticker set.
    pub suggest_open_set: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub file_name: String,
    pub mime_type: String,
}
impl Document {
    pub fn is_language_pack(&self) -> bool {
        self.file_name.to_ascii_lowercase().ends_with(LANGUAGE_PACK_EXTENSION)
    }

    pub fn is_theme(&self) -> bool {
        self.file_name.to_ascii_lowercase().ends_with(THEME_EXTENSION)
    }
}

/// The type of a file, which decides where it can be saved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Animation,
    Video,
    Photo,
    Audio,
    VoiceNote,
    VideoNote,
    #[default]
    Document,
}

/// A file that has been fully downloaded to local storage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadedFile {
    pub file_id: i32,
    pub kind: FileKind,
    pub file_name: String,
    pub mime_type: String,
}

/// The transfer state of the main file attached to a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileState {
    pub file_id: i32,
    /// The expected size of the file in bytes.
    pub size: u64,
    pub is_uploading_active: bool,
    pub is_downloading_active: bool,
    pub is_downloading_completed: bool,
    pub downloaded_size: u64,
    /// Whether the file can be streamed from the cloud instead of being downloaded first.
    pub cloud_playback: bool,
    /// Whether the media player is currently playing this file.
    pub is_playing: bool,
}

/// One message of a group of messages that is presented as a single unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedMessage {
    pub id: super::MessageId,
    pub downloaded_file: Option<DownloadedFile>,
    /// Whether this message has a local file that may be deleted from the cache.
    pub has_deletable_file: bool,
}

/// How a group of messages is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumKind {
    #[default]
    None,
    Files,
    Playlist,
    Media,
    Mixed,
}

/// Whether and how a message's media can be added to the playback queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistAddMode {
    #[default]
    None,
    Add,
    /// The media is already queued and would be moved to play next.
    Move,
    /// The media was removed from the queue and can be restored.
    Restore,
}

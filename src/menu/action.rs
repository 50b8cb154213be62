//! The entries of a message action menu.

use serde::{Deserialize, Serialize};

/// Identifies what an action menu entry does when it is activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    Copy,
    SponsorInfo,
    SendNow,
    Reschedule,
    Resend,
    ShowSource,
    RetractVote,
    StopPoll,
    Call,
    AddContact,
    CallContact,
    StopLiveLocation,
    Directions,
    ShowOnFoursquare,
    ReplyWithDice,
    Reply,
    ViewReplies,
    Discuss,
    Share,
    Pin,
    Unpin,
    ViewStatistics,
    Edit,
    CopyLink,
    FavoriteSticker,
    UnfavoriteSticker,
    OpenStickerSet,
    SaveGif,
    SaveFile,
    InstallLanguage,
    InstallTheme,
    AddToPlaylist,
    PauseDownload,
    Download,
    DeleteFromCache,
    Report,
    Delete,
    RestrictMember,
    BlockMember,
    UnblockMember,
    ViewMessagesFromSender,
    EditAdminRights,
    /// Opens the overflow menu holding all secondary actions.
    More,
}

/// A localization key plus whatever arguments it needs.
///
/// Keys are resolved to text by the host; this crate never localizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Label {
    Key { key: &'static str },
    /// A key whose text depends on a count, e.g., "Save 3 GIFs".
    Plural { key: &'static str, count: usize },
    /// A key with one formatted argument, e.g., a sender name or a file size.
    WithArg { key: &'static str, arg: String },
}
impl Label {
    /// Returns the localization key of this label.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Key { key } | Self::Plural { key, .. } | Self::WithArg { key, .. } => key,
        }
    }
}
impl From<&'static str> for Label {
    fn from(key: &'static str) -> Self {
        Self::Key { key }
    }
}

/// One entry in an action menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub id: ActionId,
    pub label: Label,
    pub icon: &'static str,
}
impl ActionItem {
    pub fn new(id: ActionId, label: impl Into<Label>, icon: &'static str) -> Self {
        Self { id, label: label.into(), icon }
    }
}

/// Localization keys of menu labels.
pub mod label {
    pub const COPY: &str = "Copy";
    pub const SPONSOR_INFO: &str = "SponsoredInfoMenu";
    pub const SEND_NOW: &str = "SendNow";
    pub const RESCHEDULE: &str = "Reschedule";
    pub const RESEND: &str = "Resend";
    pub const SHOW_SOURCE: &str = "ShowSourceMessage";
    pub const RETRACT_VOTE: &str = "RetractVote";
    pub const STOP_POLL: &str = "StopPoll";
    pub const STOP_QUIZ: &str = "StopQuiz";
    pub const CALL_AGAIN: &str = "CallAgain";
    pub const CALL_BACK: &str = "CallBack";
    pub const ADD_CONTACT: &str = "AddContact";
    pub const CALL: &str = "Call";
    pub const STOP_LIVE_LOCATION: &str = "StopSharingLiveLocation";
    pub const DIRECTIONS: &str = "Directions";
    pub const SHOW_ON_FOURSQUARE: &str = "ShowOnFoursquare";
    pub const SEND_DART: &str = "SendDart";
    pub const SEND_DICE: &str = "SendDice";
    pub const SEND_UNKNOWN_DICE: &str = "SendUnknownDice";
    pub const REPLY: &str = "Reply";
    pub const VIEW_X_COMMENTS: &str = "ViewXComments";
    pub const VIEW_X_REPLIES: &str = "ViewXReplies";
    pub const DISCUSS: &str = "DiscussMessage";
    pub const SHARE: &str = "Share";
    pub const PIN: &str = "MessagePin";
    pub const UNPIN: &str = "MessageUnpin";
    pub const PIN_FILES: &str = "MessagePinFiles";
    pub const UNPIN_FILES: &str = "MessageUnpinFiles";
    pub const PIN_PLAYLIST: &str = "MessagePinPlaylist";
    pub const UNPIN_PLAYLIST: &str = "MessageUnpinPlaylist";
    pub const PIN_ALBUM: &str = "MessagePinAlbum";
    pub const UNPIN_ALBUM: &str = "MessageUnpinAlbum";
    pub const VIEW_STATS: &str = "ViewStats";
    pub const EDIT: &str = "edit";
    pub const COPY_LINK: &str = "CopyLink";
    pub const ADD_TO_FAVORITES: &str = "AddToFavorites";
    pub const REMOVE_FROM_FAVORITES: &str = "RemoveFromFavorites";
    pub const OPEN_STICKER_SET: &str = "OpenStickerSet";
    pub const SAVE_GIF: &str = "SaveGif";
    pub const SAVE_X_GIFS: &str = "SaveXGifs";
    pub const SAVE_TO_GALLERY: &str = "SaveToGallery";
    pub const SAVE_X_TO_GALLERY: &str = "SaveXToGallery";
    pub const SAVE_TO_MUSIC: &str = "SaveToMusic";
    pub const SAVE_X_TO_MUSIC: &str = "SaveXToMusic";
    pub const SAVE_TO_DOWNLOADS: &str = "SaveToDownloads";
    pub const SAVE_X_TO_DOWNLOADS: &str = "SaveXToDownloads";
    pub const INSTALL_LANGUAGE: &str = "LanguageInstall";
    pub const INSTALL_THEME: &str = "ThemeInstallDone";
    pub const PLAYLIST_PLAY_NEXT: &str = "PlayListPlayNext";
    pub const PLAYLIST_RESTORE: &str = "PlayListRestore";
    pub const PLAYLIST_ADD: &str = "PlayListAdd";
    pub const CLOUD_PAUSE: &str = "CloudPause";
    pub const CLOUD_RESUME: &str = "CloudResume";
    pub const CLOUD_DOWNLOAD: &str = "CloudDownload";
    pub const DELETE_FROM_CACHE: &str = "DeleteFromCache";
    pub const REPORT: &str = "MessageReport";
    pub const DELETE: &str = "Delete";
    pub const EDIT_CHANNEL_RESTRICTIONS: &str = "EditChannelRestrictions";
    pub const EDIT_GROUP_RESTRICTIONS: &str = "EditGroupRestrictions";
    pub const EDIT_USER_RESTRICTIONS: &str = "EditUserRestrictions";
    pub const BAN_CHANNEL: &str = "BanChannel";
    pub const BAN_CHAT: &str = "BanChat";
    pub const RESTRICT_USER: &str = "RestrictUser";
    pub const VIEW_RESTRICTIONS: &str = "ViewRestrictions";
    pub const CHANNEL_REMOVE_USER: &str = "ChannelRemoveUser";
    pub const REMOVE_FROM_GROUP: &str = "RemoveFromGroup";
    pub const REMOVE_RESTRICTIONS: &str = "RemoveRestrictions";
    pub const UNBAN_MEMBER_BOT: &str = "UnbanMemberBot";
    pub const UNBAN_MEMBER_CHANNEL: &str = "UnbanMemberChannel";
    pub const UNBAN_MEMBER_GROUP: &str = "UnbanMemberGroup";
    pub const UNBAN_MEMBER: &str = "UnbanMember";
    pub const VIEW_MESSAGES_FROM_ANONYMOUS_ADMINS: &str = "ViewMessagesFromAnonymousAdmins";
    pub const VIEW_MESSAGES_FROM_YOU: &str = "ViewMessagesFromYou";
    pub const VIEW_MESSAGES_FROM_CHAT: &str = "ViewMessagesFromChat";
    pub const VIEW_MESSAGES_FROM_USER: &str = "ViewMessagesFromUser";
    pub const EDIT_ADMIN_RIGHTS: &str = "EditAdminRights";
    pub const VIEW_ADMIN_RIGHTS: &str = "ViewAdminRights";
    pub const MORE: &str = "MoreMessageOptions";
}

/// Keys of menu icons.
pub mod icon {
    pub const COPY: &str = "baseline_content_copy_24";
    pub const INFO: &str = "baseline_info_24";
    pub const SEND: &str = "baseline_send_24";
    pub const DATE_RANGE: &str = "baseline_date_range_24";
    pub const REPEAT: &str = "baseline_repeat_24";
    pub const FORUM: &str = "baseline_forum_24";
    pub const HELP: &str = "baseline_help_24";
    pub const POLL: &str = "baseline_poll_24";
    pub const PHONE: &str = "baseline_phone_24";
    pub const PERSON_ADD: &str = "baseline_person_add_24";
    pub const REMOVE_CIRCLE: &str = "baseline_remove_circle_24";
    pub const DIRECTIONS: &str = "baseline_directions_24";
    pub const FOURSQUARE: &str = "templarian_baseline_foursquare_24";
    pub const GPS_FIXED: &str = "baseline_gps_fixed_24";
    pub const CASINO: &str = "baseline_casino_24";
    pub const REPLY: &str = "baseline_reply_24";
    pub const REPLY_ALL: &str = "baseline_reply_all_24";
    pub const COMMENTS: &str = "outline_templarian_comment_multiple_24";
    pub const FORWARD: &str = "baseline_forward_24";
    pub const PIN: &str = "deproko_baseline_pin_24";
    pub const UNPIN: &str = "deproko_baseline_pin_undo_24";
    pub const BAR_CHART: &str = "baseline_bar_chart_24";
    pub const EDIT: &str = "baseline_edit_24";
    pub const LINK: &str = "baseline_link_24";
    pub const STAR_BORDER: &str = "baseline_star_border_24";
    pub const STAR: &str = "baseline_star_24";
    pub const STICKERS: &str = "deproko_baseline_stickers_24";
    pub const GIF: &str = "deproko_baseline_gif_24";
    pub const IMAGE: &str = "baseline_image_24";
    pub const MUSIC_NOTE: &str = "baseline_music_note_24";
    pub const LANGUAGE: &str = "baseline_language_24";
    pub const PALETTE: &str = "baseline_palette_24";
    pub const FILE_DOWNLOAD: &str = "baseline_file_download_24";
    pub const QUEUE_MUSIC: &str = "baseline_queue_music_24";
    pub const PLAYLIST_ADD: &str = "baseline_playlist_add_24";
    pub const CLOUD_PAUSE: &str = "baseline_cloud_pause_24";
    pub const CLOUD_DOWNLOAD: &str = "baseline_cloud_download_24";
    pub const BROOM: &str = "templarian_baseline_broom_24";
    pub const REPORT: &str = "baseline_report_24";
    pub const DELETE: &str = "baseline_delete_24";
    pub const BLOCK: &str = "baseline_block_24";
    pub const PERSON: &str = "baseline_person_24";
    pub const GROUP: &str = "baseline_group_24";
    pub const BULLHORN: &str = "baseline_bullhorn_24";
    pub const STARS: &str = "baseline_stars_24";
    pub const MORE: &str = "baseline_more_horiz_24";
}

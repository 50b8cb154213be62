//! The decision table of the action menu.
//!
//! Each rule inspects the message and context independently and appends
//! (or counts) its actions; several rules may fire for one message.
//! Order matters, as it decides the on-screen order of the actions.

use std::ops::ControlFlow;

use bytesize::ByteSize;

use crate::message::{
    AlbumKind, ChatMember, FileKind, MemberStatus, MessageContent, MessageFacade,
    MessageSender, MessageState, PlaylistAddMode, EMOJI_DART, EMOJI_DICE,
};

use super::{
    action::{icon, label, ActionId, ActionItem, Label},
    context::{ActionContext, SenderContext},
    permissions::{restrict_mode, RestrictMode},
    resolver::{MenuBuilder, MenuTag},
};

pub type RuleFn = fn(&mut MenuBuilder, &MessageFacade, &ActionContext) -> ControlFlow<()>;

/// One entry of the decision table.
pub struct MenuRule {
    pub name: &'static str,
    /// Appends or counts this rule's actions.
    /// Returning `Break` ends the whole resolution immediately.
    pub apply: RuleFn,
}

/// All rules, in evaluation order.
pub static RULES: &[MenuRule] = &[
    MenuRule { name: "sponsored", apply: sponsored },
    MenuRule { name: "delivery", apply: delivery },
    MenuRule { name: "content", apply: content },
    MenuRule { name: "reply", apply: reply },
    MenuRule { name: "thread", apply: thread },
    MenuRule { name: "share", apply: share },
    MenuRule { name: "pin", apply: pin },
    MenuRule { name: "stats_and_edit", apply: stats_and_edit },
    MenuRule { name: "copy", apply: copy },
    MenuRule { name: "sticker", apply: sticker },
    MenuRule { name: "downloaded_files", apply: downloaded_files },
    MenuRule { name: "download_state", apply: download_state },
    MenuRule { name: "cache", apply: cache },
    MenuRule { name: "report", apply: report },
    MenuRule { name: "delete", apply: delete },
    MenuRule { name: "admin_tools", apply: admin_tools },
    MenuRule { name: "messages_from_sender", apply: messages_from_sender },
];

/// Returns the rule with the given name.
pub fn rule(name: &str) -> Option<&'static MenuRule> {
    RULES.iter().find(|r| r.name == name)
}

const CONTINUE: ControlFlow<()> = ControlFlow::Continue(());


/// Sponsored messages only ever offer copying and sponsor info.
fn sponsored(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if !msg.is_sponsored() {
        return CONTINUE;
    }
    b.push(ActionItem::new(ActionId::Copy, label::COPY, icon::COPY));
    b.push(ActionItem::new(ActionId::SponsorInfo, label::SPONSOR_INFO, icon::INFO));
    ControlFlow::Break(())
}

fn delivery(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if msg.is_scheduled() && msg.is_sent() {
        b.primary(ActionItem::new(ActionId::SendNow, label::SEND_NOW, icon::SEND));
        b.primary(ActionItem::new(ActionId::Reschedule, label::RESCHEDULE, icon::DATE_RANGE));
    }
    if msg.can_resend() {
        b.primary(ActionItem::new(ActionId::Resend, label::RESEND, icon::REPEAT));
    }
    if msg.state.contains(MessageState::HasSourceMessage) {
        b.primary(ActionItem::new(ActionId::ShowSource, label::SHOW_SOURCE, icon::FORUM));
    }
    CONTINUE
}

fn content(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if !b.is_primary() {
        return CONTINUE;
    }
    match &msg.content {
        MessageContent::Poll(poll) if !poll.is_closed => {
            let poll_icon = if poll.is_quiz { icon::HELP } else { icon::POLL };
            if poll.can_retract_vote() {
                b.push(ActionItem::new(ActionId::RetractVote, label::RETRACT_VOTE, poll_icon));
            }
            if msg.can(crate::message::MessageAbilities::CanBeEdited) {
                let stop = if poll.is_quiz { label::STOP_QUIZ } else { label::STOP_POLL };
                b.push(ActionItem::new(ActionId::StopPoll, stop, poll_icon));
            }
        }
        MessageContent::Call { duration } => {
            let call = if msg.is_outgoing() || *duration > 0 { label::CALL_AGAIN } else { label::CALL_BACK };
            b.push(ActionItem::new(ActionId::Call, call, icon::PHONE));
        }
        MessageContent::Contact(contact) => {
            if contact.user_id.is_some() {
                // No actions at all for a contact card of oneself.
                if contact.is_self {
                    return CONTINUE;
                }
                if contact.is_known_contact == Some(false) {
                    b.push(ActionItem::new(ActionId::AddContact, label::ADD_CONTACT, icon::PERSON_ADD));
                }
            }
            b.push(ActionItem::new(ActionId::CallContact, label::CALL, icon::PHONE));
        }
        MessageContent::Location { can_stop_live } => {
            if *can_stop_live {
                b.push(ActionItem::new(ActionId::StopLiveLocation, label::STOP_LIVE_LOCATION, icon::REMOVE_CIRCLE));
            }
            b.push(ActionItem::new(ActionId::Directions, label::DIRECTIONS, icon::DIRECTIONS));
        }
        MessageContent::Venue { provider, venue_id } => {
            b.push(ActionItem::new(ActionId::Directions, label::DIRECTIONS, icon::DIRECTIONS));
            if provider == "foursquare" && !venue_id.is_empty() {
                b.push(ActionItem::new(ActionId::ShowOnFoursquare, label::SHOW_ON_FOURSQUARE, icon::FOURSQUARE));
            }
        }
        _ => { }
    }
    CONTINUE
}

fn reply(b: &mut MenuBuilder, msg: &MessageFacade, ctx: &ActionContext) -> ControlFlow<()> {
    if !(ctx.permissions.can_write_messages && msg.is_sent() && msg.can_reply_to()) {
        return CONTINUE;
    }
    if let MessageContent::Dice { emoji } = &msg.content
        && ctx.permissions.can_send_stickers
    {
        let (dice_label, dice_icon) = if emoji == EMOJI_DART {
            (label::SEND_DART, icon::GPS_FIXED)
        } else if emoji == EMOJI_DICE {
            (label::SEND_DICE, icon::CASINO)
        } else {
            (label::SEND_UNKNOWN_DICE, icon::CASINO)
        };
        b.primary(ActionItem::new(ActionId::ReplyWithDice, dice_label, dice_icon));
    }
    b.primary(ActionItem::new(ActionId::Reply, label::REPLY, icon::REPLY));
    CONTINUE
}

fn thread(b: &mut MenuBuilder, msg: &MessageFacade, ctx: &ActionContext) -> ControlFlow<()> {
    if ctx.config.comments_supported {
        if msg.reply_count > 0 {
            let (key, replies_icon) = if msg.sender.is_channel() {
                (label::VIEW_X_COMMENTS, icon::COMMENTS)
            } else {
                (label::VIEW_X_REPLIES, icon::REPLY_ALL)
            };
            b.primary(ActionItem::new(
                ActionId::ViewReplies,
                Label::Plural { key, count: msg.reply_count as usize },
                replies_icon,
            ));
        }
    } else if msg.state.contains(MessageState::ThreadChannelPost) {
        b.primary(ActionItem::new(ActionId::Discuss, label::DISCUSS, icon::COMMENTS));
    }
    CONTINUE
}

fn share(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if msg.can_be_forwarded() && msg.is_sent() {
        b.primary(ActionItem::new(ActionId::Share, label::SHARE, icon::FORWARD));
    }
    CONTINUE
}

fn pin(b: &mut MenuBuilder, msg: &MessageFacade, ctx: &ActionContext) -> ControlFlow<()> {
    if !(ctx.permissions.can_pin_messages && msg.is_sent()) {
        return CONTINUE;
    }
    let (pin_label, unpin_label) = match msg.album_kind {
        AlbumKind::Files => (label::PIN_FILES, label::UNPIN_FILES),
        AlbumKind::Playlist => (label::PIN_PLAYLIST, label::UNPIN_PLAYLIST),
        AlbumKind::Media => (label::PIN_ALBUM, label::UNPIN_ALBUM),
        AlbumKind::None | AlbumKind::Mixed => (label::PIN, label::UNPIN),
    };
    if msg.pinned_count > 0 {
        b.primary(ActionItem::new(ActionId::Unpin, unpin_label, icon::UNPIN));
    } else {
        b.primary(ActionItem::new(ActionId::Pin, pin_label, icon::PIN));
    }
    CONTINUE
}

fn stats_and_edit(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if msg.can_view_statistics() {
        b.primary(ActionItem::new(ActionId::ViewStatistics, label::VIEW_STATS, icon::BAR_CHART));
    }
    if msg.can_edit_text() && msg.is_sent() {
        b.primary(ActionItem::new(ActionId::Edit, label::EDIT, icon::EDIT));
    }
    CONTINUE
}

fn copy(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    use crate::message::MessageAbilities;
    if msg.can(MessageAbilities::CanCopyLink) {
        b.primary(ActionItem::new(ActionId::CopyLink, label::COPY_LINK, icon::LINK));
    }
    if msg.can_be_saved() && msg.can(MessageAbilities::CanCopyText) {
        b.primary(ActionItem::new(ActionId::Copy, label::COPY, icon::COPY));
    }
    CONTINUE
}

fn sticker(b: &mut MenuBuilder, msg: &MessageFacade, ctx: &ActionContext) -> ControlFlow<()> {
    let MessageContent::Sticker(sticker) = &msg.content else { return CONTINUE };
    if msg.message_count() != 1 {
        return CONTINUE;
    }
    if ctx.config.favorite_stickers_without_sets || sticker.set_id != 0 {
        let item = if sticker.is_favorite {
            ActionItem::new(ActionId::UnfavoriteSticker, label::REMOVE_FROM_FAVORITES, icon::STAR)
        } else {
            ActionItem::new(ActionId::FavoriteSticker, label::ADD_TO_FAVORITES, icon::STAR_BORDER)
        };
        b.primary(item);
    }
    if sticker.suggest_open_set {
        b.primary(ActionItem::new(ActionId::OpenStickerSet, label::OPEN_STICKER_SET, icon::STICKERS));
    }
    CONTINUE
}

/// Picks the singular key for single messages and the plural key otherwise.
fn save_label(message_count: usize, single: &'static str, plural: &'static str, file_count: usize) -> Label {
    if message_count == 1 {
        single.into()
    } else {
        Label::Plural { key: plural, count: file_count }
    }
}

fn downloaded_files(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if !(b.is_primary() && msg.is_sent()) {
        return CONTINUE;
    }
    // Self-destructing media can only be saved by its sender.
    if msg.is_hot() && !msg.is_outgoing() {
        return CONTINUE;
    }
    let message_count = msg.message_count();
    let files = msg.downloaded_files();
    if let Some(base) = files.first() {
        let file_count = files.len();
        let can_save = msg.can_be_saved();
        if can_save && base.kind == FileKind::Animation {
            b.push(ActionItem::new(
                ActionId::SaveGif,
                save_label(message_count, label::SAVE_GIF, label::SAVE_X_GIFS, file_count),
                icon::GIF,
            ));
        }
        match base.kind {
            FileKind::VoiceNote | FileKind::VideoNote => { }
            FileKind::Animation | FileKind::Video | FileKind::Photo => {
                if can_save {
                    b.push(ActionItem::new(
                        ActionId::SaveFile,
                        save_label(message_count, label::SAVE_TO_GALLERY, label::SAVE_X_TO_GALLERY, file_count),
                        icon::IMAGE,
                    ));
                }
            }
            FileKind::Audio => {
                if can_save {
                    b.push(ActionItem::new(
                        ActionId::SaveFile,
                        save_label(message_count, label::SAVE_TO_MUSIC, label::SAVE_X_TO_MUSIC, file_count),
                        icon::MUSIC_NOTE,
                    ));
                }
            }
            FileKind::Document => {
                if let MessageContent::Document(document) = &msg.content
                    && message_count == 1
                {
                    if document.is_language_pack() {
                        b.push(ActionItem::new(ActionId::InstallLanguage, label::INSTALL_LANGUAGE, icon::LANGUAGE));
                    }
                    if document.is_theme() {
                        b.push(ActionItem::new(ActionId::InstallTheme, label::INSTALL_THEME, icon::PALETTE));
                    }
                }
                if can_save {
                    b.push(ActionItem::new(
                        ActionId::SaveFile,
                        save_label(message_count, label::SAVE_TO_DOWNLOADS, label::SAVE_X_TO_DOWNLOADS, file_count),
                        icon::FILE_DOWNLOAD,
                    ));
                }
            }
        }
        b.set_tag(MenuTag::DownloadedFiles(files));
    }
    if message_count == 1 {
        let playlist_item = match msg.playlist_add_mode {
            PlaylistAddMode::None => None,
            PlaylistAddMode::Move => Some((label::PLAYLIST_PLAY_NEXT, icon::QUEUE_MUSIC)),
            PlaylistAddMode::Restore => Some((label::PLAYLIST_RESTORE, icon::PLAYLIST_ADD)),
            PlaylistAddMode::Add => Some((label::PLAYLIST_ADD, icon::PLAYLIST_ADD)),
        };
        if let Some((playlist_label, playlist_icon)) = playlist_item {
            b.push(ActionItem::new(ActionId::AddToPlaylist, playlist_label, playlist_icon));
        }
    }
    CONTINUE
}

fn download_state(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    let Some(file) = &msg.file else { return CONTINUE };
    if file.is_uploading_active || !file.cloud_playback || file.is_downloading_completed {
        return CONTINUE;
    }
    if file.is_downloading_active {
        // The file that is being played back can't be paused from here.
        if !file.is_playing {
            b.secondary(|| ActionItem::new(ActionId::PauseDownload, label::CLOUD_PAUSE, icon::CLOUD_PAUSE));
        }
    } else {
        b.secondary(|| {
            let download_label = if file.downloaded_size > 0 {
                label::CLOUD_RESUME.into()
            } else {
                Label::WithArg { key: label::CLOUD_DOWNLOAD, arg: ByteSize(file.size).to_string() }
            };
            ActionItem::new(ActionId::Download, download_label, icon::CLOUD_DOWNLOAD)
        });
    }
    CONTINUE
}

fn cache(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if !msg.chat.kind.is_secret() && msg.has_deletable_files() {
        b.secondary(|| ActionItem::new(ActionId::DeleteFromCache, label::DELETE_FROM_CACHE, icon::BROOM));
    }
    CONTINUE
}

fn report(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if msg.can_be_reported() {
        b.secondary(|| ActionItem::new(ActionId::Report, label::REPORT, icon::REPORT));
    }
    CONTINUE
}

fn delete(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if msg.can_be_deleted_for_somebody() {
        b.primary(ActionItem::new(ActionId::Delete, label::DELETE, icon::DELETE));
    }
    CONTINUE
}

/// Returns the label of the "restrict member" action for the given restrict mode.
///
/// Panics on [`RestrictMode::None`], which never offers that action.
pub fn restrict_label(mode: RestrictMode, sender: &MessageSender) -> &'static str {
    match mode {
        RestrictMode::Edit => match sender {
            MessageSender::Chat { is_channel: true, .. } => label::EDIT_CHANNEL_RESTRICTIONS,
            MessageSender::Chat { .. } => label::EDIT_GROUP_RESTRICTIONS,
            MessageSender::User { .. } => label::EDIT_USER_RESTRICTIONS,
        },
        RestrictMode::New => match sender {
            MessageSender::Chat { is_channel: true, .. } => label::BAN_CHANNEL,
            MessageSender::Chat { .. } => label::BAN_CHAT,
            MessageSender::User { .. } => label::RESTRICT_USER,
        },
        RestrictMode::View => label::VIEW_RESTRICTIONS,
        RestrictMode::None => unreachable!("BUG: no restrict action exists for RestrictMode::None"),
    }
}

fn unblock_label(status: &MemberStatus, sender: &MessageSender) -> &'static str {
    if matches!(status, MemberStatus::Restricted { .. }) {
        label::REMOVE_RESTRICTIONS
    } else if sender.is_bot() {
        label::UNBAN_MEMBER_BOT
    } else if sender.is_channel() {
        label::UNBAN_MEMBER_CHANNEL
    } else if sender.is_chat() {
        label::UNBAN_MEMBER_GROUP
    } else {
        label::UNBAN_MEMBER
    }
}

fn admin_tools(b: &mut MenuBuilder, msg: &MessageFacade, ctx: &ActionContext) -> ControlFlow<()> {
    let Some(me) = ctx.permissions.my_status.as_ref().filter(|s| s.is_admin()) else {
        return CONTINUE;
    };
    if msg.is_sent_by_chat_itself() {
        return CONTINUE;
    }
    match &ctx.sender {
        SenderContext::Resolved(member) => admin_member_actions(b, msg, me, member),
        // One restrict action plus one block/unblock action, once the sender is known.
        SenderContext::Pending => b.placeholders(2),
        SenderContext::Unavailable => { }
    }
    CONTINUE
}

fn admin_member_actions(b: &mut MenuBuilder, msg: &MessageFacade, me: &MemberStatus, member: &ChatMember) {
    let mode = restrict_mode(me, &member.status);
    if mode == RestrictMode::None {
        return;
    }
    let is_channel = msg.chat.kind.is_channel();
    if !is_channel && !(mode == RestrictMode::Edit && member.member_id.is_chat()) {
        b.secondary(|| ActionItem::new(ActionId::RestrictMember, restrict_label(mode, &msg.sender), icon::BLOCK));
    }
    if mode == RestrictMode::View {
        return;
    }
    if member.status.is_member() {
        b.secondary(|| {
            let remove = if is_channel { label::CHANNEL_REMOVE_USER } else { label::REMOVE_FROM_GROUP };
            ActionItem::new(ActionId::BlockMember, remove, icon::REMOVE_CIRCLE)
        });
    } else if member.status.is_restricted_or_banned() {
        b.secondary(|| ActionItem::new(
            ActionId::UnblockMember,
            unblock_label(&member.status, &msg.sender),
            icon::REMOVE_CIRCLE,
        ));
    }
}

fn messages_from_sender(b: &mut MenuBuilder, msg: &MessageFacade, _: &ActionContext) -> ControlFlow<()> {
    if !msg.chat.kind.is_multi_chat() {
        return CONTINUE;
    }
    b.secondary(|| {
        let name = msg.sender_short_name.clone();
        let (from_label, from_icon) = if msg.state.contains(MessageState::AnonymousAdmin) {
            (label::VIEW_MESSAGES_FROM_ANONYMOUS_ADMINS.into(), icon::GROUP)
        } else if msg.is_outgoing() {
            (label::VIEW_MESSAGES_FROM_YOU.into(), icon::PERSON)
        } else if msg.sender.is_chat() {
            let chat_icon = if msg.sender.is_channel() { icon::BULLHORN } else { icon::GROUP };
            (Label::WithArg { key: label::VIEW_MESSAGES_FROM_CHAT, arg: name }, chat_icon)
        } else {
            (Label::WithArg { key: label::VIEW_MESSAGES_FROM_USER, arg: name }, icon::PERSON)
        };
        ActionItem::new(ActionId::ViewMessagesFromSender, from_label, from_icon)
    });
    CONTINUE
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        menu::{context::ChatPermissions, resolver::Pass},
        message::{fixtures::*, *},
    };

    /// Runs a single rule in the given pass.
    fn run(name: &str, pass: Pass, msg: &MessageFacade, ctx: &ActionContext) -> MenuBuilder {
        let mut b = MenuBuilder::new(pass);
        let _ = (rule(name).expect("unknown rule").apply)(&mut b, msg, ctx);
        b
    }

    fn ids(b: &MenuBuilder) -> Vec<ActionId> {
        b.items().iter().map(|i| i.id).collect()
    }

    fn labels(b: &MenuBuilder) -> Vec<&'static str> {
        b.items().iter().map(|i| i.label.key()).collect()
    }

    fn admin_context(sender: SenderContext) -> ActionContext {
        ActionContext {
            permissions: ChatPermissions {
                my_status: Some(MemberStatus::Creator { is_member: true }),
                ..Default::default()
            },
            sender,
            ..Default::default()
        }
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, r) in RULES.iter().enumerate() {
            assert!(RULES[i + 1..].iter().all(|other| other.name != r.name), "duplicate rule {}", r.name);
        }
    }

    #[test]
    fn scheduled_sent_message_offers_send_now_then_reschedule() {
        let mut msg = private_text_message();
        msg.state |= MessageState::Scheduled;
        let b = run("delivery", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(ids(&b), vec![ActionId::SendNow, ActionId::Reschedule]);
        assert!(run("delivery", Pass::Secondary, &msg, &ActionContext::default()).items().is_empty());

        msg.state |= MessageState::NotSent;
        assert!(run("delivery", Pass::Primary, &msg, &ActionContext::default()).items().is_empty());
    }

    #[test]
    fn quiz_and_poll_labels() {
        let abilities = MessageAbilities::CanBeEdited;
        let quiz = private_message(MessageContent::Poll(Poll { is_quiz: true, ..Default::default() }), abilities);
        let b = run("content", Pass::Primary, &quiz, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::STOP_QUIZ]);
        assert_eq!(b.items()[0].icon, icon::HELP);

        let poll = private_message(
            MessageContent::Poll(Poll { has_chosen_option: true, ..Default::default() }),
            abilities,
        );
        let b = run("content", Pass::Primary, &poll, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::RETRACT_VOTE, label::STOP_POLL]);

        let closed = private_message(MessageContent::Poll(Poll { is_closed: true, ..Default::default() }), abilities);
        assert!(run("content", Pass::Primary, &closed, &ActionContext::default()).items().is_empty());
    }

    #[test]
    fn call_label_depends_on_direction_and_duration() {
        let missed = private_message(MessageContent::Call { duration: 0 }, MessageAbilities::empty());
        assert_eq!(labels(&run("content", Pass::Primary, &missed, &ActionContext::default())), vec![label::CALL_BACK]);
        let talked = private_message(MessageContent::Call { duration: 12 }, MessageAbilities::empty());
        assert_eq!(labels(&run("content", Pass::Primary, &talked, &ActionContext::default())), vec![label::CALL_AGAIN]);
        let mut outgoing = missed.clone();
        outgoing.state |= MessageState::Outgoing;
        assert_eq!(labels(&run("content", Pass::Primary, &outgoing, &ActionContext::default())), vec![label::CALL_AGAIN]);
    }

    #[test]
    fn contact_actions() {
        let stranger = Contact { user_id: Some(UserId(3)), is_self: false, is_known_contact: Some(false) };
        let msg = private_message(MessageContent::Contact(stranger.clone()), MessageAbilities::empty());
        let b = run("content", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(ids(&b), vec![ActionId::AddContact, ActionId::CallContact]);

        let myself = Contact { is_self: true, ..stranger.clone() };
        let msg = private_message(MessageContent::Contact(myself), MessageAbilities::empty());
        assert!(run("content", Pass::Primary, &msg, &ActionContext::default()).items().is_empty());

        let unknown = Contact { is_known_contact: None, ..stranger };
        let msg = private_message(MessageContent::Contact(unknown), MessageAbilities::empty());
        assert_eq!(ids(&run("content", Pass::Primary, &msg, &ActionContext::default())), vec![ActionId::CallContact]);

        let unregistered = Contact::default();
        let msg = private_message(MessageContent::Contact(unregistered), MessageAbilities::empty());
        assert_eq!(ids(&run("content", Pass::Primary, &msg, &ActionContext::default())), vec![ActionId::CallContact]);
    }

    #[test]
    fn venue_foursquare_requires_exact_provider_and_id() {
        let venue = |provider: &str, venue_id: &str| private_message(
            MessageContent::Venue { provider: provider.into(), venue_id: venue_id.into() },
            MessageAbilities::empty(),
        );
        let ctx = ActionContext::default();
        assert_eq!(
            ids(&run("content", Pass::Primary, &venue("foursquare", "4b5"), &ctx)),
            vec![ActionId::Directions, ActionId::ShowOnFoursquare],
        );
        assert_eq!(ids(&run("content", Pass::Primary, &venue("Foursquare", "4b5"), &ctx)), vec![ActionId::Directions]);
        assert_eq!(ids(&run("content", Pass::Primary, &venue("foursquare", ""), &ctx)), vec![ActionId::Directions]);
    }

    #[test]
    fn live_location_can_be_stopped() {
        let msg = private_message(MessageContent::Location { can_stop_live: true }, MessageAbilities::empty());
        assert_eq!(
            ids(&run("content", Pass::Primary, &msg, &ActionContext::default())),
            vec![ActionId::StopLiveLocation, ActionId::Directions],
        );
    }

    #[test]
    fn dice_reply_needs_sticker_permission() {
        let msg = private_message(MessageContent::Dice { emoji: EMOJI_DART.into() }, MessageAbilities::CanReplyTo);
        let mut ctx = ActionContext::default();
        ctx.permissions.can_write_messages = true;
        assert_eq!(ids(&run("reply", Pass::Primary, &msg, &ctx)), vec![ActionId::Reply]);

        ctx.permissions.can_send_stickers = true;
        let b = run("reply", Pass::Primary, &msg, &ctx);
        assert_eq!(labels(&b), vec![label::SEND_DART, label::REPLY]);
        assert_eq!(b.items()[0].icon, icon::GPS_FIXED);

        let dice = private_message(MessageContent::Dice { emoji: EMOJI_DICE.into() }, MessageAbilities::CanReplyTo);
        assert_eq!(labels(&run("reply", Pass::Primary, &dice, &ctx))[0], label::SEND_DICE);
        let other = private_message(MessageContent::Dice { emoji: "x".into() }, MessageAbilities::CanReplyTo);
        assert_eq!(labels(&run("reply", Pass::Primary, &other, &ctx))[0], label::SEND_UNKNOWN_DICE);
    }

    #[test]
    fn replies_or_discuss() {
        let mut msg = group_text_message();
        msg.reply_count = 3;
        msg.state |= MessageState::ThreadChannelPost;
        let b = run("thread", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(b.items()[0].label, Label::Plural { key: label::VIEW_X_REPLIES, count: 3 });

        msg.sender = MessageSender::Chat { id: ChatId(-5), is_channel: true };
        let b = run("thread", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(b.items()[0].label.key(), label::VIEW_X_COMMENTS);

        let mut ctx = ActionContext::default();
        ctx.config.comments_supported = false;
        assert_eq!(ids(&run("thread", Pass::Primary, &msg, &ctx)), vec![ActionId::Discuss]);
    }

    #[test]
    fn pin_label_follows_album_kind() {
        let mut ctx = ActionContext::default();
        ctx.permissions.can_pin_messages = true;
        let mut msg = group_text_message();
        msg.album_kind = AlbumKind::Playlist;
        assert_eq!(labels(&run("pin", Pass::Primary, &msg, &ctx)), vec![label::PIN_PLAYLIST]);
        msg.pinned_count = 1;
        msg.album_kind = AlbumKind::Media;
        assert_eq!(labels(&run("pin", Pass::Primary, &msg, &ctx)), vec![label::UNPIN_ALBUM]);
        msg.album_kind = AlbumKind::Mixed;
        assert_eq!(labels(&run("pin", Pass::Primary, &msg, &ctx)), vec![label::UNPIN]);
        assert!(run("pin", Pass::Secondary, &msg, &ctx).items().is_empty());
    }

    #[test]
    fn sticker_favorites_need_a_set_unless_configured() {
        let setless = Sticker { sticker_id: 1, set_id: 0, is_favorite: false, suggest_open_set: true };
        let msg = private_message(MessageContent::Sticker(setless), MessageAbilities::empty());
        let mut ctx = ActionContext::default();
        assert_eq!(ids(&run("sticker", Pass::Primary, &msg, &ctx)), vec![ActionId::OpenStickerSet]);

        ctx.config.favorite_stickers_without_sets = true;
        assert_eq!(
            ids(&run("sticker", Pass::Primary, &msg, &ctx)),
            vec![ActionId::FavoriteSticker, ActionId::OpenStickerSet],
        );

        let favorite = Sticker { set_id: 9, is_favorite: true, suggest_open_set: false, ..Default::default() };
        let msg = private_message(MessageContent::Sticker(favorite), MessageAbilities::empty());
        let b = run("sticker", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(ids(&b), vec![ActionId::UnfavoriteSticker]);
        assert_eq!(b.items()[0].icon, icon::STAR);
    }

    #[test]
    fn animation_album_offers_gif_and_gallery_saves() {
        let mut msg = private_message(MessageContent::Animation, MessageAbilities::CanBeSaved);
        msg.album = vec![grouped_file(1, FileKind::Animation), grouped_file(2, FileKind::Animation)];
        let b = run("downloaded_files", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(ids(&b), vec![ActionId::SaveGif, ActionId::SaveFile]);
        assert_eq!(b.items()[0].label, Label::Plural { key: label::SAVE_X_GIFS, count: 2 });
        assert_eq!(b.items()[1].label, Label::Plural { key: label::SAVE_X_TO_GALLERY, count: 2 });
    }

    #[test]
    fn voice_notes_have_no_save_action_but_are_still_tagged() {
        let mut msg = private_message(MessageContent::VoiceNote, MessageAbilities::CanBeSaved);
        msg.album = vec![grouped_file(1, FileKind::VoiceNote)];
        msg.playlist_add_mode = PlaylistAddMode::Move;
        let b = run("downloaded_files", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::PLAYLIST_PLAY_NEXT]);
        assert!(matches!(b.tag(), Some(MenuTag::DownloadedFiles(files)) if files.len() == 1));
    }

    #[test]
    fn language_pack_document_is_installable() {
        let doc = Document { file_name: "lang.xml".into(), mime_type: "text/xml".into() };
        let mut msg = private_message(MessageContent::Document(doc), MessageAbilities::CanBeSaved);
        msg.album = vec![grouped_file(1, FileKind::Document)];
        let b = run("downloaded_files", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::INSTALL_LANGUAGE, label::SAVE_TO_DOWNLOADS]);
    }

    #[test]
    fn hot_media_is_only_saveable_by_its_sender() {
        let mut msg = private_message(MessageContent::Photo, MessageAbilities::CanBeSaved);
        msg.album = vec![grouped_file(1, FileKind::Photo)];
        msg.state |= MessageState::Hot;
        assert!(run("downloaded_files", Pass::Primary, &msg, &ActionContext::default()).items().is_empty());
        msg.state |= MessageState::Outgoing;
        assert_eq!(
            labels(&run("downloaded_files", Pass::Primary, &msg, &ActionContext::default())),
            vec![label::SAVE_TO_GALLERY],
        );
    }

    #[test]
    fn download_state_is_secondary_only() {
        let mut msg = private_message(MessageContent::Audio, MessageAbilities::empty());
        msg.file = Some(FileState { size: 2048, cloud_playback: true, ..Default::default() });
        let b = run("download_state", Pass::Primary, &msg, &ActionContext::default());
        assert!(b.items().is_empty());
        assert_eq!(b.secondary_count(), 1);

        let b = run("download_state", Pass::Secondary, &msg, &ActionContext::default());
        assert_eq!(b.items()[0].label, Label::WithArg {
            key: label::CLOUD_DOWNLOAD,
            arg: ByteSize(2048).to_string(),
        });

        msg.file = Some(FileState { downloaded_size: 10, cloud_playback: true, ..Default::default() });
        let b = run("download_state", Pass::Secondary, &msg, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::CLOUD_RESUME]);

        msg.file = Some(FileState { is_downloading_active: true, is_playing: true, cloud_playback: true, ..Default::default() });
        let b = run("download_state", Pass::Primary, &msg, &ActionContext::default());
        assert_eq!(b.secondary_count(), 0);
    }

    #[test]
    fn cache_cleanup_is_not_offered_in_secret_chats() {
        let mut msg = private_text_message();
        msg.album = vec![GroupedMessage { has_deletable_file: true, ..Default::default() }];
        assert_eq!(run("cache", Pass::Primary, &msg, &ActionContext::default()).secondary_count(), 1);
        msg.chat.kind = ChatKind::Secret;
        assert_eq!(run("cache", Pass::Primary, &msg, &ActionContext::default()).secondary_count(), 0);
    }

    #[test]
    fn unresolved_sender_counts_two_admin_placeholders() {
        let msg = group_text_message();
        let b = run("admin_tools", Pass::Primary, &msg, &admin_context(SenderContext::Pending));
        assert_eq!(b.secondary_count(), 2);
        let b = run("admin_tools", Pass::Secondary, &msg, &admin_context(SenderContext::Pending));
        assert!(b.items().is_empty());
        let b = run("admin_tools", Pass::Primary, &msg, &admin_context(SenderContext::Unavailable));
        assert_eq!(b.secondary_count(), 0);
    }

    #[test]
    fn admin_tools_for_a_regular_member() {
        let msg = group_text_message();
        let member = ChatMember { member_id: msg.sender.clone(), status: MemberStatus::Member };
        let ctx = admin_context(SenderContext::Resolved(member));
        assert_eq!(run("admin_tools", Pass::Primary, &msg, &ctx).secondary_count(), 2);
        let b = run("admin_tools", Pass::Secondary, &msg, &ctx);
        assert_eq!(labels(&b), vec![label::RESTRICT_USER, label::REMOVE_FROM_GROUP]);
    }

    #[test]
    fn admin_tools_for_a_banned_bot() {
        let mut msg = group_text_message();
        msg.sender = MessageSender::User { id: UserId(99), is_bot: true };
        let member = ChatMember { member_id: msg.sender.clone(), status: MemberStatus::Banned };
        let b = run("admin_tools", Pass::Secondary, &msg, &admin_context(SenderContext::Resolved(member)));
        assert_eq!(labels(&b), vec![label::EDIT_USER_RESTRICTIONS, label::UNBAN_MEMBER_BOT]);
    }

    #[test]
    fn admin_tools_skip_messages_from_the_chat_itself() {
        let mut msg = group_text_message();
        msg.sender = MessageSender::Chat { id: GROUP_CHAT, is_channel: false };
        let b = run("admin_tools", Pass::Primary, &msg, &admin_context(SenderContext::Pending));
        assert_eq!(b.secondary_count(), 0);
    }

    #[test]
    #[should_panic]
    fn restrict_label_for_none_is_a_bug() {
        restrict_label(RestrictMode::None, &MessageSender::default());
    }

    #[test]
    fn messages_from_sender_labels() {
        let mut msg = group_text_message();
        let b = run("messages_from_sender", Pass::Secondary, &msg, &ActionContext::default());
        assert_eq!(b.items()[0].label, Label::WithArg { key: label::VIEW_MESSAGES_FROM_USER, arg: "Alice".into() });

        msg.sender = MessageSender::Chat { id: ChatId(-7), is_channel: true };
        let b = run("messages_from_sender", Pass::Secondary, &msg, &ActionContext::default());
        assert_eq!(b.items()[0].icon, icon::BULLHORN);

        msg.state |= MessageState::Outgoing;
        let b = run("messages_from_sender", Pass::Secondary, &msg, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::VIEW_MESSAGES_FROM_YOU]);

        msg.state |= MessageState::AnonymousAdmin;
        let b = run("messages_from_sender", Pass::Secondary, &msg, &ActionContext::default());
        assert_eq!(labels(&b), vec![label::VIEW_MESSAGES_FROM_ANONYMOUS_ADMINS]);

        let private = private_text_message();
        assert_eq!(run("messages_from_sender", Pass::Primary, &private, &ActionContext::default()).secondary_count(), 0);
    }
}

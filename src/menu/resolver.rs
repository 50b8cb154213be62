//! Resolves the ordered list of actions offered for a message.
//!
//! Resolution runs every rule of [`RULES`](super::rules::RULES) in order,
//! in one of two passes:
//! * The primary pass builds the always-visible actions and only *counts*
//!   the secondary (low-priority) actions.
//! * The secondary pass materializes just the secondary actions.
//!
//! If the primary pass counted more than one secondary action, a single
//! "More" entry is appended and the secondary pass is left to the host,
//! which calls [`resolve_more()`] once that entry is activated.
//! If it counted exactly one, that action is inlined right away.

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::debug;

use crate::message::{DownloadedFile, MessageFacade};

use super::{
    action::{icon, label, ActionId, ActionItem},
    context::ActionContext,
    rules::RULES,
};

/// Which of the two resolution passes is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    Primary,
    Secondary,
}

/// Opaque data returned alongside the actions, handed back to the host
/// when one of the actions is activated.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "files")]
pub enum MenuTag {
    /// All downloaded files of the message's group, for the save actions.
    DownloadedFiles(Vec<DownloadedFile>),
}

/// The result of resolving a message's action menu.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedMenu {
    pub actions: Vec<ActionItem>,
    pub tag: Option<MenuTag>,
    /// How many secondary actions the primary pass counted.
    pub secondary_count: usize,
}
impl ResolvedMenu {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn ids(&self) -> Vec<ActionId> {
        self.actions.iter().map(|a| a.id).collect()
    }
}

/// An append-only list of actions being built during one pass.
#[derive(Debug)]
pub struct MenuBuilder {
    pass: Pass,
    items: Vec<ActionItem>,
    secondary_count: usize,
    tag: Option<MenuTag>,
}

impl MenuBuilder {
    pub fn new(pass: Pass) -> Self {
        Self {
            pass,
            items: Vec::new(),
            secondary_count: 0,
            tag: None,
        }
    }

    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn is_primary(&self) -> bool {
        self.pass == Pass::Primary
    }

    /// Appends an action regardless of the current pass.
    pub fn push(&mut self, item: ActionItem) {
        self.items.push(item);
    }

    /// Appends an action that is only shown in the primary pass.
    pub fn primary(&mut self, item: ActionItem) {
        if self.is_primary() {
            self.items.push(item);
        }
    }

    /// Appends a secondary action in the secondary pass,
    /// or just counts it in the primary pass.
    pub fn secondary(&mut self, make_item: impl FnOnce() -> ActionItem) {
        match self.pass {
            Pass::Primary => self.secondary_count += 1,
            Pass::Secondary => self.items.push(make_item()),
        }
    }

    /// Counts `count` secondary actions that can't be materialized yet.
    pub fn placeholders(&mut self, count: usize) {
        if self.is_primary() {
            self.secondary_count += count;
        }
    }

    pub fn set_tag(&mut self, tag: MenuTag) {
        self.tag = Some(tag);
    }

    pub fn tag(&self) -> Option<&MenuTag> {
        self.tag.as_ref()
    }

    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    pub fn secondary_count(&self) -> usize {
        self.secondary_count
    }

    /// Runs all rules in order until one of them ends the resolution early.
    ///
    /// Returns `false` if resolution was ended early.
    fn run_rules(&mut self, message: &MessageFacade, context: &ActionContext) -> bool {
        for rule in RULES {
            if let ControlFlow::Break(()) = (rule.apply)(self, message, context) {
                debug!("Menu rule {:?} ended resolution of message {:?}", rule.name, message.id);
                return false;
            }
        }
        true
    }
}

/// Resolves the action menu of the given message.
///
/// This is a pure function: identical inputs always yield identical output.
pub fn resolve(message: &MessageFacade, context: &ActionContext) -> ResolvedMenu {
    let mut builder = MenuBuilder::new(Pass::Primary);
    let completed = builder.run_rules(message, context);
    let secondary_count = builder.secondary_count;
    if completed {
        match secondary_count {
            0 => { }
            1 => builder.items.extend(resolve_more(message, context)),
            _ => builder.push(ActionItem::new(ActionId::More, label::MORE, icon::MORE)),
        }
    }
    ResolvedMenu {
        actions: builder.items,
        tag: builder.tag,
        secondary_count,
    }
}

/// Resolves only the secondary actions of the given message,
/// i.e., the content of the overflow menu behind a "More" entry.
pub fn resolve_more(message: &MessageFacade, context: &ActionContext) -> Vec<ActionItem> {
    let mut builder = MenuBuilder::new(Pass::Secondary);
    builder.run_rules(message, context);
    builder.items
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        menu::context::{ChatPermissions, SenderContext},
        message::{fixtures::*, *},
    };

    fn writer_context() -> ActionContext {
        ActionContext {
            permissions: ChatPermissions {
                can_write_messages: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn sponsored_message_ignores_every_other_flag() {
        let mut msg = group_text_message();
        msg.state |= MessageState::Sponsored | MessageState::Scheduled;
        msg.abilities = MessageAbilities::all();
        msg.reply_count = 4;
        let menu = resolve(&msg, &writer_context());
        assert_eq!(menu.ids(), vec![ActionId::Copy, ActionId::SponsorInfo]);
        assert_eq!(menu.secondary_count, 0);
    }

    #[test]
    fn sent_editable_text_message() {
        let msg = private_message(
            MessageContent::Text { web_page_file: None },
            MessageAbilities::CanReplyTo
                | MessageAbilities::CanEditText
                | MessageAbilities::CanBeSaved
                | MessageAbilities::CanCopyText,
        );
        let menu = resolve(&msg, &writer_context());
        assert_eq!(menu.ids(), vec![ActionId::Reply, ActionId::Edit, ActionId::Copy]);
        assert_eq!(menu.secondary_count, 0);
        assert!(menu.tag.is_none());
    }

    #[test]
    fn single_secondary_action_is_inlined() {
        let msg = private_message(
            MessageContent::Text { web_page_file: None },
            MessageAbilities::CanBeReported | MessageAbilities::CanBeDeletedForSomebody,
        );
        let menu = resolve(&msg, &ActionContext::default());
        assert_eq!(menu.secondary_count, 1);
        assert_eq!(menu.ids(), vec![ActionId::Delete, ActionId::Report]);
    }

    #[test]
    fn several_secondary_actions_fold_behind_more() {
        let mut msg = group_text_message();
        msg.abilities = MessageAbilities::CanBeReported | MessageAbilities::CanBeDeletedForSomebody;
        msg.album = vec![GroupedMessage { has_deletable_file: true, ..Default::default() }];
        let ctx = ActionContext::default();

        let menu = resolve(&msg, &ctx);
        assert_eq!(menu.secondary_count, 3);
        assert_eq!(menu.ids(), vec![ActionId::Delete, ActionId::More]);
        assert_eq!(menu.ids().iter().filter(|id| **id == ActionId::More).count(), 1);

        let more: Vec<_> = resolve_more(&msg, &ctx).into_iter().map(|a| a.id).collect();
        assert_eq!(more, vec![ActionId::DeleteFromCache, ActionId::Report, ActionId::ViewMessagesFromSender]);
    }

    #[test]
    fn no_secondary_actions_leave_no_trace() {
        let msg = private_text_message();
        let menu = resolve(&msg, &ActionContext::default());
        assert!(menu.is_empty());
        assert_eq!(menu.secondary_count, 0);
        assert!(resolve_more(&msg, &ActionContext::default()).is_empty());
    }

    #[test]
    fn overflow_law_holds_with_admin_placeholders() {
        let msg = group_text_message();
        let admin = ActionContext {
            permissions: ChatPermissions {
                my_status: Some(MemberStatus::Creator { is_member: true }),
                ..Default::default()
            },
            ..Default::default()
        };
        // Two placeholders plus "messages from sender".
        let pending = resolve(&msg, &admin);
        assert_eq!(pending.secondary_count, 3);
        assert_eq!(pending.ids(), vec![ActionId::More]);

        // Without sender info, only "messages from sender" is left and gets inlined.
        let unavailable = resolve(&msg, &admin.with_sender(SenderContext::Unavailable));
        assert_eq!(unavailable.secondary_count, 1);
        assert_eq!(unavailable.ids(), vec![ActionId::ViewMessagesFromSender]);

        let member = ChatMember { member_id: msg.sender.clone(), status: MemberStatus::Member };
        let resolved = admin.with_sender(SenderContext::Resolved(member));
        assert_eq!(resolve(&msg, &resolved).secondary_count, resolve_more(&msg, &resolved).len());
    }

    #[test]
    fn paused_playback_download_is_counted_exactly() {
        let mut msg = private_message(MessageContent::Audio, MessageAbilities::empty());
        msg.file = Some(FileState {
            cloud_playback: true,
            is_downloading_active: true,
            is_playing: true,
            ..Default::default()
        });
        let menu = resolve(&msg, &ActionContext::default());
        assert_eq!(menu.secondary_count, 0);
        assert!(menu.is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let mut msg = group_text_message();
        msg.abilities = MessageAbilities::all();
        msg.content = MessageContent::Animation;
        msg.album = vec![grouped_file(1, FileKind::Animation), grouped_file(2, FileKind::Video)];
        msg.album_kind = AlbumKind::Media;
        let ctx = ActionContext {
            permissions: ChatPermissions {
                can_write_messages: true,
                can_pin_messages: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let first = resolve(&msg, &ctx);
        for _ in 0..5 {
            assert_eq!(resolve(&msg, &ctx), first);
        }
        assert!(matches!(&first.tag, Some(MenuTag::DownloadedFiles(files)) if files.len() == 2));
    }
}

//! Option menus for messages that don't go through the regular rule table:
//! structural chat events and entries of a chat's admin event log.

use serde::Serialize;

use crate::message::{ChatEventKind, ChatId, ChatMember, MessageAbilities, MessageContent, MessageFacade};

use super::{
    action::{icon, label, ActionId, ActionItem, Label},
    context::ActionContext,
    permissions::{promote_mode, restrict_mode, PromoteMode, RestrictMode},
    rules::restrict_label,
};

/// What tapping a structural chat event leads to.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum ChatEventOutcome {
    /// The event links to another chat, which should be opened instead of a menu.
    OpenChat(ChatId),
    Menu(Vec<ActionItem>),
}

/// Computes the options offered when tapping a structural chat event.
pub fn chat_event_options(message: &MessageFacade, context: &ActionContext) -> ChatEventOutcome {
    match &message.content {
        MessageContent::ChatEvent(ChatEventKind::UpgradeFrom { basic_group_id }) => {
            return ChatEventOutcome::OpenChat(*basic_group_id);
        }
        MessageContent::ChatEvent(ChatEventKind::UpgradeTo { supergroup_id }) => {
            return ChatEventOutcome::OpenChat(*supergroup_id);
        }
        _ => { }
    }

    // An event that failed to send can only be discarded.
    if message.is_not_sent() {
        return ChatEventOutcome::Menu(vec![ActionItem::new(ActionId::Delete, label::DELETE, icon::DELETE)]);
    }

    let mut items = Vec::new();
    if context.permissions.can_write_messages && message.can_reply_to() {
        items.push(ActionItem::new(ActionId::Reply, label::REPLY, icon::REPLY));
    }
    if context.config.comments_supported && message.reply_count > 0 {
        items.push(ActionItem::new(
            ActionId::ViewReplies,
            Label::Plural { key: label::VIEW_X_REPLIES, count: message.reply_count as usize },
            icon::REPLY_ALL,
        ));
    }
    if message.can(MessageAbilities::CanCopyLink) {
        items.push(ActionItem::new(ActionId::CopyLink, label::COPY_LINK, icon::LINK));
    }
    if message.can_be_deleted_for_somebody() {
        items.push(ActionItem::new(ActionId::Delete, label::DELETE, icon::DELETE));
    }
    ChatEventOutcome::Menu(items)
}

/// Computes the options offered for an entry of a chat's admin event log,
/// once the entry's sender has been resolved to a chat `member`.
pub fn event_log_options(
    message: &MessageFacade,
    context: &ActionContext,
    member: &ChatMember,
) -> Vec<ActionItem> {
    let mut items = Vec::new();
    let is_channel = message.chat.kind.is_channel();

    if message.can(MessageAbilities::CanCopyText) {
        items.push(ActionItem::new(ActionId::Copy, label::COPY, icon::COPY));
    }

    if !is_channel {
        let is_me = context.permissions.self_user_id.is_some()
            && message.sender.user_id() == context.permissions.self_user_id;
        let from_label = if is_me {
            label::VIEW_MESSAGES_FROM_YOU.into()
        } else {
            Label::WithArg { key: label::VIEW_MESSAGES_FROM_USER, arg: message.sender_short_name.clone() }
        };
        items.push(ActionItem::new(ActionId::ViewMessagesFromSender, from_label, icon::PERSON));
    }

    let Some(me) = context.permissions.my_status.as_ref() else {
        return items;
    };
    if me.is_creator() && member.status.is_creator() {
        return items;
    }

    let promote = promote_mode(me, &member.status);
    if matches!(promote, PromoteMode::Edit | PromoteMode::View) {
        let rights_label = match promote {
            PromoteMode::Edit => label::EDIT_ADMIN_RIGHTS,
            PromoteMode::View => label::VIEW_ADMIN_RIGHTS,
            PromoteMode::None | PromoteMode::New => {
                unreachable!("BUG: no admin rights action exists for {promote:?}")
            }
        };
        items.push(ActionItem::new(ActionId::EditAdminRights, rights_label, icon::STARS));
    }

    let restrict = restrict_mode(me, &member.status);
    if restrict != RestrictMode::None && !message.is_sent_by_chat_itself() {
        if !is_channel || restrict == RestrictMode::Edit {
            items.push(ActionItem::new(
                ActionId::RestrictMember,
                restrict_label(restrict, &message.sender),
                icon::BLOCK,
            ));
        }
        if !message.sender.is_chat() {
            let remove = if is_channel { label::CHANNEL_REMOVE_USER } else { label::REMOVE_FROM_GROUP };
            items.push(ActionItem::new(ActionId::BlockMember, remove, icon::REMOVE_CIRCLE));
        }
    }
    items
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        menu::context::ChatPermissions,
        message::{fixtures::*, *},
    };

    fn chat_event(kind: ChatEventKind, abilities: MessageAbilities) -> MessageFacade {
        MessageFacade {
            content: MessageContent::ChatEvent(kind),
            abilities,
            ..group_text_message()
        }
    }

    #[test]
    fn upgrade_events_open_the_linked_chat() {
        let ctx = ActionContext::default();
        let from = chat_event(ChatEventKind::UpgradeFrom { basic_group_id: ChatId(-12) }, MessageAbilities::all());
        assert_eq!(chat_event_options(&from, &ctx), ChatEventOutcome::OpenChat(ChatId(-12)));
        let to = chat_event(ChatEventKind::UpgradeTo { supergroup_id: ChatId(-100_12) }, MessageAbilities::empty());
        assert_eq!(chat_event_options(&to, &ctx), ChatEventOutcome::OpenChat(ChatId(-100_12)));
    }

    #[test]
    fn other_events_offer_reply_link_and_delete() {
        let mut msg = chat_event(
            ChatEventKind::Other,
            MessageAbilities::CanReplyTo | MessageAbilities::CanCopyLink | MessageAbilities::CanBeDeletedForSomebody,
        );
        msg.reply_count = 2;
        let ctx = ActionContext {
            permissions: ChatPermissions { can_write_messages: true, ..Default::default() },
            ..Default::default()
        };
        let ChatEventOutcome::Menu(items) = chat_event_options(&msg, &ctx) else {
            panic!("expected a menu");
        };
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ActionId::Reply, ActionId::ViewReplies, ActionId::CopyLink, ActionId::Delete]);

        msg.state |= MessageState::NotSent;
        let ChatEventOutcome::Menu(items) = chat_event_options(&msg, &ctx) else {
            panic!("expected a menu");
        };
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![ActionId::Delete]);
    }

    fn event_log_entry() -> MessageFacade {
        let mut msg = group_text_message();
        msg.state |= MessageState::EventLog;
        msg.abilities = MessageAbilities::CanCopyText;
        msg
    }

    #[test]
    fn event_log_options_for_a_moderator() {
        let msg = event_log_entry();
        let ctx = ActionContext {
            permissions: ChatPermissions {
                my_status: Some(MemberStatus::Administrator {
                    can_be_edited: false,
                    can_restrict_members: true,
                    can_promote_members: false,
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        let member = ChatMember { member_id: msg.sender.clone(), status: MemberStatus::Member };
        let items = event_log_options(&msg, &ctx, &member);
        let keys: Vec<_> = items.iter().map(|i| i.label.key()).collect();
        assert_eq!(keys, vec![
            label::COPY,
            label::VIEW_MESSAGES_FROM_USER,
            label::RESTRICT_USER,
            label::REMOVE_FROM_GROUP,
        ]);
    }

    #[test]
    fn event_log_options_between_creators_skip_admin_tools() {
        let mut msg = event_log_entry();
        msg.sender = MessageSender::User { id: UserId(1), is_bot: false };
        let ctx = ActionContext {
            permissions: ChatPermissions {
                self_user_id: Some(UserId(1)),
                my_status: Some(MemberStatus::Creator { is_member: true }),
                ..Default::default()
            },
            ..Default::default()
        };
        let member = ChatMember { member_id: msg.sender.clone(), status: MemberStatus::Creator { is_member: true } };
        let keys: Vec<_> = event_log_options(&msg, &ctx, &member).iter().map(|i| i.label.key()).collect();
        assert_eq!(keys, vec![label::COPY, label::VIEW_MESSAGES_FROM_YOU]);
    }

    #[test]
    fn event_log_options_in_a_channel() {
        let mut msg = event_log_entry();
        msg.chat.kind = ChatKind::Channel;
        let ctx = ActionContext {
            permissions: ChatPermissions {
                my_status: Some(MemberStatus::Creator { is_member: true }),
                ..Default::default()
            },
            ..Default::default()
        };
        let admin = ChatMember {
            member_id: msg.sender.clone(),
            status: MemberStatus::Administrator {
                can_be_edited: true,
                can_restrict_members: false,
                can_promote_members: false,
            },
        };
        let keys: Vec<_> = event_log_options(&msg, &ctx, &admin).iter().map(|i| i.label.key()).collect();
        assert_eq!(keys, vec![label::COPY, label::EDIT_ADMIN_RIGHTS, label::CHANNEL_REMOVE_USER]);
    }
}

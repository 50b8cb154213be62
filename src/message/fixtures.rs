//! Message fixtures shared by unit tests across the crate.

use super::*;

/// The chat that fixture messages live in.
pub const GROUP_CHAT: ChatId = ChatId(-1001);

/// A sent, incoming text message in a supergroup, with no abilities at all.
pub fn group_text_message() -> MessageFacade {
    MessageFacade {
        chat: ChatInfo {
            id: GROUP_CHAT,
            kind: ChatKind::Supergroup,
            available_reactions: None,
        },
        id: MessageId(42),
        sender: MessageSender::User { id: UserId(7), is_bot: false },
        sender_short_name: "Alice".into(),
        content: MessageContent::Text { web_page_file: None },
        ..Default::default()
    }
}

/// The same as [`group_text_message`], but in a private chat.
pub fn private_text_message() -> MessageFacade {
    let mut msg = group_text_message();
    msg.chat.id = ChatId(7);
    msg.chat.kind = ChatKind::Private;
    msg
}

/// A private-chat message with the given content and abilities.
pub fn private_message(content: MessageContent, abilities: MessageAbilities) -> MessageFacade {
    MessageFacade {
        content,
        abilities,
        ..private_text_message()
    }
}

/// A grouped message entry holding one downloaded file of the given kind.
pub fn grouped_file(id: i64, kind: FileKind) -> GroupedMessage {
    GroupedMessage {
        id: MessageId(id),
        downloaded_file: Some(DownloadedFile {
            file_id: id as i32,
            kind,
            ..Default::default()
        }),
        has_deletable_file: false,
    }
}

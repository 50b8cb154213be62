//! The decisions made once a gesture has been recognized:
//! what a tap does, what a long-press does, whether a horizontal drag
//! may start a swipe, and which menu to present.

use tracing::debug;

use crate::{
    config::{GestureConfig, ResolverConfig},
    menu::{
        chat_event_options, event_log_options, resolve, ActionContext, ChatEventOutcome,
        ChatPermissions, SenderContext,
    },
    message::{ChatMember, MessageContent, MessageFacade},
};

use super::state_machine::{GestureIntent, MenuKind, MenuRequest, MessageTouchTarget, SurfaceState};

/// What a tap on a message row resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum TapDecision {
    /// The tap is ignored.
    Rejected,
    /// The tap (de)selects the message or part of it.
    Select(GestureIntent),
    OpenPreview,
    /// The message's own click handler consumed the tap.
    ConsumedByMessage,
    /// The tap falls through to the action menu, anchored at the given point.
    ShowOptions { anchor: Option<(f32, f32)> },
}

/// Runs the tap protocol for a tap at (`x`, `y`).
///
/// `origin` is where the gesture started; selection always uses that point.
pub fn decide_tap(
    target: &mut dyn MessageTouchTarget,
    surface: &SurfaceState,
    origin: (f32, f32),
    x: f32,
    y: f32,
) -> TapDecision {
    let message = target.message();
    if message.content.is_bot_info() {
        return TapDecision::Rejected;
    }
    // Structural chat events are clickable as a whole.
    let anchor = if message.content.is_chat_event() { None } else { Some((x, y)) };

    if !surface.focused {
        debug!("Ignoring tap on message {:?}: surface is not focused", message.id);
        return TapDecision::Rejected;
    }
    if surface.navigation_animating || surface.header_animating {
        debug!("Ignoring tap on message {:?} during a navigation transition", message.id);
        return TapDecision::Rejected;
    }
    if surface.select_mode {
        return if message.can_be_selected() {
            TapDecision::Select(selection_intent(target, origin.0, origin.1))
        } else {
            TapDecision::Rejected
        };
    }
    if surface.preview_search_mode {
        return TapDecision::OpenPreview;
    }
    if target.on_click() {
        return TapDecision::ConsumedByMessage;
    }
    TapDecision::ShowOptions { anchor }
}

/// Selects the sub-item under the given point, or the whole message group if none is hit.
pub fn selection_intent(target: &dyn MessageTouchTarget, x: f32, y: f32) -> GestureIntent {
    match target.find_message_id_under(x, y) {
        Some(message_id) => GestureIntent::SelectOne { message_id, x, y },
        None => GestureIntent::SelectAll { message_id: target.message().id, x, y },
    }
}

/// What a long-press on a message row resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongPressDecision {
    Rejected,
    /// Chat events treat a long-press like a tap.
    Tap,
    Select,
}

pub fn decide_long_press(message: &MessageFacade) -> LongPressDecision {
    if message.content.is_bot_info() || message.is_not_sent() {
        LongPressDecision::Rejected
    } else if message.content.is_chat_event() {
        LongPressDecision::Tap
    } else if message.can_be_selected() {
        LongPressDecision::Select
    } else {
        LongPressDecision::Rejected
    }
}

/// Returns `true` if a horizontal drag of `delta_x` that started at `origin_x`
/// may hand the gesture off to the swipe container.
pub fn can_start_swipe(
    message: &MessageFacade,
    surface: &SurfaceState,
    config: &GestureConfig,
    origin_x: f32,
    delta_x: f32,
) -> bool {
    if message.is_not_sent()
        || message.is_sponsored()
        || matches!(message.content, MessageContent::BotInfo | MessageContent::ChatEvent(_))
        || surface.recording_open
        || !surface.swipe_container_present
    {
        return false;
    }
    !message.quick_reactions_for_drag(delta_x).is_empty()
        && origin_x > config.slide_back_bound
}

/// Returns `true` if the action menu of this message depends on its sender's member status.
pub fn requires_sender_lookup(message: &MessageFacade, permissions: &ChatPermissions) -> bool {
    message.is_event_log()
        || (permissions.is_admin()
            && message.chat.kind.is_multi_chat()
            && !message.content.is_chat_event()
            && !message.is_sent_by_chat_itself())
}

/// Builds the intent that presents this message's options, if there are any.
///
/// `sender` is the looked-up member status of the message's sender,
/// or `None` if no lookup was done or it yielded nothing.
pub fn build_menu(
    message: &MessageFacade,
    permissions: &ChatPermissions,
    config: &ResolverConfig,
    anchor: Option<(f32, f32)>,
    sender: Option<ChatMember>,
) -> Option<GestureIntent> {
    let context = ActionContext::new(permissions.clone(), config.clone())
        .with_sender(SenderContext::from(sender.clone()));
    let request = |kind, actions, tag, with_reactions| GestureIntent::ShowMenu(MenuRequest {
        chat_id: message.chat.id,
        message_id: message.id,
        anchor,
        kind,
        actions,
        tag,
        sender: sender.clone(),
        with_reactions,
    });

    if message.is_event_log() {
        let member = sender.as_ref()?;
        let actions = event_log_options(message, &context, member);
        return (!actions.is_empty()).then(|| request(MenuKind::EventLog, actions, None, false));
    }

    if message.content.is_chat_event() {
        return match chat_event_options(message, &context) {
            ChatEventOutcome::OpenChat(chat_id) => Some(GestureIntent::OpenChat { chat_id }),
            ChatEventOutcome::Menu(actions) if actions.is_empty() => None,
            ChatEventOutcome::Menu(actions) => Some(request(MenuKind::ChatEvent, actions, None, false)),
        };
    }

    let menu = resolve(message, &context);
    if menu.is_empty() {
        return None;
    }
    Some(request(MenuKind::Message, menu.actions, menu.tag, message.chat.has_reactions()))
}

//! The gesture arbitration core of a message row.
//!
//! A [`GestureStateMachine`] consumes the raw pointer events of one message
//! row, plus long-press timeouts and sender-status lookup responses, and
//! arbitrates between tap, long-press and swipe. It never acts on its own;
//! everything it decides is returned as [`GestureIntent`]s for the host's
//! selection, menu, navigation and swipe services to carry out.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    config::Config,
    lookup::{SenderLookupRequest, SenderLookupUpdate, ViewLiveness},
    menu::{ActionItem, ChatPermissions, MenuTag},
    message::{ChatId, ChatMember, MessageFacade, MessageId},
};

use super::{
    long_press::{DeferredTimer, LongPressScheduler, LongPressTicket},
    pointer_tracker::{Capture, GesturePhase, PointerAction, PointerEvent, PointerTracker},
    tap::{self, LongPressDecision, TapDecision},
};

/// The state of the screen that hosts a message row, sampled at each event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceState {
    /// The surface (or its parent) has input focus.
    pub focused: bool,
    /// An ancestor navigation transition is running.
    pub navigation_animating: bool,
    /// The surface's header is animating.
    pub header_animating: bool,
    /// Messages are being multi-selected.
    pub select_mode: bool,
    /// Taps open messages in a preview instead of acting on them.
    pub preview_search_mode: bool,
    pub force_touch_mode: bool,
    /// The surface is itself a preview of a chat.
    pub preview_mode: bool,
    /// The surface shows a chat's admin event log.
    pub event_log_surface: bool,
    /// The surface shows a search result preview.
    pub search_preview_surface: bool,
    /// An audio/video recording session is open.
    pub recording_open: bool,
    /// A message is being edited in the input bar.
    pub editing_message: bool,
    /// The ancestor scroll container has already taken over the gesture.
    pub parent_intercepting: bool,
    /// A swipe container exists that can take over horizontal drags.
    pub swipe_container_present: bool,
    pub permissions: ChatPermissions,
}
impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            focused: true,
            navigation_animating: false,
            header_animating: false,
            select_mode: false,
            preview_search_mode: false,
            force_touch_mode: false,
            preview_mode: false,
            event_log_surface: false,
            search_preview_surface: false,
            recording_open: false,
            editing_message: false,
            parent_intercepting: false,
            swipe_container_present: true,
            permissions: ChatPermissions::default(),
        }
    }
}

/// The message bound to a row, together with the row's own touch handling.
///
/// This is how the state machine asks a concrete message about the parts
/// of itself that it draws, e.g., buttons, links or album cells.
pub trait MessageTouchTarget {
    fn message(&self) -> &MessageFacade;

    /// Returns `true` if the row should not react to this pointer-down at all.
    fn should_ignore_tap(&self, _event: &PointerEvent) -> bool {
        false
    }

    /// Returns `true` if pressing and holding at this point may become a long-press.
    fn allow_long_press(&self, _x: f32, _y: f32) -> bool {
        true
    }

    /// Offers a raw pointer event to the message's own touch handler.
    ///
    /// On pointer-down, returning `true` claims the rest of the gesture.
    fn on_touch(&mut self, _event: &PointerEvent) -> bool {
        false
    }

    /// Offers a long-press to the message's own handler.
    fn perform_long_press(&mut self, _x: f32, _y: f32) -> bool {
        false
    }

    /// Offers a tap to the message's own click handler.
    fn on_click(&mut self) -> bool {
        false
    }

    /// Returns the ID of the grouped message drawn at this point, if any.
    fn find_message_id_under(&self, _x: f32, _y: f32) -> Option<MessageId> {
        None
    }
}

/// The kind of options menu being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    Message,
    ChatEvent,
    EventLog,
}

/// A request to present an options menu for a message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuRequest {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    /// Where the menu was invoked, or `None` if the whole row was the target.
    pub anchor: Option<(f32, f32)>,
    pub kind: MenuKind,
    pub actions: Vec<ActionItem>,
    pub tag: Option<MenuTag>,
    /// The sender's member status, if it was looked up.
    pub sender: Option<ChatMember>,
    /// The menu should be shown with a reaction bar.
    pub with_reactions: bool,
}

/// A high-level outcome of gesture arbitration, to be carried out by the host.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "intent")]
pub enum GestureIntent {
    /// Toggle selection of one message of a group.
    SelectOne { message_id: MessageId, x: f32, y: f32 },
    /// Toggle selection of the whole group that `message_id` belongs to.
    SelectAll { message_id: MessageId, x: f32, y: f32 },
    OpenPreview,
    /// Let the swipe container take over this row's gesture.
    StartSwipe,
    ShowMenu(MenuRequest),
    /// Look up the member status of a sender, then pass the response to
    /// [`GestureStateMachine::on_sender_status()`].
    RequestSenderStatus(SenderLookupRequest),
    OpenChat { chat_id: ChatId },
    /// Ancestors must stop intercepting this gesture; play long-press feedback.
    LongPressStarted,
    /// Ancestors may intercept gestures again.
    LongPressEnded,
    /// Play click feedback for a tap that did something.
    ClickFeedback,
}

/// The result of feeding one input to the state machine.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TouchResponse {
    /// Whether this row consumed the input; if not, ancestors may handle it.
    pub handled: bool,
    pub intents: Vec<GestureIntent>,
}
impl TouchResponse {
    fn unhandled() -> Self {
        Self::default()
    }

    fn new(handled: bool, intents: Vec<GestureIntent>) -> Self {
        Self { handled, intents }
    }
}

/// A menu waiting for its sender lookup to complete.
#[derive(Debug)]
struct PendingMenu {
    request_id: u64,
    message: MessageFacade,
    anchor: Option<(f32, f32)>,
}

/// Arbitrates the gestures of one message row.
pub struct GestureStateMachine {
    config: Config,
    tracker: PointerTracker,
    scheduler: LongPressScheduler,
    pending_menu: Option<PendingMenu>,
    next_request_id: u64,
    liveness: ViewLiveness,
}

impl GestureStateMachine {
    pub fn new(config: Config, timer: Box<dyn DeferredTimer>) -> Self {
        let scheduler = LongPressScheduler::new(config.gesture.long_press_timeout_ms, timer);
        Self {
            config,
            tracker: PointerTracker::new(),
            scheduler,
            pending_menu: None,
            next_request_id: 1,
            liveness: ViewLiveness::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Returns the liveness flag of the row that owns this state machine,
    /// to be handed to asynchronous work on its behalf.
    pub fn liveness(&self) -> ViewLiveness {
        self.liveness.clone()
    }

    /// Feeds one raw pointer event to the state machine.
    ///
    /// `target` is the message currently bound to the row, if any. An unbound
    /// row cancels its gesture and forgets any menu waiting for a lookup.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        target: Option<&mut dyn MessageTouchTarget>,
        surface: &SurfaceState,
    ) -> TouchResponse {
        let Some(target) = target else {
            if let Some(stale) = self.pending_menu.take() {
                debug!("Message was unbound, dropping pending menu {}.", stale.request_id);
            }
            if self.tracker.session().is_some() {
                debug!("Message was unbound mid-gesture, cancelling it.");
                return self.cancel_gesture();
            }
            return TouchResponse::unhandled();
        };
        match event.action {
            PointerAction::Down => self.on_down(event, target, surface),
            PointerAction::Move => self.on_move(event, target, surface),
            PointerAction::Up => self.on_up(event, target, surface),
            PointerAction::Cancel => self.on_cancel(event, target),
        }
    }

    fn on_down(
        &mut self,
        event: &PointerEvent,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
    ) -> TouchResponse {
        debug_assert!(
            self.tracker.session().is_none(),
            "BUG: pointer-down arrived before the previous gesture was terminated",
        );
        if self.tracker.session().is_some() {
            warn!("Pointer-down arrived before the previous gesture was terminated, cancelling it.");
            self.cancel_gesture();
        }

        let message = target.message();
        if message.is_detached()
            || surface.force_touch_mode
            || (surface.preview_mode && !surface.event_log_surface && !surface.search_preview_surface)
            || surface.recording_open
        {
            return TouchResponse::unhandled();
        }
        if target.should_ignore_tap(event) || surface.editing_message {
            return TouchResponse::unhandled();
        }

        let allow_long_press = target.allow_long_press(event.x, event.y);
        let session = self.tracker.on_down(event.x, event.y, event.timestamp_ms);
        if allow_long_press {
            self.scheduler.schedule(event.timestamp_ms);
            session.long_press_pending = true;
        } else {
            self.scheduler.cancel();
        }
        // Multi-select mode always treats the row as a whole.
        session.capture = if surface.select_mode || !target.on_touch(event) {
            Capture::Click
        } else {
            Capture::MessageTouch
        };
        debug!("Pointer down at ({}, {}): {:?}", event.x, event.y, session.phase());
        TouchResponse::new(true, Vec::new())
    }

    fn on_move(
        &mut self,
        event: &PointerEvent,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
    ) -> TouchResponse {
        let slop = self.config.gesture.touch_slop;
        let Some(session) = self.tracker.on_move(event.x, event.y) else {
            return TouchResponse::unhandled();
        };
        let (travel_x, travel_y, travel_max) = (session.travel_x(), session.travel_y(), session.travel_max());

        if session.long_press_pending && travel_max > slop {
            debug!("Pointer moved {travel_max} beyond the touch slop, cancelling the long-press.");
            session.long_press_pending = false;
            self.scheduler.cancel();
        }

        if session.capture == Capture::Swipe {
            return TouchResponse::unhandled();
        }

        if !surface.parent_intercepting
            && !session.long_pressed
            && travel_y < slop
            && travel_x > slop
            && tap::can_start_swipe(
                target.message(),
                surface,
                &self.config.gesture,
                session.origin_x,
                session.delta_x(),
            )
        {
            debug!("Handing off message {:?} to the swipe container.", target.message().id);
            session.capture = Capture::Swipe;
            session.long_press_pending = false;
            self.scheduler.cancel();
            return TouchResponse::new(false, vec![GestureIntent::StartSwipe]);
        }

        match session.capture {
            Capture::MessageTouch => TouchResponse::new(target.on_touch(event), Vec::new()),
            Capture::Click if travel_max > slop => {
                debug!("Pointer escaped tap recognition, releasing the click capture.");
                session.capture = Capture::None;
                TouchResponse::unhandled()
            }
            Capture::Click => TouchResponse::new(true, Vec::new()),
            Capture::None | Capture::Swipe => TouchResponse::unhandled(),
        }
    }

    fn on_up(
        &mut self,
        event: &PointerEvent,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
    ) -> TouchResponse {
        let Some(session) = self.tracker.on_up() else {
            return TouchResponse::unhandled();
        };
        self.scheduler.cancel();
        let mut intents = Vec::new();
        if session.long_pressed {
            intents.push(GestureIntent::LongPressEnded);
        }
        let handled = match session.capture {
            Capture::MessageTouch => target.on_touch(event),
            Capture::Click => {
                let origin = (session.origin_x, session.origin_y);
                let tapped = self.tap(target, surface, origin, event.x, event.y, &mut intents);
                if tapped {
                    intents.push(GestureIntent::ClickFeedback);
                }
                tapped
            }
            Capture::None | Capture::Swipe => false,
        };
        TouchResponse::new(handled, intents)
    }

    fn on_cancel(&mut self, event: &PointerEvent, target: &mut dyn MessageTouchTarget) -> TouchResponse {
        let Some(session) = self.tracker.on_cancel() else {
            return TouchResponse::unhandled();
        };
        self.scheduler.cancel();
        let mut intents = Vec::new();
        if session.long_pressed {
            intents.push(GestureIntent::LongPressEnded);
        }
        let handled = match session.capture {
            Capture::MessageTouch => target.on_touch(event),
            Capture::Click => true,
            Capture::None | Capture::Swipe => false,
        };
        TouchResponse::new(handled, intents)
    }

    /// Abandons the current gesture, if any, without resolving it.
    ///
    /// Use this when a competing recognizer has won the gesture.
    /// Safe to call in any state.
    pub fn cancel_gesture(&mut self) -> TouchResponse {
        self.scheduler.cancel();
        let intents = match self.tracker.on_cancel() {
            Some(session) if session.long_pressed => vec![GestureIntent::LongPressEnded],
            _ => Vec::new(),
        };
        TouchResponse::new(false, intents)
    }

    /// Handles a long-press timeout delivered by the row's [`DeferredTimer`].
    pub fn on_long_press_timeout(
        &mut self,
        ticket: LongPressTicket,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
    ) -> TouchResponse {
        if !self.scheduler.fire(ticket) {
            return TouchResponse::unhandled();
        }
        let Some(session) = self.tracker.session_mut() else {
            return TouchResponse::unhandled();
        };
        session.long_press_pending = false;
        let (x, y) = (session.origin_x, session.origin_y);
        let capture = session.capture;

        let mut intents = Vec::new();
        let long_pressed = match capture {
            Capture::Click => self.long_press(target, surface, x, y, &mut intents),
            Capture::MessageTouch => {
                if let Some(session) = self.tracker.session_mut() {
                    session.capture = Capture::None;
                }
                target.perform_long_press(x, y) || self.long_press(target, surface, x, y, &mut intents)
            }
            Capture::None | Capture::Swipe => false,
        };
        if !long_pressed {
            return TouchResponse::new(false, intents);
        }

        if let Some(session) = self.tracker.session_mut() {
            session.capture = Capture::None;
            session.long_pressed = true;
        }
        debug!("Long-pressed message {:?} at ({x}, {y})", target.message().id);
        intents.push(GestureIntent::LongPressStarted);
        TouchResponse::new(true, intents)
    }

    /// Fires the long-press if its deadline has passed at `now_ms`.
    ///
    /// Used with a [`ManualTimer`](super::long_press::ManualTimer).
    pub fn poll_long_press(
        &mut self,
        now_ms: u64,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
    ) -> TouchResponse {
        match self.scheduler.due(now_ms) {
            Some(ticket) => self.on_long_press_timeout(ticket, target, surface),
            None => TouchResponse::unhandled(),
        }
    }

    /// Handles the response to a [`GestureIntent::RequestSenderStatus`].
    ///
    /// `member` is `None` if the lookup failed or the sender isn't a member.
    /// `bound` is the message the row shows now; the response is dropped
    /// if that is no longer the message whose menu is pending.
    pub fn on_sender_status(
        &mut self,
        request_id: u64,
        member: Option<ChatMember>,
        bound: Option<&MessageFacade>,
        surface: &SurfaceState,
    ) -> TouchResponse {
        if !self.liveness.is_alive() {
            debug!("Dropping sender status {request_id}: the row was destroyed.");
            return TouchResponse::unhandled();
        }
        let pending = match self.pending_menu.take() {
            Some(pending) if pending.request_id == request_id => pending,
            other => {
                debug!("Dropping stale sender status {request_id}.");
                self.pending_menu = other;
                return TouchResponse::unhandled();
            }
        };
        let still_bound = bound.is_some_and(|message| {
            message.id == pending.message.id && message.chat.id == pending.message.chat.id
        });
        if !still_bound {
            debug!("Dropping sender status {request_id}: message {:?} is no longer bound.", pending.message.id);
            return TouchResponse::unhandled();
        }
        let intents = tap::build_menu(
            &pending.message,
            &surface.permissions,
            &self.config.resolver,
            pending.anchor,
            member,
        )
        .into_iter()
        .collect::<Vec<_>>();
        TouchResponse::new(!intents.is_empty(), intents)
    }

    /// Handles a completed lookup from a [`SenderLookupService`](crate::lookup::SenderLookupService).
    pub fn apply_sender_update(
        &mut self,
        update: SenderLookupUpdate,
        bound: Option<&MessageFacade>,
        surface: &SurfaceState,
    ) -> TouchResponse {
        self.on_sender_status(update.request_id, update.member, bound, surface)
    }

    /// Tears down this state machine along with its row.
    ///
    /// Any lookup still in flight becomes a no-op.
    pub fn destroy(&mut self) {
        self.liveness.mark_destroyed();
        self.pending_menu = None;
        self.cancel_gesture();
    }

    /// Runs the long-press protocol. Returns `true` if the long-press was accepted.
    fn long_press(
        &mut self,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
        x: f32,
        y: f32,
        intents: &mut Vec<GestureIntent>,
    ) -> bool {
        match tap::decide_long_press(target.message()) {
            LongPressDecision::Rejected => false,
            LongPressDecision::Tap => self.tap(target, surface, (x, y), x, y, intents),
            LongPressDecision::Select => {
                intents.push(tap::selection_intent(target, x, y));
                true
            }
        }
    }

    /// Runs the tap protocol. Returns `true` if the tap did something.
    fn tap(
        &mut self,
        target: &mut dyn MessageTouchTarget,
        surface: &SurfaceState,
        origin: (f32, f32),
        x: f32,
        y: f32,
        intents: &mut Vec<GestureIntent>,
    ) -> bool {
        match tap::decide_tap(target, surface, origin, x, y) {
            TapDecision::Rejected => false,
            TapDecision::Select(intent) => {
                intents.push(intent);
                true
            }
            TapDecision::OpenPreview => {
                intents.push(GestureIntent::OpenPreview);
                true
            }
            TapDecision::ConsumedByMessage => true,
            TapDecision::ShowOptions { anchor } => self.show_options(target.message(), surface, anchor, intents),
        }
    }

    /// Runs the action menu protocol, deferring it until the sender is known if needed.
    fn show_options(
        &mut self,
        message: &MessageFacade,
        surface: &SurfaceState,
        anchor: Option<(f32, f32)>,
        intents: &mut Vec<GestureIntent>,
    ) -> bool {
        if tap::requires_sender_lookup(message, &surface.permissions) {
            let request_id = self.next_request_id;
            self.next_request_id += 1;
            if let Some(stale) = self.pending_menu.replace(PendingMenu {
                request_id,
                message: message.clone(),
                anchor,
            }) {
                debug!("Superseding pending menu {} of message {:?}", stale.request_id, stale.message.id);
            }
            intents.push(GestureIntent::RequestSenderStatus(SenderLookupRequest {
                request_id,
                chat_id: message.chat.id,
                sender: message.sender.clone(),
            }));
            return true;
        }
        match tap::build_menu(message, &surface.permissions, &self.config.resolver, anchor, None) {
            Some(intent) => {
                intents.push(intent);
                true
            }
            None => false,
        }
    }
}

impl Drop for GestureStateMachine {
    fn drop(&mut self) {
        self.liveness.mark_destroyed();
    }
}

impl std::fmt::Debug for GestureStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureStateMachine")
            .field("phase", &self.phase())
            .field("scheduler", &self.scheduler)
            .field("pending_menu", &self.pending_menu)
            .finish_non_exhaustive()
    }
}

//! Raw touch-session bookkeeping: where a gesture started, where it is now,
//! and which recognizer currently owns it.

use serde::{Deserialize, Serialize};

/// The kind of a raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event, in the coordinate space of the message row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub timestamp_ms: u64,
}
impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self { action, x, y, timestamp_ms }
    }
}

/// Which recognizer currently owns a touch session's subsequent events.
///
/// Being a single value, at most one capture can be active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capture {
    /// Nobody owns the gesture; ancestors may interpret it.
    #[default]
    None,
    /// The row as a whole owns the gesture, as a tap candidate.
    Click,
    /// The message's own touch handler owns the gesture, e.g., a button inside it.
    MessageTouch,
    /// The gesture was handed off to the swipe container.
    Swipe,
}

/// The observable phase of a touch session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Idle,
    Down,
    LongPressPending,
    ClickCaptured,
    MessageTouchCaptured,
    LongPressed,
    SwipeCaptured,
}

/// The state of one active gesture, from pointer-down to pointer-up/cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSession {
    pub origin_x: f32,
    pub origin_y: f32,
    pub current_x: f32,
    pub current_y: f32,
    pub start_time_ms: u64,
    pub capture: Capture,
    /// A long-press timer is armed for this session.
    ///
    /// This can coexist with a click or message-touch capture.
    pub long_press_pending: bool,
    /// The long-press has fired and was accepted.
    pub long_pressed: bool,
}

impl TouchSession {
    fn new(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            current_x: x,
            current_y: y,
            start_time_ms: timestamp_ms,
            capture: Capture::None,
            long_press_pending: false,
            long_pressed: false,
        }
    }

    pub fn travel_x(&self) -> f32 {
        (self.current_x - self.origin_x).abs()
    }

    pub fn travel_y(&self) -> f32 {
        (self.current_y - self.origin_y).abs()
    }

    pub fn travel_max(&self) -> f32 {
        self.travel_x().max(self.travel_y())
    }

    /// The signed horizontal travel; negative when dragging to the left.
    pub fn delta_x(&self) -> f32 {
        self.current_x - self.origin_x
    }

    /// Returns the most significant phase of this session.
    ///
    /// A pending long-press is only reported when no capture is active,
    /// since it overlaps with the click and message-touch captures.
    pub fn phase(&self) -> GesturePhase {
        if self.long_pressed {
            return GesturePhase::LongPressed;
        }
        match self.capture {
            Capture::Swipe => GesturePhase::SwipeCaptured,
            Capture::Click => GesturePhase::ClickCaptured,
            Capture::MessageTouch => GesturePhase::MessageTouchCaptured,
            Capture::None if self.long_press_pending => GesturePhase::LongPressPending,
            Capture::None => GesturePhase::Down,
        }
    }
}

/// Tracks the single active touch session of a message row.
#[derive(Debug, Default)]
pub struct PointerTracker {
    session: Option<TouchSession>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session at the given origin, replacing any previous one.
    pub fn on_down(&mut self, x: f32, y: f32, timestamp_ms: u64) -> &mut TouchSession {
        self.session.insert(TouchSession::new(x, y, timestamp_ms))
    }

    /// Updates the current point of the active session, if any.
    pub fn on_move(&mut self, x: f32, y: f32) -> Option<&mut TouchSession> {
        let session = self.session.as_mut()?;
        session.current_x = x;
        session.current_y = y;
        Some(session)
    }

    /// Ends the active session, returning it.
    pub fn on_up(&mut self) -> Option<TouchSession> {
        self.session.take()
    }

    /// Ends the active session, returning it.
    pub fn on_cancel(&mut self) -> Option<TouchSession> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut TouchSession> {
        self.session.as_mut()
    }

    pub fn phase(&self) -> GesturePhase {
        self.session.as_ref().map_or(GesturePhase::Idle, TouchSession::phase)
    }
}

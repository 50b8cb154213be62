//! Gesture disambiguation for message rows: tap vs. long-press vs. swipe.

pub mod long_press;
pub mod pointer_tracker;
pub mod state_machine;
pub mod tap;

pub use long_press::{DeferredTimer, LongPressScheduler, LongPressTicket, ManualTimer, TokioTimer};
pub use pointer_tracker::{Capture, GesturePhase, PointerAction, PointerEvent, PointerTracker, TouchSession};
pub use state_machine::{
    GestureIntent, GestureStateMachine, MenuKind, MenuRequest, MessageTouchTarget, SurfaceState,
    TouchResponse,
};

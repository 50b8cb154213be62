//! Touch gesture arbitration and contextual action menus for chat message rows.
//!
//! This crate contains no drawing code. A host UI feeds each message row's
//! pointer events into that row's [`GestureStateMachine`], and carries out
//! the [`GestureIntent`]s it returns: toggling selection, presenting the
//! action menu resolved by [`menu::resolve()`], handing a drag off to the
//! swipe container, and so on.

pub mod config;
pub mod error;
pub mod gesture;
pub mod lookup;
pub mod menu;
pub mod message;
pub mod replay;

pub use config::Config;
pub use error::{Error, Result};
pub use gesture::{GestureIntent, GestureStateMachine, MessageTouchTarget, PointerEvent, SurfaceState, TouchResponse};
pub use message::MessageFacade;

//! Contextual action menus for chat messages.

pub mod action;
pub mod context;
pub mod permissions;
pub mod resolver;
pub mod rules;
pub mod special;

pub use action::{ActionId, ActionItem, Label};
pub use context::{ActionContext, ChatPermissions, SenderContext};
pub use resolver::{resolve, resolve_more, MenuTag, ResolvedMenu};
pub use special::{chat_event_options, event_log_options, ChatEventOutcome};

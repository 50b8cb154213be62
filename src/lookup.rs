//! Asynchronous sender-status lookups.
//!
//! A tap that needs the sender's member status emits a
//! [`GestureIntent::RequestSenderStatus`](crate::gesture::GestureIntent::RequestSenderStatus).
//! The host submits that request to a [`SenderLookupService`], which runs it
//! on a tokio runtime and enqueues the response. The UI thread later drains
//! the queue and feeds each update back into the row's state machine.
//!
//! Responses for rows that were destroyed in the meantime are dropped,
//! as guarded by each row's [`ViewLiveness`] flag.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crossbeam_queue::SegQueue;
use futures_util::future::BoxFuture;
use serde::Serialize;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    error::Result,
    message::{ChatId, ChatMember, MessageSender},
};

/// A request to look up the member status of a message's sender.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SenderLookupRequest {
    /// Identifies the menu waiting for this lookup.
    pub request_id: u64,
    pub chat_id: ChatId,
    pub sender: MessageSender,
}

/// The response to a [`SenderLookupRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct SenderLookupUpdate {
    pub request_id: u64,
    /// `None` if the lookup failed or the sender isn't a member of the chat.
    pub member: Option<ChatMember>,
}

/// The external service that knows the member status of chat members.
pub trait ChatMemberSource: Send + Sync {
    /// Fetches the member status of `sender` within the given chat.
    ///
    /// Returns `Ok(None)` if the sender isn't a member of the chat.
    fn get_chat_member(&self, chat_id: ChatId, sender: MessageSender) -> BoxFuture<'static, Result<Option<ChatMember>>>;
}

/// A flag shared between a row and the asynchronous work done on its behalf,
/// which is cleared once the row is destroyed.
#[derive(Clone, Debug)]
pub struct ViewLiveness(Arc<AtomicBool>);

impl ViewLiveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn mark_destroyed(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ViewLiveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs sender lookups in the background and queues up their responses.
pub struct SenderLookupService {
    runtime: Handle,
    source: Arc<dyn ChatMemberSource>,
    updates: Arc<SegQueue<SenderLookupUpdate>>,
}

impl SenderLookupService {
    pub fn new(runtime: Handle, source: Arc<dyn ChatMemberSource>) -> Self {
        Self {
            runtime,
            source,
            updates: Arc::new(SegQueue::new()),
        }
    }

    /// Spawns a lookup for the given request on behalf of the row with the given `liveness`.
    pub fn submit(&self, request: SenderLookupRequest, liveness: ViewLiveness) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let updates = Arc::clone(&self.updates);
        self.runtime.spawn(async move {
            if !liveness.is_alive() {
                debug!("Skipping sender lookup {}: the row was destroyed.", request.request_id);
                return;
            }
            let member = match source.get_chat_member(request.chat_id, request.sender.clone()).await {
                Ok(member) => member,
                Err(e) => {
                    warn!("Failed to look up sender {:?} in chat {:?}: {e}", request.sender, request.chat_id);
                    None
                }
            };
            if !liveness.is_alive() {
                debug!("Dropping sender lookup {}: the row was destroyed.", request.request_id);
                return;
            }
            updates.push(SenderLookupUpdate { request_id: request.request_id, member });
        })
    }

    /// Takes all responses that have arrived so far, in arrival order.
    pub fn drain(&self) -> Vec<SenderLookupUpdate> {
        let mut drained = Vec::with_capacity(self.updates.len());
        while let Some(update) = self.updates.pop() {
            drained.push(update);
        }
        drained
    }
}

impl std::fmt::Debug for SenderLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderLookupService")
            .field("pending_updates", &self.updates.len())
            .finish_non_exhaustive()
    }
}

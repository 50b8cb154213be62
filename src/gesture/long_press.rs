//! A cancellable one-shot long-press trigger.
//!
//! The [`LongPressScheduler`] owns the arming state and decides whether a
//! timeout is still valid; the actual waiting is delegated to a
//! [`DeferredTimer`] driver. Each arm is identified by a [`LongPressTicket`],
//! so a timeout that was cancelled or superseded can never fire.

use std::time::Duration;

use crossbeam_channel::Sender;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

/// Identifies one arm of the long-press timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LongPressTicket {
    generation: u64,
}

/// Something that can call back after a delay.
///
/// Implementations deliver a fired ticket to the owner of the gesture state
/// machine, which passes it to
/// [`GestureStateMachine::on_long_press_timeout()`](super::GestureStateMachine::on_long_press_timeout).
pub trait DeferredTimer: Send {
    /// Starts waiting for `delay`, replacing any previous wait.
    fn arm(&mut self, ticket: LongPressTicket, delay: Duration);
    /// Stops waiting. Must be a no-op if nothing is armed.
    fn disarm(&mut self);
}

/// A timer that never calls back by itself.
///
/// The host drives it by calling
/// [`GestureStateMachine::poll_long_press()`](super::GestureStateMachine::poll_long_press)
/// with the current time, e.g., from its own frame clock.
#[derive(Debug, Default)]
pub struct ManualTimer;

impl DeferredTimer for ManualTimer {
    fn arm(&mut self, _ticket: LongPressTicket, _delay: Duration) { }
    fn disarm(&mut self) { }
}

/// A timer backed by a tokio task that sends the fired ticket over a channel.
pub struct TokioTimer {
    runtime: Handle,
    sender: Sender<LongPressTicket>,
    task: Option<JoinHandle<()>>,
}

impl TokioTimer {
    pub fn new(runtime: Handle, sender: Sender<LongPressTicket>) -> Self {
        Self { runtime, sender, task: None }
    }
}

impl DeferredTimer for TokioTimer {
    fn arm(&mut self, ticket: LongPressTicket, delay: Duration) {
        self.disarm();
        let sender = self.sender.clone();
        self.task = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(ticket).is_err() {
                warn!("Long-press timer fired after its receiver was dropped.");
            }
        }));
    }

    fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Arms, cancels, and validates the one-shot long-press timer.
pub struct LongPressScheduler {
    timeout: Duration,
    armed: Option<(LongPressTicket, u64)>,
    next_generation: u64,
    timer: Box<dyn DeferredTimer>,
}

impl LongPressScheduler {
    pub fn new(timeout_ms: u64, timer: Box<dyn DeferredTimer>) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            armed: None,
            next_generation: 0,
            timer,
        }
    }

    /// Arms the timer, starting at `now_ms`.
    ///
    /// If the timer was already armed, that previous arm is cancelled first.
    pub fn schedule(&mut self, now_ms: u64) -> LongPressTicket {
        self.cancel();
        let ticket = LongPressTicket { generation: self.next_generation };
        self.next_generation += 1;
        let deadline = now_ms.saturating_add(self.timeout.as_millis() as u64);
        self.armed = Some((ticket, deadline));
        self.timer.arm(ticket, self.timeout);
        ticket
    }

    /// Disarms the timer if it is armed. Idempotent.
    pub fn cancel(&mut self) {
        if let Some((ticket, _)) = self.armed.take() {
            debug!("Cancelled long-press {ticket:?}");
            self.timer.disarm();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Consumes a fired ticket.
    ///
    /// Returns `true` exactly once for the currently-armed ticket, after which
    /// the timer is disarmed. Stale or repeated tickets return `false`.
    pub fn fire(&mut self, ticket: LongPressTicket) -> bool {
        match self.armed {
            Some((armed, _)) if armed == ticket => {
                self.armed = None;
                true
            }
            _ => {
                debug!("Ignoring stale long-press {ticket:?}");
                false
            }
        }
    }

    /// Returns the armed ticket if its deadline has passed at `now_ms`.
    ///
    /// This doesn't consume the ticket; pass it to [`Self::fire()`] for that.
    pub fn due(&self, now_ms: u64) -> Option<LongPressTicket> {
        self.armed
            .filter(|(_, deadline)| now_ms >= *deadline)
            .map(|(ticket, _)| ticket)
    }
}

impl std::fmt::Debug for LongPressScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LongPressScheduler")
            .field("timeout", &self.timeout)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

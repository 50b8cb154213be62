//! Replays a scripted pointer stream against one message row.
//!
//! A script is a JSON document holding a message, the state of the surface
//! it is shown on, how the message's own touch handling behaves, and the
//! pointer events to feed. Long-press timeouts are driven by the event
//! timestamps, and sender lookups are answered from the script.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::Config,
    error::Result,
    gesture::{
        GestureIntent, GestureStateMachine, ManualTimer, MessageTouchTarget, PointerEvent,
        SurfaceState, TouchResponse,
    },
    message::{ChatMember, MessageFacade, MessageId},
};

/// How the scripted message's own touch handling behaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptedBehavior {
    /// The message claims every pointer-down for its own touch handler.
    pub claims_touch: bool,
    pub allow_long_press: bool,
    pub ignore_tap: bool,
    /// The message's own click handler consumes taps.
    pub handles_click: bool,
    /// The message's own handler consumes long-presses.
    pub handles_long_press: bool,
    /// The grouped message found under any point.
    pub message_under_pointer: Option<MessageId>,
}
impl Default for ScriptedBehavior {
    fn default() -> Self {
        Self {
            claims_touch: false,
            allow_long_press: true,
            ignore_tap: false,
            handles_click: false,
            handles_long_press: false,
            message_under_pointer: None,
        }
    }
}

/// A complete replay script.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    /// Overrides the config given to [`run_replay()`], if present.
    pub config: Option<Config>,
    pub message: MessageFacade,
    pub surface: SurfaceState,
    pub behavior: ScriptedBehavior,
    pub events: Vec<PointerEvent>,
    /// The answer to every sender lookup; `None` answers with "no sender".
    pub sender_status: Option<ChatMember>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where a replayed step came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepSource {
    Pointer,
    LongPressTimer,
    SenderLookup,
}

/// The outcome of one input fed to the state machine during a replay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub source: StepSource,
    #[serde(flatten)]
    pub response: TouchResponse,
}

struct ScriptedMessage {
    message: MessageFacade,
    behavior: ScriptedBehavior,
}

impl MessageTouchTarget for ScriptedMessage {
    fn message(&self) -> &MessageFacade {
        &self.message
    }
    fn should_ignore_tap(&self, _event: &PointerEvent) -> bool {
        self.behavior.ignore_tap
    }
    fn allow_long_press(&self, _x: f32, _y: f32) -> bool {
        self.behavior.allow_long_press
    }
    fn on_touch(&mut self, _event: &PointerEvent) -> bool {
        self.behavior.claims_touch
    }
    fn perform_long_press(&mut self, _x: f32, _y: f32) -> bool {
        self.behavior.handles_long_press
    }
    fn on_click(&mut self) -> bool {
        self.behavior.handles_click
    }
    fn find_message_id_under(&self, _x: f32, _y: f32) -> Option<MessageId> {
        self.behavior.message_under_pointer
    }
}

/// Feeds all events of the script through a fresh state machine,
/// returning one step per pointer event plus every timer or lookup step that did something.
pub fn run_replay(script: ReplayScript, config: Config) -> Vec<ReplayStep> {
    let config = script.config.unwrap_or(config);
    let mut machine = GestureStateMachine::new(config, Box::new(ManualTimer));
    let mut target = ScriptedMessage { message: script.message, behavior: script.behavior };
    let surface = script.surface;
    let mut steps = Vec::new();

    for event in &script.events {
        let fired = machine.poll_long_press(event.timestamp_ms, &mut target, &surface);
        let lookups = lookup_requests(&fired);
        record(&mut steps, event.timestamp_ms, StepSource::LongPressTimer, fired);
        for request_id in lookups {
            let member = script.sender_status.clone();
            let answered = machine.on_sender_status(request_id, member, Some(&target.message), &surface);
            record(&mut steps, event.timestamp_ms, StepSource::SenderLookup, answered);
        }

        debug!("Replaying {event:?}");
        let response = machine.handle_event(event, Some(&mut target), &surface);
        let lookups = lookup_requests(&response);
        record(&mut steps, event.timestamp_ms, StepSource::Pointer, response);
        for request_id in lookups {
            let member = script.sender_status.clone();
            let answered = machine.on_sender_status(request_id, member, Some(&target.message), &surface);
            record(&mut steps, event.timestamp_ms, StepSource::SenderLookup, answered);
        }
    }
    machine.destroy();
    steps
}

/// Records a step; timer and lookup steps are only kept if they did something.
fn record(steps: &mut Vec<ReplayStep>, at_ms: u64, source: StepSource, response: TouchResponse) {
    if source == StepSource::Pointer || response.handled || !response.intents.is_empty() {
        steps.push(ReplayStep { at_ms, source, response });
    }
}

fn lookup_requests(response: &TouchResponse) -> Vec<u64> {
    response.intents.iter()
        .filter_map(|intent| match intent {
            GestureIntent::RequestSenderStatus(request) => Some(request.request_id),
            _ => None,
        })
        .collect()
}

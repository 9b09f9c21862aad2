//! Assistant panel state machine.
//!
//! DESIGN
//! ======
//! Two phases: `Idle` and `AwaitingReply`. A submission is accepted only
//! while idle and only when non-blank; it appends the user entry and returns
//! the request to send. `settle` applies the outcome of that request exactly
//! once. Network I/O stays in the component, so every transition here is a
//! plain synchronous method.
//!
//! The transcript is what the user sees. The context is what the model sees:
//! completed exchanges only, so failure apologies never reach the model.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::net::types::{AssistantRequest, ChatMessage};
use crate::util::latch::Latch;

/// Question sent automatically when the panel first mounts.
pub const SEED_MESSAGE: &str = "/dev/mmcblk0 my sd right?";

/// Shown in the banner and appended to the transcript when a call fails.
pub const FAILURE_MESSAGE: &str =
    "Sorry, I encountered an error. Please check your connection or API key and try again.";

#[derive(Clone, Debug, Default)]
pub struct AssistantState {
    transcript: Vec<ChatMessage>,
    context: Vec<ChatMessage>,
    /// Utterance of the outstanding request, if any.
    in_flight: Option<String>,
    error: Option<String>,
    seeded: Latch,
}

impl AssistantState {
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether `input` would be accepted by [`submit`](Self::submit) right now.
    #[must_use]
    pub fn can_submit(&self, input: &str) -> bool {
        !self.is_pending() && !input.trim().is_empty()
    }

    /// Idle → `AwaitingReply`. Returns the request to send, or `None` when
    /// the input is blank or a reply is still outstanding.
    pub fn submit(&mut self, input: &str) -> Option<AssistantRequest> {
        if !self.can_submit(input) {
            return None;
        }
        let message = input.trim().to_owned();
        self.transcript.push(ChatMessage::user(message.clone()));
        self.error = None;
        self.in_flight = Some(message.clone());
        Some(AssistantRequest { history: self.context.clone(), message })
    }

    /// Seed the transcript with [`SEED_MESSAGE`] and submit it. Fires at most
    /// once per state, however often it is called.
    pub fn seed(&mut self) -> Option<AssistantRequest> {
        if !self.seeded.trip() {
            return None;
        }
        self.submit(SEED_MESSAGE)
    }

    /// `AwaitingReply` → Idle. Appends the reply, or [`FAILURE_MESSAGE`] and
    /// sets the error. Returns `false` (and changes nothing) when no request
    /// is outstanding.
    pub fn settle<E>(&mut self, outcome: Result<String, E>) -> bool {
        let Some(message) = self.in_flight.take() else {
            return false;
        };
        match outcome {
            Ok(reply) => {
                self.transcript.push(ChatMessage::assistant(reply.clone()));
                self.context.push(ChatMessage::user(message));
                self.context.push(ChatMessage::assistant(reply));
            }
            Err(_) => {
                self.transcript.push(ChatMessage::assistant(FAILURE_MESSAGE));
                self.error = Some(FAILURE_MESSAGE.to_owned());
            }
        }
        true
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AssistantPhase {
    Idle,
    AwaitingReply,
}

#[cfg(test)]
impl AssistantState {
    /// Completed exchanges sent as history with the next request.
    pub(crate) fn context(&self) -> &[ChatMessage] {
        &self.context
    }

    pub(crate) fn phase(&self) -> AssistantPhase {
        if self.is_pending() { AssistantPhase::AwaitingReply } else { AssistantPhase::Idle }
    }
}

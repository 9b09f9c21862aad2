//! Assistant relay: validated chat context → one LLM call → reply text.
//!
//! DESIGN
//! ======
//! The browser never sees the provider key or the system instruction. Each
//! request carries the completed exchanges so far plus one new utterance;
//! the server keeps no session state between requests.

use std::sync::{Arc, OnceLock};

use client::net::types::{AssistantRequest, ChatMessage, ChatRole};
use tracing::{info, warn};

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

const DEFAULT_ASSISTANT_MAX_TOKENS: u32 = 1024;

/// Fixed persona for every assistant call.
pub const SYSTEM_INSTRUCTION: &str = "You are a friendly and expert AI assistant specializing in NVIDIA Jetson \
devices and Linux. Your primary goal is to help users safely clone their Jetson OS from an SD card to an SSD. Be \
cautious with commands, explain risks clearly, and always double-check the user's understanding, especially \
regarding `dd` and drive identifiers like /dev/mmcblk0 or /dev/sda.";

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn assistant_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("ASSISTANT_MAX_TOKENS", DEFAULT_ASSISTANT_MAX_TOKENS))
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("invalid history: {0}")]
    InvalidHistory(String),
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM returned no text")]
    EmptyReply,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl crate::error::ErrorCode for AssistantError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "E_EMPTY_MESSAGE",
            Self::InvalidHistory(_) => "E_INVALID_HISTORY",
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::EmptyReply | Self::Llm(_) => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable())
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check that `request` is a well-formed continuation of a conversation.
///
/// History must alternate `user`/`assistant` starting with `user` and end on
/// an assistant turn, so the new message keeps the alternation.
///
/// # Errors
///
/// [`AssistantError::EmptyMessage`] for a blank utterance,
/// [`AssistantError::InvalidHistory`] for malformed history.
pub fn validate_request(request: &AssistantRequest) -> Result<(), AssistantError> {
    if request.message.trim().is_empty() {
        return Err(AssistantError::EmptyMessage);
    }

    for (i, entry) in request.history.iter().enumerate() {
        let expected = if i % 2 == 0 { ChatRole::User } else { ChatRole::Assistant };
        if entry.role != expected {
            return Err(AssistantError::InvalidHistory(format!(
                "entry {i} has role {}, expected {}",
                entry.role.as_str(),
                expected.as_str()
            )));
        }
        if entry.text.trim().is_empty() {
            return Err(AssistantError::InvalidHistory(format!("entry {i} is empty")));
        }
    }

    if request.history.len() % 2 != 0 {
        return Err(AssistantError::InvalidHistory("history must end with an assistant reply".into()));
    }

    Ok(())
}

/// History followed by the new user message, in conversation order.
#[must_use]
pub fn build_messages(history: &[ChatMessage], message: &str) -> Vec<Message> {
    history
        .iter()
        .map(|entry| match entry.role {
            ChatRole::User => Message::user(entry.text.as_str()),
            ChatRole::Assistant => Message::assistant(entry.text.as_str()),
        })
        .chain(std::iter::once(Message::user(message.trim())))
        .collect()
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Relay one assistant turn.
///
/// Validation runs before the configuration check so malformed requests are
/// rejected the same way whether or not a provider is configured.
///
/// # Errors
///
/// See [`AssistantError`].
pub async fn reply(llm: Option<&Arc<dyn LlmChat>>, request: &AssistantRequest) -> Result<String, AssistantError> {
    validate_request(request)?;
    let llm = llm.ok_or(AssistantError::LlmNotConfigured)?;

    let messages = build_messages(&request.history, &request.message);
    info!(history_len = request.history.len(), message_len = request.message.len(), "assistant: message received");

    let response = llm
        .chat(assistant_max_tokens(), SYSTEM_INSTRUCTION, &messages)
        .await
        .inspect_err(|e| warn!(error = %e, "assistant: llm call failed"))?;

    info!(
        model = %response.model,
        stop_reason = response.stop_reason.as_str(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "assistant: llm response"
    );

    response.reply_text().map(str::to_owned).ok_or_else(|| {
        warn!(stop_reason = response.stop_reason.as_str(), "assistant: llm returned no text");
        AssistantError::EmptyReply
    })
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;

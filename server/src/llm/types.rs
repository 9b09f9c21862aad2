//! Chat types, errors, and the [`LlmChat`] seam the relay calls through.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling the LLM provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value was present but unusable.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The environment variable that should hold the API key is unset or blank.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The request never produced an HTTP response (DNS, TLS, timeout).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider answered with a non-success status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider answered 200 but the body was not the expected shape.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Transport failures, rate limits, and provider-side 5xx may succeed if
    /// the user sends again; everything else will fail the same way.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// One conversation turn. `role` is [`ROLE_USER`] or [`ROLE_ASSISTANT`];
/// provider vocabularies are applied at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ROLE_USER, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ROLE_ASSISTANT, content: content.into() }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Why the model stopped producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Natural end of the answer.
    EndTurn,
    /// Cut off by the output token limit; any text is partial but usable.
    MaxTokens,
    /// Withheld by the provider's safety filters; there is no answer to show.
    Refusal,
}

impl StopReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EndTurn => "end_turn",
            Self::MaxTokens => "max_tokens",
            Self::Refusal => "refusal",
        }
    }
}

/// Normalised result of one chat call.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Answer text with thought parts already removed. May be empty.
    pub text: String,
    pub model: String,
    pub stop_reason: StopReason,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl ChatResponse {
    /// The text to relay to the user, or `None` when there is nothing worth
    /// showing: blank output, or a refusal whatever partial text came with it.
    #[must_use]
    pub fn reply_text(&self) -> Option<&str> {
        if self.stop_reason == StopReason::Refusal || self.text.trim().is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Async chat seam between the relay and the provider. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send `messages` under the `system` instruction and return the reply.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response is malformed.
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

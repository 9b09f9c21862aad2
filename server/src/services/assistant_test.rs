use super::*;
use crate::error::ErrorCode;
use crate::llm::types::{ChatResponse, StopReason};
use std::sync::Mutex;

// =========================================================================
// MockLlm
// =========================================================================

#[derive(Default)]
struct MockLlm {
    reply: Option<String>,
    fail_status: Option<u16>,
    refused: bool,
    calls: Mutex<Vec<(String, Vec<Message>)>>,
}

impl MockLlm {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Some(text.into()), ..Self::default() })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self { fail_status: Some(status), ..Self::default() })
    }

    fn refusing(partial: &str) -> Arc<Self> {
        Arc::new(Self { reply: Some(partial.into()), refused: true, ..Self::default() })
    }

    fn silent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, _max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_owned(), messages.to_vec()));
        if let Some(status) = self.fail_status {
            return Err(LlmError::ApiResponse { status, body: "boom".into() });
        }
        Ok(ChatResponse {
            text: self.reply.clone().unwrap_or_default(),
            model: "mock".into(),
            stop_reason: if self.refused { StopReason::Refusal } else { StopReason::EndTurn },
            input_tokens: 0,
            output_tokens: 0,
        })
    }
}

fn request(history: Vec<ChatMessage>, message: &str) -> AssistantRequest {
    AssistantRequest { history, message: message.into() }
}

fn as_dyn(mock: &Arc<MockLlm>) -> Arc<dyn LlmChat> {
    mock.clone()
}

// =========================================================================
// validate_request
// =========================================================================

#[test]
fn validate_accepts_first_message() {
    assert!(validate_request(&request(vec![], "/dev/mmcblk0 my sd right?")).is_ok());
}

#[test]
fn validate_accepts_completed_exchanges() {
    let history = vec![ChatMessage::user("q1"), ChatMessage::assistant("a1")];
    assert!(validate_request(&request(history, "q2")).is_ok());
}

#[test]
fn validate_rejects_blank_message() {
    for message in ["", "   ", "\n\t"] {
        assert!(matches!(validate_request(&request(vec![], message)), Err(AssistantError::EmptyMessage)));
    }
}

#[test]
fn validate_rejects_history_starting_with_assistant() {
    let history = vec![ChatMessage::assistant("hi"), ChatMessage::user("q")];
    assert!(matches!(validate_request(&request(history, "q")), Err(AssistantError::InvalidHistory(_))));
}

#[test]
fn validate_rejects_repeated_role() {
    let history = vec![ChatMessage::user("q1"), ChatMessage::user("q2")];
    assert!(matches!(validate_request(&request(history, "q3")), Err(AssistantError::InvalidHistory(_))));
}

#[test]
fn validate_rejects_dangling_user_turn() {
    let history = vec![ChatMessage::user("q1")];
    assert!(matches!(validate_request(&request(history, "q2")), Err(AssistantError::InvalidHistory(_))));
}

#[test]
fn validate_rejects_blank_history_entry() {
    let history = vec![ChatMessage::user("q1"), ChatMessage::assistant(" ")];
    assert!(matches!(validate_request(&request(history, "q2")), Err(AssistantError::InvalidHistory(_))));
}

// =========================================================================
// build_messages
// =========================================================================

#[test]
fn build_messages_appends_trimmed_message_in_order() {
    let history = vec![ChatMessage::user("q1"), ChatMessage::assistant("a1")];
    let messages = build_messages(&history, "  thanks ");
    assert_eq!(messages, vec![Message::user("q1"), Message::assistant("a1"), Message::user("thanks")]);
}

// =========================================================================
// AssistantError
// =========================================================================

#[test]
fn error_codes() {
    assert_eq!(AssistantError::EmptyMessage.error_code(), "E_EMPTY_MESSAGE");
    assert_eq!(AssistantError::InvalidHistory("x".into()).error_code(), "E_INVALID_HISTORY");
    assert_eq!(AssistantError::LlmNotConfigured.error_code(), "E_LLM_NOT_CONFIGURED");
    assert_eq!(AssistantError::EmptyReply.error_code(), "E_LLM_ERROR");
    assert_eq!(AssistantError::Llm(LlmError::ApiParse("x".into())).error_code(), "E_LLM_ERROR");
}

#[test]
fn retryable_follows_llm_error() {
    assert!(AssistantError::Llm(LlmError::ApiResponse { status: 503, body: String::new() }).retryable());
    assert!(!AssistantError::Llm(LlmError::ApiResponse { status: 401, body: String::new() }).retryable());
    assert!(!AssistantError::LlmNotConfigured.retryable());
    assert!(!AssistantError::EmptyMessage.retryable());
}

// =========================================================================
// reply
// =========================================================================

#[tokio::test]
async fn reply_returns_model_text() {
    let mock = MockLlm::replying("Yes, /dev/mmcblk0 is usually the SD card.");
    let llm = as_dyn(&mock);
    let text = reply(Some(&llm), &request(vec![], "/dev/mmcblk0 my sd right?"))
        .await
        .unwrap();
    assert_eq!(text, "Yes, /dev/mmcblk0 is usually the SD card.");
}

#[tokio::test]
async fn reply_sends_system_instruction_and_context() {
    let mock = MockLlm::replying("You're welcome!");
    let llm = as_dyn(&mock);
    let history = vec![ChatMessage::user("/dev/mmcblk0 my sd right?"), ChatMessage::assistant("Yes.")];
    reply(Some(&llm), &request(history, "thanks")).await.unwrap();

    let calls = mock.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (system, messages) = &calls[0];
    assert_eq!(system, SYSTEM_INSTRUCTION);
    assert!(system.contains("NVIDIA Jetson"));
    assert!(system.contains("/dev/mmcblk0"));
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2], Message::user("thanks"));
}

#[tokio::test]
async fn reply_without_llm_is_not_configured() {
    let result = reply(None, &request(vec![], "hello")).await;
    assert!(matches!(result, Err(AssistantError::LlmNotConfigured)));
}

#[tokio::test]
async fn reply_validates_before_config_check() {
    let result = reply(None, &request(vec![], "  ")).await;
    assert!(matches!(result, Err(AssistantError::EmptyMessage)));
}

#[tokio::test]
async fn reply_rejects_invalid_input_without_calling_model() {
    let mock = MockLlm::replying("unused");
    let llm = as_dyn(&mock);
    let history = vec![ChatMessage::assistant("out of order")];
    let result = reply(Some(&llm), &request(history, "q")).await;
    assert!(matches!(result, Err(AssistantError::InvalidHistory(_))));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn reply_propagates_llm_failure() {
    let mock = MockLlm::failing(500);
    let llm = as_dyn(&mock);
    let result = reply(Some(&llm), &request(vec![], "hello")).await;
    assert!(matches!(result, Err(AssistantError::Llm(LlmError::ApiResponse { status: 500, .. }))));
}

#[tokio::test]
async fn reply_without_text_is_empty_reply() {
    let mock = MockLlm::silent();
    let llm = as_dyn(&mock);
    let result = reply(Some(&llm), &request(vec![], "hello")).await;
    assert!(matches!(result, Err(AssistantError::EmptyReply)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn reply_refused_by_provider_is_empty_reply() {
    let mock = MockLlm::refusing("I can't help with");
    let llm = as_dyn(&mock);
    let result = reply(Some(&llm), &request(vec![], "hello")).await;
    assert!(matches!(result, Err(AssistantError::EmptyReply)));
}

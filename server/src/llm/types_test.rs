use super::*;

fn response(text: &str, stop_reason: StopReason) -> ChatResponse {
    ChatResponse { text: text.into(), model: "m".into(), stop_reason, input_tokens: 0, output_tokens: 0 }
}

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_transport_and_server_errors() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
    for status in [429, 500, 503] {
        assert!(LlmError::ApiResponse { status, body: String::new() }.retryable(), "{status}");
    }
}

#[test]
fn not_retryable_client_and_config_errors() {
    for status in [400, 401, 403, 404] {
        assert!(!LlmError::ApiResponse { status, body: String::new() }.retryable(), "{status}");
    }
    assert!(!LlmError::ConfigParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "K".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::HttpClientBuild("tls".into()).retryable());
}

#[test]
fn display_missing_api_key_names_var() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

// =============================================================================
// Message
// =============================================================================

#[test]
fn message_constructors_use_canonical_roles() {
    assert_eq!(Message::user("q").role, ROLE_USER);
    assert_eq!(Message::assistant("a").role, ROLE_ASSISTANT);
    assert_eq!(Message::user("q").content, "q");
}

// =============================================================================
// ChatResponse::reply_text
// =============================================================================

#[test]
fn reply_text_returns_answer() {
    assert_eq!(response("Yes, mmcblk0 is the SD card.", StopReason::EndTurn).reply_text(), Some("Yes, mmcblk0 is the SD card."));
}

#[test]
fn reply_text_keeps_truncated_answer() {
    assert_eq!(response("partial", StopReason::MaxTokens).reply_text(), Some("partial"));
}

#[test]
fn reply_text_none_when_blank() {
    assert!(response("", StopReason::EndTurn).reply_text().is_none());
    assert!(response(" \n", StopReason::EndTurn).reply_text().is_none());
}

#[test]
fn reply_text_none_on_refusal_even_with_partial_text() {
    assert!(response("I can't", StopReason::Refusal).reply_text().is_none());
}

#[test]
fn stop_reason_labels() {
    assert_eq!(StopReason::EndTurn.as_str(), "end_turn");
    assert_eq!(StopReason::MaxTokens.as_str(), "max_tokens");
    assert_eq!(StopReason::Refusal.as_str(), "refusal");
}

//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; the detail string is meant
//! for logs, not for display.

#![allow(clippy::unused_async)]

use super::types::AssistantRequest;
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, AssistantReply};

/// Relay endpoint for assistant messages.
pub const ASSISTANT_CHAT_PATH: &str = "/api/assistant/chat";

/// Send the context plus a new utterance via `POST /api/assistant/chat` and
/// return the reply text.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-success status, or the body cannot be decoded.
pub async fn send_assistant_message(request: &AssistantRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ASSISTANT_CHAT_PATH)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(match resp.json::<ApiErrorBody>().await {
                Ok(body) => format!("assistant request failed: {status} {}: {}", body.code, body.message),
                Err(_) => format!("assistant request failed: {status}"),
            });
        }
        let body: AssistantReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

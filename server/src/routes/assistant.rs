//! Assistant relay route.
//!
//! ERROR HANDLING
//! ==============
//! Failures map to a status via `assistant_error_to_status` and carry an
//! `ApiErrorBody` so the browser can log a stable code.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use client::net::types::{ApiErrorBody, AssistantReply, AssistantRequest};

use crate::error::error_body;
use crate::services::assistant::{self, AssistantError};
use crate::state::AppState;

pub(crate) fn assistant_error_to_status(err: &AssistantError) -> StatusCode {
    match err {
        AssistantError::EmptyMessage | AssistantError::InvalidHistory(_) => StatusCode::BAD_REQUEST,
        AssistantError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        AssistantError::EmptyReply | AssistantError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/assistant/chat`: relay one utterance plus context to the LLM.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantReply>, (StatusCode, Json<ApiErrorBody>)> {
    match assistant::reply(state.llm.as_ref(), &request).await {
        Ok(reply) => Ok(Json(AssistantReply { reply })),
        Err(e) => Err((assistant_error_to_status(&e), Json(error_body(&e)))),
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;

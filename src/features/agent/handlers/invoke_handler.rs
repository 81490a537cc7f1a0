use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::LenientJson;
use crate::shared::constants::DEFAULT_USER_MESSAGE;

use super::super::dtos::{InvokeAgentDto, InvokeAgentResponseDto};
use super::super::services::AgentInvocationService;

/// POST /agent
/// Run a user message through the agent and return its reply
#[utoipa::path(
    post,
    path = "/agent",
    request_body = InvokeAgentDto,
    responses(
        (status = 200, description = "Assistant reply", body = InvokeAgentResponseDto),
        (status = 400, description = "Missing threadId"),
        (status = 500, description = "Agent service failure"),
        (status = 504, description = "Run did not finish within the poll budget")
    ),
    tag = "agent"
)]
pub async fn invoke_agent(
    State(service): State<Arc<AgentInvocationService>>,
    LenientJson(dto): LenientJson<InvokeAgentDto>,
) -> Result<Json<InvokeAgentResponseDto>> {
    let message = dto.message().unwrap_or(DEFAULT_USER_MESSAGE);
    tracing::debug!("User message: {}", message);

    // The thread id is the one parameter with no fallback: replies only make
    // sense on a thread the caller already holds.
    let thread_id = dto
        .thread_id()
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: threadId".to_string()))?;

    let reply = service.invoke(thread_id, dto.agent(), message).await?;

    Ok(Json(InvokeAgentResponseDto { message: reply }))
}

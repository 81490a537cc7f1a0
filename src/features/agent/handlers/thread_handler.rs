use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;

use super::super::dtos::CreateThreadResponseDto;
use super::super::services::AgentInvocationService;

/// GET /thread
/// Create a new conversation thread on the agent service
#[utoipa::path(
    get,
    path = "/thread",
    responses(
        (status = 200, description = "Thread created", body = CreateThreadResponseDto),
        (status = 500, description = "Agent service failure")
    ),
    tag = "agent"
)]
pub async fn create_thread(
    State(service): State<Arc<AgentInvocationService>>,
) -> Result<Json<CreateThreadResponseDto>> {
    let thread_id = service.open_thread().await?;

    Ok(Json(CreateThreadResponseDto { thread_id }))
}

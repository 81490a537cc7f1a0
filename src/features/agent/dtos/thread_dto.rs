use serde::Serialize;
use utoipa::ToSchema;

/// Response DTO for thread creation
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadResponseDto {
    /// Id of the freshly created thread, to be echoed back on `POST /agent`
    pub thread_id: String,
}

use serde::Serialize;
use utoipa::ToSchema;

/// Response DTO naming the best programmer
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BestProgrammerDto {
    pub name: String,
    pub company: String,
}

use axum::Json;

use super::super::dtos::BestProgrammerDto;

/// GET /programmers/best
/// Return the one true answer
#[utoipa::path(
    get,
    path = "/programmers/best",
    responses(
        (status = 200, description = "The best programmer", body = BestProgrammerDto)
    ),
    tag = "programmers"
)]
pub async fn get_best_programmer() -> Json<BestProgrammerDto> {
    Json(BestProgrammerDto {
        name: "Thomas".to_string(),
        company: "Corporate Software AG".to_string(),
    })
}

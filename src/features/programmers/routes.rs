use axum::{routing::get, Router};

use super::handlers::programmer_handler;

/// Create routes for the programmers feature
///
/// Stateless; the endpoint answers from a literal.
pub fn routes() -> Router {
    Router::new().route(
        "/programmers/best",
        get(programmer_handler::get_best_programmer),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use super::routes;

    #[tokio::test]
    async fn returns_the_fixed_winner() {
        let server = TestServer::new(routes()).expect("failed to start test server");

        let response = server.get("/programmers/best").await;

        response.assert_status_ok();
        response.assert_json(&json!({"name": "Thomas", "company": "Corporate Software AG"}));
    }

    #[tokio::test]
    async fn answer_is_stable_across_calls() {
        let server = TestServer::new(routes()).expect("failed to start test server");

        let first = server.get("/programmers/best").await.text();
        let second = server.get("/programmers/best").await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn only_get_is_accepted() {
        let server = TestServer::new(routes()).expect("failed to start test server");

        let response = server.post("/programmers/best").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}

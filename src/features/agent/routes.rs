use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{invoke_handler, thread_handler};
use super::services::AgentInvocationService;

/// Create routes for the agent relay feature
pub fn routes(service: Arc<AgentInvocationService>) -> Router {
    Router::new()
        .route("/agent", post(invoke_handler::invoke_agent))
        .route("/thread", get(thread_handler::create_thread))
        .with_state(service)
}
